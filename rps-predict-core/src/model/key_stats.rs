use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::game_move::Move;

/// Frequency record for a single context.
///
/// A `KeyStats` corresponds to one fixed run of past moves (the context) and
/// stores how often each move was observed to follow it.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities
/// - Accumulate follow-up occurrences during learning
/// - Select the most frequent follow-up, with a fixed tie-break order
/// - Merge with another record for the same context (ex. parallel training)
///
/// ## Invariants
/// - `counts` holds one entry per alphabet move, present from construction
/// - `total` always equals the sum of all counts
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KeyStats {
	/// Observed follow-up moves indexed by move.
	/// The value represents how many times this follow-up was observed.
	/// Example: { Rock => 42, Paper => 3, Scissors => 0 }
	counts: HashMap<Move, usize>,
	/// Total number of observations accumulated in `counts`.
	total: usize,
}

impl KeyStats {
	/// Creates a new empty record with every count at zero.
	pub fn new() -> Self {
		Self {
			counts: Move::ALL.iter().map(|mv| (*mv, 0)).collect(),
			total: 0,
		}
	}

	/// Records one occurrence of `follow_up` after this record's context.
	pub fn increment(&mut self, follow_up: Move) {
		*self.counts.entry(follow_up).or_insert(0) += 1;
		self.total += 1;
	}

	/// Returns how often `follow_up` was observed after this context.
	pub fn count(&self, follow_up: Move) -> usize {
		self.counts.get(&follow_up).copied().unwrap_or(0)
	}

	/// Returns the total number of observations for this context.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Returns the most frequently observed follow-up move.
	///
	/// Moves are scanned in the order of `Move::ALL` and the current best is
	/// only replaced by a strictly greater count, starting from a threshold
	/// of zero. A move earlier in `Move::ALL` therefore wins any exact tie.
	///
	/// Returns `None` if nothing was observed yet (all counts zero).
	pub fn best(&self) -> Option<Move> {
		let mut best = None;
		let mut highest = 0;
		for mv in Move::ALL {
			let count = self.count(mv);
			if count > highest {
				best = Some(mv);
				highest = count;
			}
		}
		best
	}

	/// Merges another record into this one.
	///
	/// Counts and totals are summed, as if the other record's observations
	/// had been accumulated here one by one.
	pub fn merge(&mut self, other: &Self) {
		for (mv, occurrence) in &other.counts {
			*self.counts.entry(*mv).or_insert(0) += *occurrence;
		}
		self.total += other.total;
	}
}
