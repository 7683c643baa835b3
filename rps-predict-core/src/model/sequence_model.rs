use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::game_move::Move;
use super::key_stats::KeyStats;

/// Fixed-window sequence model over observed moves.
///
/// The `SequenceModel` keeps the trailing `window_size` observed moves and a
/// frequency table keyed by contexts of `window_size - 1` moves, and predicts
/// the next move as the most frequent observed continuation of the current
/// context.
///
/// # Responsibilities
/// - Maintain the rolling window of recent observations
/// - Accumulate (context, outcome) pairs into the frequency table
/// - Predict the next move from the current trailing context
/// - Train in bulk from recorded histories and merge with other models
///
/// # Invariants
/// - `window_size` is always >= 2
/// - `window` never holds more than `window_size` moves, most-recent-last
/// - Every key in `table` encodes a context of exactly `window_size - 1` moves
/// - Table entries are never removed and their totals never decrease
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SequenceModel {
	/// Number of trailing moves forming one learning sample (context + outcome).
	window_size: usize, // must be >= 2
	/// The most recent observed moves, oldest first.
	window: VecDeque<Move>,
	/// Mapping from an encoded context to its frequency record.
	table: HashMap<String, KeyStats>,
}

impl SequenceModel {
	/// Creates a new sequence model with the given window size.
	///
	/// # Errors
	/// Returns an error if `window_size < 2`: a context of at least one move
	/// must fit in the window alongside its outcome.
	pub fn new(window_size: usize) -> Result<Self, String> {
		if window_size < 2 {
			return Err("window size must be >= 2".to_owned());
		}
		Ok(Self { window_size, window: VecDeque::new(), table: HashMap::new() })
	}

	/// Ingests one newly observed move.
	///
	/// Appends the move to the window and clamps the window to the most
	/// recent `window_size` moves. Once the window is full, the pair
	/// (all moves but the newest, the newest move) is accumulated into the
	/// frequency record of that context, creating it on first sight.
	///
	/// # Notes
	/// - This is the only mutator of the rolling window.
	/// - Observing fewer than `window_size` moves in total never creates a
	///   table entry.
	pub fn observe(&mut self, mv: Move) {
		self.window.push_back(mv);
		if self.window.len() > self.window_size {
			self.window.pop_front();
		}
		if self.window.len() == self.window_size {
			let key = Self::encode(self.window.iter().take(self.window_size - 1));
			let stats = self.table.entry(key).or_insert_with(KeyStats::new);
			stats.increment(mv);
		}
	}

	/// Predicts the most likely next move.
	///
	/// Falls back to a uniformly random move whenever no informed prediction
	/// exists: not enough history, unknown context, or no observations for
	/// the context. Never mutates the model.
	pub fn predict(&self) -> Move {
		self.best_known().unwrap_or_else(Move::random)
	}

	/// Returns the most frequent continuation of the current context.
	///
	/// The context is the trailing `window_size - 1` moves of the window,
	/// i.e. all but the oldest once the window is full.
	///
	/// Returns `None` when the window still holds fewer moves than a context,
	/// when the context was never observed, or when its record is empty.
	/// Callers wanting a move in all cases use `predict`.
	pub fn best_known(&self) -> Option<Move> {
		let context = self.window_size - 1;
		if self.window.len() < context {
			return None;
		}
		let key = Self::encode(self.window.iter().skip(self.window.len() - context));
		self.table.get(&key)?.best()
	}

	/// Accumulates every n-gram of a recorded history into the table.
	///
	/// Breaks `history` into the same (context, outcome) pairs `observe`
	/// would have produced, but without touching the rolling window.
	/// Intended for seeding a model from past matches.
	///
	/// # Notes
	/// - Histories shorter than `window_size` contain no full n-gram and are
	///   ignored.
	pub fn add_history(&mut self, history: &[Move]) {
		if history.len() < self.window_size {
			// History too short, no n-grams to accumulate
			return;
		}
		for gram in history.windows(self.window_size) {
			let key = Self::encode(gram[..self.window_size - 1].iter());
			let outcome = gram[self.window_size - 1];
			let stats = self.table.entry(key).or_insert_with(KeyStats::new);
			stats.increment(outcome);
		}
	}

	/// Merges another model of the same window size into this one.
	///
	/// Frequency records for matching contexts are summed; missing ones are
	/// cloned. The rolling window is live session state and is left
	/// untouched.
	///
	/// # Errors
	/// Returns an error if the window sizes do not match.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		if self.window_size != other.window_size {
			return Err("Window size mismatch".to_owned());
		}
		for (key, stats) in &other.table {
			if let Some(existing) = self.table.get_mut(key) {
				existing.merge(stats);
			} else {
				self.table.insert(key.clone(), stats.clone());
			}
		}
		Ok(())
	}

	/// Returns the window size fixed at construction.
	pub fn window_size(&self) -> usize {
		self.window_size
	}

	/// Returns the current window contents, oldest first.
	pub fn window(&self) -> Vec<Move> {
		self.window.iter().copied().collect()
	}

	/// Returns the number of distinct contexts observed so far.
	pub fn context_count(&self) -> usize {
		self.table.len()
	}

	/// Returns the frequency record for the given context, if any.
	pub fn stats(&self, context: &[Move]) -> Option<&KeyStats> {
		self.table.get(&Self::encode(context.iter()))
	}

	/// Encodes a run of moves into a table key.
	fn encode<'a>(moves: impl Iterator<Item = &'a Move>) -> String {
		moves.map(Move::as_char).collect()
	}
}
