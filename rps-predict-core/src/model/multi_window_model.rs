use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use serde::{Deserialize, Serialize};

use super::game_move::Move;
use super::sequence_model::SequenceModel;

/// Combined model over several window sizes.
///
/// This struct manages:
/// - `models`: a map from window size to its corresponding `SequenceModel`.
///
/// Every observation is fed to all inner models, so each window size keeps
/// its own view of the same move stream. Predictions consult the longest
/// context first and fall back to shorter ones, so a context never seen at
/// one length does not hide what a shorter length already learned.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MultiWindowModel {
	models: HashMap<usize, SequenceModel>,
}

impl MultiWindowModel {
	/// Creates a combined model for the given window sizes.
	///
	/// Duplicate sizes collapse into a single model.
	///
	/// # Errors
	/// Returns an error when no sizes are given or any size is < 2.
	pub fn new(window_sizes: &[usize]) -> Result<Self, String> {
		if window_sizes.is_empty() {
			return Err("At least one window size is required".to_owned());
		}
		let mut models = HashMap::new();
		for &size in window_sizes {
			models.entry(size).or_insert(SequenceModel::new(size)?);
		}
		Ok(Self { models })
	}

	/// Builds a combined model from recorded histories, in parallel.
	///
	/// Splits the histories into chunks (based on CPU cores * factor),
	/// accumulates each chunk into a partial model on its own thread and
	/// merges all partial models into the final one.
	///
	/// # Errors
	/// Returns an error if the window sizes are invalid.
	///
	/// # Notes
	/// - Uses MPSC channels to collect models from threads.
	/// - Each history is accumulated with `add_history`, so no learning
	///   sample ever spans two histories.
	/// - The returned model has an empty rolling window: recorded matches
	///   seed the frequency tables only.
	pub fn from_histories(window_sizes: &[usize], histories: &[Vec<Move>]) -> Result<Self, String> {
		let mut final_model = Self::new(window_sizes)?;
		if histories.is_empty() {
			return Ok(final_model);
		}

		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = (histories.len() + chunks - 1) / chunks;

		let (tx, rx) = mpsc::channel();
		for chunk in histories.chunks(chunk_size) {
			let tx = tx.clone();
			let chunk: Vec<Vec<Move>> = chunk.to_vec();
			let mut partial_model = final_model.clone();

			thread::spawn(move || {
				for history in &chunk {
					partial_model.add_history(history);
				}
				tx.send(partial_model).expect("Failed to send from thread");
			});
		}
		drop(tx);

		for partial_model in rx.iter() {
			final_model.merge(&partial_model)?;
		}

		Ok(final_model)
	}

	/// Ingests one newly observed move into every inner model.
	pub fn observe(&mut self, mv: Move) {
		for model in self.models.values_mut() {
			model.observe(mv);
		}
	}

	/// Accumulates a recorded history into every inner model.
	pub fn add_history(&mut self, history: &[Move]) {
		for model in self.models.values_mut() {
			model.add_history(history);
		}
	}

	/// Predicts the most likely next move.
	///
	/// Falls back to a uniformly random move when no window size has an
	/// informed prediction. Never mutates the model.
	pub fn predict(&self) -> Move {
		self.best_known().unwrap_or_else(Move::random)
	}

	/// Returns the first informed prediction, longest context first.
	pub fn best_known(&self) -> Option<Move> {
		let mut sizes: Vec<usize> = self.models.keys().copied().collect();
		sizes.sort_unstable_by(|a, b| b.cmp(a));
		for size in sizes {
			if let Some(mv) = self.models.get(&size).and_then(SequenceModel::best_known) {
				return Some(mv);
			}
		}
		None
	}

	/// Merges another combined model into this one.
	///
	/// Models for matching window sizes are merged in place; missing ones
	/// are cloned. Rolling windows are left untouched, like in
	/// `SequenceModel::merge`.
	///
	/// # Errors
	/// Propagates inner merge errors.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		for (size, model) in &other.models {
			if let Some(existing) = self.models.get_mut(size) {
				existing.merge(model)?;
			} else {
				self.models.insert(*size, model.clone());
			}
		}
		Ok(())
	}

	/// Returns the configured window sizes in ascending order.
	pub fn window_sizes(&self) -> Vec<usize> {
		let mut sizes: Vec<usize> = self.models.keys().copied().collect();
		sizes.sort_unstable();
		sizes
	}

	/// Returns the inner model for one window size, if configured.
	pub fn model(&self, window_size: usize) -> Option<&SequenceModel> {
		self.models.get(&window_size)
	}
}
