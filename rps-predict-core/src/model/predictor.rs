use std::collections::HashMap;

use super::game_move::Move;
use super::multi_window_model::MultiWindowModel;

/// Registry of per-opponent prediction models.
///
/// # Responsibilities
/// - Own one `MultiWindowModel` per tracked opponent
/// - Route observations and predictions by opponent name
/// - Merge registries built in separate sessions
#[derive(Debug)]
pub struct Predictor {
	models: HashMap<String, MultiWindowModel>,
}

impl Predictor {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self { models: HashMap::new() }
	}

	/// Starts tracking a new opponent with the given window sizes.
	///
	/// # Errors
	/// Returns an error if the opponent is already tracked or the window
	/// sizes are invalid.
	pub fn track(&mut self, name: &str, window_sizes: &[usize]) -> Result<(), String> {
		if self.models.contains_key(name) {
			return Err(format!("Opponent {} already tracked", name));
		}
		let model = MultiWindowModel::new(window_sizes)?;
		self.models.insert(name.to_owned(), model);
		Ok(())
	}

	/// Ingests one observed move for the given opponent.
	///
	/// # Errors
	/// Returns an error if the opponent is not tracked.
	pub fn observe(&mut self, name: &str, mv: Move) -> Result<(), String> {
		match self.models.get_mut(name) {
			Some(model) => {
				model.observe(mv);
				Ok(())
			}
			None => Err(format!("Opponent {} not tracked", name)),
		}
	}

	/// Predicts the given opponent's next move.
	///
	/// # Errors
	/// Returns an error if the opponent is not tracked.
	pub fn predict(&self, name: &str) -> Result<Move, String> {
		match self.models.get(name) {
			Some(model) => Ok(model.predict()),
			None => Err(format!("Opponent {} not tracked", name)),
		}
	}

	/// Returns the list of tracked opponent names.
	pub fn opponents(&self) -> Vec<String> {
		self.models.keys().map(|k| k.to_owned()).collect::<Vec<_>>()
	}

	/// Returns the model for one opponent, if tracked.
	pub fn model(&self, name: &str) -> Option<&MultiWindowModel> {
		self.models.get(name)
	}

	/// Merges another registry into this one.
	///
	/// # Notes
	/// - Opponents tracked on both sides have their models merged; new ones
	///   are cloned.
	pub fn merge(&mut self, other: &Self) -> Result<(), String> {
		for (name, model) in &other.models {
			if let Some(existing) = self.models.get_mut(name) {
				existing.merge(model)?;
			} else {
				self.models.insert(name.clone(), model.clone());
			}
		}
		Ok(())
	}
}
