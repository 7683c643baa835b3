use rand::Rng;
use serde::{Deserialize, Serialize};

/// One move of the rock-paper-scissors alphabet.
///
/// The alphabet is closed: every `Move` value is one of the three variants,
/// so model code never has to validate symbols at runtime. Validation happens
/// once, at the parsing boundary (`from_char`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
	Rock,
	Paper,
	Scissors,
}

impl Move {
	/// All moves, from highest to lowest tie-break precedence.
	///
	/// When two moves have been observed equally often, the one listed
	/// first here wins the tie.
	pub const ALL: [Move; 3] = [Move::Scissors, Move::Paper, Move::Rock];

	/// Draws a uniformly random move.
	///
	/// Used whenever a model has no informed prediction to offer.
	pub fn random() -> Self {
		Self::ALL[rand::rng().random_range(0..Self::ALL.len())]
	}

	/// Parses a move from its single-character encoding.
	///
	/// Accepts `r`, `p` and `s`, case-insensitive.
	///
	/// # Errors
	/// Returns an error for any other character.
	pub fn from_char(c: char) -> Result<Self, String> {
		match c.to_ascii_lowercase() {
			'r' => Ok(Move::Rock),
			'p' => Ok(Move::Paper),
			's' => Ok(Move::Scissors),
			_ => Err(format!("Invalid move: {}", c)),
		}
	}

	/// Returns the single-character encoding of the move.
	///
	/// Also used to build context keys in the frequency table.
	pub fn as_char(&self) -> char {
		match self {
			Move::Rock => 'r',
			Move::Paper => 'p',
			Move::Scissors => 's',
		}
	}
}
