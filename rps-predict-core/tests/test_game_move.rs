//! Tests for the move alphabet.

use rps_predict_core::model::game_move::Move;

#[test]
fn test_char_round_trip() {
	for mv in Move::ALL {
		assert_eq!(Move::from_char(mv.as_char()), Ok(mv));
	}
}

#[test]
fn test_from_char_accepts_uppercase() {
	assert_eq!(Move::from_char('R'), Ok(Move::Rock));
	assert_eq!(Move::from_char('P'), Ok(Move::Paper));
	assert_eq!(Move::from_char('S'), Ok(Move::Scissors));
}

#[test]
fn test_from_char_rejects_unknown_characters() {
	assert!(Move::from_char('x').is_err());
	assert!(Move::from_char('0').is_err());
	assert!(Move::from_char(' ').is_err());
}

#[test]
fn test_random_returns_alphabet_moves() {
	for _ in 0..100 {
		assert!(Move::ALL.contains(&Move::random()));
	}
}

#[test]
fn test_precedence_order() {
	// Scissors outranks paper outranks rock in tie-breaks
	assert_eq!(Move::ALL, [Move::Scissors, Move::Paper, Move::Rock]);
}
