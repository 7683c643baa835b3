//! Tests for the multi-size combined model.

use rps_predict_core::model::game_move::Move;
use rps_predict_core::model::game_move::Move::{Paper, Rock, Scissors};
use rps_predict_core::model::multi_window_model::MultiWindowModel;

#[test]
fn test_at_least_one_window_size_is_required() {
	assert!(MultiWindowModel::new(&[]).is_err());
	assert!(MultiWindowModel::new(&[2]).is_ok());
}

#[test]
fn test_invalid_window_sizes_are_rejected() {
	assert!(MultiWindowModel::new(&[3, 1]).is_err());
	assert!(MultiWindowModel::new(&[0]).is_err());
}

#[test]
fn test_duplicate_window_sizes_collapse() {
	let model = MultiWindowModel::new(&[3, 3, 2]).unwrap();
	assert_eq!(model.window_sizes(), vec![2, 3]);
}

#[test]
fn test_observations_reach_every_inner_model() {
	let mut model = MultiWindowModel::new(&[2, 3]).unwrap();
	for mv in [Rock, Paper, Rock] {
		model.observe(mv);
	}

	let short = model.model(2).unwrap();
	assert_eq!(short.context_count(), 2);
	assert_eq!(short.stats(&[Rock]).unwrap().count(Paper), 1);
	assert_eq!(short.stats(&[Paper]).unwrap().count(Rock), 1);

	let long = model.model(3).unwrap();
	assert_eq!(long.context_count(), 1);
	assert_eq!(long.stats(&[Rock, Paper]).unwrap().count(Rock), 1);
}

#[test]
fn test_longest_informed_window_wins() {
	let mut model = MultiWindowModel::new(&[2, 3]).unwrap();
	// Two recorded matches teach the two windows conflicting lessons:
	// after a lone rock the 2-window says rock, but after (paper, rock)
	// the 3-window says paper
	model.add_history(&[Rock, Rock, Rock]);
	model.add_history(&[Paper, Rock, Paper]);

	model.observe(Paper);
	model.observe(Rock);

	assert_eq!(model.model(2).unwrap().best_known(), Some(Rock));
	assert_eq!(model.model(3).unwrap().best_known(), Some(Paper));
	assert_eq!(model.best_known(), Some(Paper));
	assert_eq!(model.predict(), Paper);
}

#[test]
fn test_falls_back_to_shorter_window() {
	let mut model = MultiWindowModel::new(&[2, 3]).unwrap();
	model.add_history(&[Rock, Rock, Rock]);
	model.add_history(&[Paper, Rock, Paper]);
	for mv in [Paper, Rock, Scissors, Rock] {
		model.observe(mv);
	}

	// The 3-window never saw (scissors, rock), the 2-window still knows rock
	assert_eq!(model.model(3).unwrap().best_known(), None);
	assert_eq!(model.model(2).unwrap().best_known(), Some(Rock));
	assert_eq!(model.predict(), Rock);
}

#[test]
fn test_random_draw_when_no_window_is_informed() {
	let model = MultiWindowModel::new(&[2, 3, 4]).unwrap();
	for _ in 0..20 {
		assert!(Move::ALL.contains(&model.predict()));
	}
	assert_eq!(model.best_known(), None);
}

#[test]
fn test_from_histories_matches_sequential_training() {
	let histories: Vec<Vec<Move>> = (0..40)
		.map(|i| {
			match i % 3 {
				0 => vec![Rock, Paper, Scissors, Rock, Paper],
				1 => vec![Paper, Paper, Rock, Scissors],
				_ => vec![Scissors, Rock, Rock, Paper, Paper, Rock],
			}
		})
		.collect();

	let parallel = MultiWindowModel::from_histories(&[3], &histories).unwrap();

	let mut sequential = MultiWindowModel::new(&[3]).unwrap();
	for history in &histories {
		sequential.add_history(history);
	}

	let parallel_model = parallel.model(3).unwrap();
	let sequential_model = sequential.model(3).unwrap();
	assert_eq!(parallel_model.context_count(), sequential_model.context_count());
	for first in Move::ALL {
		for second in Move::ALL {
			let context = [first, second];
			let parallel_total = parallel_model.stats(&context).map_or(0, |s| s.total());
			let sequential_total = sequential_model.stats(&context).map_or(0, |s| s.total());
			assert_eq!(parallel_total, sequential_total);
		}
	}
}

#[test]
fn test_from_histories_with_no_histories() {
	let model = MultiWindowModel::from_histories(&[2, 4], &[]).unwrap();
	assert_eq!(model.window_sizes(), vec![2, 4]);
	assert!(Move::ALL.contains(&model.predict()));
}

#[test]
fn test_merge_combines_matching_sizes_and_clones_new_ones() {
	let mut left = MultiWindowModel::new(&[3]).unwrap();
	left.add_history(&[Rock, Rock, Rock, Rock]);

	let mut right = MultiWindowModel::new(&[2, 3]).unwrap();
	right.add_history(&[Rock, Rock, Paper]);

	left.merge(&right).unwrap();
	assert_eq!(left.window_sizes(), vec![2, 3]);

	let long = left.model(3).unwrap();
	assert_eq!(long.stats(&[Rock, Rock]).unwrap().count(Rock), 2);
	assert_eq!(long.stats(&[Rock, Rock]).unwrap().count(Paper), 1);

	let short = left.model(2).unwrap();
	assert_eq!(short.stats(&[Rock]).unwrap().count(Rock), 1);
	assert_eq!(short.stats(&[Rock]).unwrap().count(Paper), 1);
}
