use rps_predict_core::model::game_move::Move;
use rps_predict_core::model::multi_window_model::MultiWindowModel;
use rps_predict_core::model::predictor::Predictor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Track one opponent with window sizes 4, 3 and 2
    // The longest window is consulted first when predicting
    let mut predictor = Predictor::new();
    predictor.track("alice", &[4, 3, 2])?;

    // Attempting to track the same opponent twice
    match predictor.track("alice", &[4]) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This opponent ('alice') is already tracked"),
    }

    // Window sizes below 2 are rejected, a context of at least one move
    // must fit in the window alongside its outcome
    match predictor.track("bob", &[1]) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Window size 1 is invalid, must be >= 2"),
    }

    // Moves are parsed from their single-character encoding
    // 'x' is not part of the alphabet
    match Move::from_char('x') {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{}", e),
    }

    // Play against a predictable opponent cycling rock, rock, paper and
    // count how often the model guesses the move before observing it
    let pattern = [Move::Rock, Move::Rock, Move::Paper];
    let rounds = 60;
    let mut hits = 0;
    for i in 0..rounds {
        let played = pattern[i % pattern.len()];
        let guessed = predictor.predict("alice")?;
        if guessed == played {
            hits += 1;
        }
        predictor.observe("alice", played)?;
    }
    println!("Guessed {} of {} moves against the cycling opponent", hits, rounds);

    // Seed a model from recorded matches instead of live observations
    // Each history is a separate match, no learning sample spans two of them
    let histories = vec![
        vec![Move::Rock, Move::Paper, Move::Scissors, Move::Rock, Move::Paper],
        vec![Move::Rock, Move::Paper, Move::Scissors, Move::Rock, Move::Paper],
        vec![Move::Paper, Move::Paper, Move::Rock, Move::Scissors],
    ];
    let mut seeded = MultiWindowModel::from_histories(&[4, 3], &histories)?;

    // Recorded matches fill the frequency tables but leave the rolling
    // window empty, so replay the start of a live match first
    for mv in [Move::Rock, Move::Paper, Move::Scissors] {
        seeded.observe(mv);
    }
    println!("Seeded model predicts: {}", seeded.predict().as_char());

    Ok(())
}
