//! Tests for the guess-the-flag round engine.

mod common;

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{country, fixture_countries};
use flagquest::{GuessGame, GuessOutcome, MAX_TRIES, RoundPhase, RoundSnapshot};

const RESET_DELAY: Duration = Duration::from_millis(5000);

/// A one-country pool so every reset lands on Australia.
fn australia_game() -> GuessGame {
    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];
    let mut game = GuessGame::new(pool, RESET_DELAY);
    let mut rng = StdRng::seed_from_u64(7);
    game.reset(&mut rng);
    game
}

#[test]
fn test_correct_guess_wins_regardless_of_tries_spent() {
    let now = Instant::now();
    let mut game = australia_game();

    // Burn a few tries first.
    game.submit_guess("chile", now).unwrap();
    game.submit_guess("peru", now).unwrap();
    assert_eq!(game.tries_remaining(), MAX_TRIES - 2);

    let outcome = game.submit_guess("australia", now).unwrap();
    assert_eq!(outcome, GuessOutcome::Correct);
    assert_eq!(game.phase(), RoundPhase::Won);
}

#[test]
fn test_guess_matching_is_trimmed_and_case_insensitive() {
    let now = Instant::now();
    let mut game = australia_game();
    let outcome = game.submit_guess("  AUSTRALIA  ", now).unwrap();
    assert_eq!(outcome, GuessOutcome::Correct);
}

#[test]
fn test_six_wrong_guesses_lose_the_round() {
    let now = Instant::now();
    let mut game = australia_game();

    for (i, wrong) in ["one", "two", "three", "four", "five"].iter().enumerate() {
        let outcome = game.submit_guess(wrong, now).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Incorrect {
                tries_remaining: MAX_TRIES - i as u32 - 1
            }
        );
    }
    assert_eq!(game.phase(), RoundPhase::Running);

    let outcome = game.submit_guess("six", now).unwrap();
    assert_eq!(outcome, GuessOutcome::Exhausted);
    assert_eq!(game.phase(), RoundPhase::Lost);
    assert_eq!(game.tries_remaining(), 0);
}

#[test]
fn test_empty_guess_is_rejected_without_mutation() {
    let now = Instant::now();
    let mut game = australia_game();
    game.submit_guess("wrong", now).unwrap();
    let tries_before = game.tries_remaining();
    let guessed_before = game.guessed().to_vec();

    for empty in ["", "   ", "\t\n"] {
        let err = game.submit_guess(empty, now).unwrap_err();
        assert_eq!(err.message, "Guess cannot be empty");
        assert_eq!(game.tries_remaining(), tries_before);
        assert_eq!(game.guessed(), guessed_before.as_slice());
        assert_eq!(game.phase(), RoundPhase::Running);
    }
}

#[test]
fn test_australia_round_plays_out() {
    let now = Instant::now();
    let mut game = australia_game();

    for wrong in ["brazil", "chad", "egypt", "france", "germany"] {
        game.submit_guess(wrong, now).unwrap();
    }
    assert_eq!(game.tries_remaining(), 1);
    assert_eq!(game.phase(), RoundPhase::Running);
    assert_eq!(
        game.guessed(),
        ["brazil", "chad", "egypt", "france", "germany"]
    );

    let outcome = game.submit_guess("japan", now).unwrap();
    assert_eq!(outcome, GuessOutcome::Exhausted);
    assert_eq!(game.phase(), RoundPhase::Lost);
}

#[test]
fn test_repeated_wrong_guess_still_spends_a_try() {
    let now = Instant::now();
    let mut game = australia_game();
    game.submit_guess("brazil", now).unwrap();
    game.submit_guess("brazil", now).unwrap();
    assert_eq!(game.tries_remaining(), MAX_TRIES - 2);
    // History keeps one entry per distinct guess.
    assert_eq!(game.guessed(), ["brazil"]);
}

#[test]
fn test_finished_round_ignores_further_guesses() {
    let now = Instant::now();
    let mut game = australia_game();
    game.submit_guess("australia", now).unwrap();

    let outcome = game.submit_guess("brazil", now).unwrap();
    assert_eq!(outcome, GuessOutcome::RoundOver);
    assert_eq!(game.phase(), RoundPhase::Won);
    assert!(game.guessed().is_empty());
}

#[test]
fn test_unstarted_game_reports_round_over() {
    let now = Instant::now();
    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];
    let mut game = GuessGame::new(pool, RESET_DELAY);
    assert!(game.selected().is_none());
    let outcome = game.submit_guess("australia", now).unwrap();
    assert_eq!(outcome, GuessOutcome::RoundOver);
}

#[test]
fn test_skip_changes_only_the_selection() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = GuessGame::new(fixture_countries(), RESET_DELAY);
    game.reset(&mut rng);
    let now = Instant::now();

    game.submit_guess("wrong", now).unwrap();
    let tries_before = game.tries_remaining();
    let guessed_before = game.guessed().to_vec();

    let skipped = game.skip(&mut rng);
    assert!(skipped.is_some());
    assert_eq!(game.tries_remaining(), tries_before);
    assert_eq!(game.guessed(), guessed_before.as_slice());
    assert_eq!(game.phase(), RoundPhase::Running);
}

#[test]
fn test_skip_on_empty_pool_returns_none() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = GuessGame::new(Vec::new(), RESET_DELAY);
    assert!(game.skip(&mut rng).is_none());
    assert!(game.selected().is_none());
}

#[test]
fn test_seeded_rng_makes_selection_deterministic() {
    let mut first = GuessGame::new(fixture_countries(), RESET_DELAY);
    let mut second = GuessGame::new(fixture_countries(), RESET_DELAY);
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);

    let picked_a = first.reset(&mut rng_a).unwrap().name().clone();
    let picked_b = second.reset(&mut rng_b).unwrap().name().clone();
    assert_eq!(picked_a, picked_b);
}

#[test]
fn test_reset_clears_the_round() {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = GuessGame::new(fixture_countries(), RESET_DELAY);
    game.reset(&mut rng);
    game.submit_guess("wrong", now).unwrap();
    game.submit_guess("also wrong", now).unwrap();

    game.reset(&mut rng);
    assert_eq!(game.tries_remaining(), MAX_TRIES);
    assert!(game.guessed().is_empty());
    assert_eq!(game.phase(), RoundPhase::Running);
    assert!(game.selected().is_some());
    assert!(!game.reset_pending());
}

#[test]
fn test_won_round_resets_after_the_delay() {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = australia_game();
    game.submit_guess("australia", now).unwrap();
    assert!(game.reset_pending());

    // Just before the deadline nothing happens.
    assert!(!game.poll_reset(now + RESET_DELAY - Duration::from_millis(1), &mut rng));
    assert_eq!(game.phase(), RoundPhase::Won);

    assert!(game.poll_reset(now + RESET_DELAY, &mut rng));
    assert_eq!(game.phase(), RoundPhase::Running);
    assert_eq!(game.tries_remaining(), MAX_TRIES);
    assert!(game.guessed().is_empty());
    assert!(!game.reset_pending());

    // The reset fires once.
    assert!(!game.poll_reset(now + RESET_DELAY * 2, &mut rng));
}

#[test]
fn test_cancel_reset_keeps_the_finished_round() {
    let now = Instant::now();
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = australia_game();
    game.submit_guess("australia", now).unwrap();

    game.cancel_reset();
    assert!(!game.poll_reset(now + RESET_DELAY * 2, &mut rng));
    assert_eq!(game.phase(), RoundPhase::Won);
}

#[test]
fn test_snapshot_restore_round_trips_a_running_round() {
    let now = Instant::now();
    let mut game = australia_game();
    game.submit_guess("brazil", now).unwrap();
    game.submit_guess("chad", now).unwrap();
    let snapshot = game.snapshot();

    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];
    let mut fresh = GuessGame::new(pool, RESET_DELAY);
    assert!(fresh.restore(&snapshot));
    assert_eq!(fresh.tries_remaining(), MAX_TRIES - 2);
    assert_eq!(fresh.guessed(), ["brazil", "chad"]);
    assert_eq!(fresh.phase(), RoundPhase::Running);
    assert_eq!(fresh.selected().unwrap().alpha3_code(), "AUS");
}

#[test]
fn test_finished_snapshot_is_not_restored() {
    let now = Instant::now();
    let mut game = australia_game();
    game.submit_guess("australia", now).unwrap();
    let snapshot = game.snapshot();

    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];
    let mut fresh = GuessGame::new(pool, RESET_DELAY);
    assert!(!fresh.restore(&snapshot));
    assert!(fresh.selected().is_none());
}

#[test]
fn test_snapshot_with_unknown_code_is_not_restored() {
    let snapshot = RoundSnapshot::new(
        3,
        vec!["brazil".to_string()],
        RoundPhase::Running,
        Some("ZZZ".to_string()),
    );
    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];
    let mut fresh = GuessGame::new(pool, RESET_DELAY);
    assert!(!fresh.restore(&snapshot));
}

#[test]
fn test_restore_clamps_out_of_range_tries() {
    let pool = vec![country("Australia", "AU", "AUS", "Oceania", "Canberra")];

    let zero = RoundSnapshot::new(0, Vec::new(), RoundPhase::Running, Some("AUS".to_string()));
    let mut game = GuessGame::new(pool.clone(), RESET_DELAY);
    assert!(game.restore(&zero));
    assert_eq!(game.tries_remaining(), 1);

    let huge = RoundSnapshot::new(99, Vec::new(), RoundPhase::Running, Some("aus".to_string()));
    let mut game = GuessGame::new(pool, RESET_DELAY);
    assert!(game.restore(&huge));
    assert_eq!(game.tries_remaining(), MAX_TRIES);
}
