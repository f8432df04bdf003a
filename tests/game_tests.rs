//! End-to-end tests for the arrow memory game.
//!
//! These drive the engine through the same seams the binary uses: the
//! `Renderer` trait instead of the terminal, and in-memory buffers
//! instead of stdin/stdout.

use std::io::Cursor;

use proptest::prelude::*;

use arrow_recall::{prompt, Direction, GameError, GameResult, Renderer, SequenceEngine};

/// Renderer that records frames instead of touching the terminal.
#[derive(Default)]
struct CapturingRenderer {
    frames: Vec<Direction>,
    clears: usize,
}

impl Renderer for CapturingRenderer {
    fn show_frame(&mut self, direction: Direction) -> GameResult<()> {
        self.frames.push(direction);
        Ok(())
    }

    fn clear(&mut self) -> GameResult<()> {
        self.clears += 1;
        Ok(())
    }
}

fn played_engine(seed: u64, steps: usize) -> (SequenceEngine, CapturingRenderer) {
    let mut engine = SequenceEngine::with_seed(seed);
    engine.set_step_count(steps).unwrap();
    engine.set_speed(10_000.0).unwrap();

    let mut renderer = CapturingRenderer::default();
    engine.generate_and_play(&mut renderer).unwrap();
    (engine, renderer)
}

fn tokens(sequence: &[Direction]) -> Vec<String> {
    sequence.iter().map(|d| d.token().to_string()).collect()
}

// =============================================================================
// Playback Tests
// =============================================================================

/// Test that playback shows exactly the stored sequence, in order.
#[test]
fn test_playback_frames_match_sequence() {
    let (engine, renderer) = played_engine(42, 8);
    assert_eq!(renderer.frames, engine.sequence());
    assert_eq!(renderer.clears, 1);
}

/// Test that a second round fully replaces the first.
#[test]
fn test_second_round_replaces_first() {
    let (mut engine, _) = played_engine(42, 8);
    let first = engine.sequence().to_vec();

    engine.set_step_count(2).unwrap();
    let mut renderer = CapturingRenderer::default();
    engine.generate_and_play(&mut renderer).unwrap();

    assert_eq!(engine.sequence().len(), 2);
    assert_eq!(renderer.frames, engine.sequence());
    assert_ne!(engine.sequence(), first.as_slice());
}

// =============================================================================
// Answer Checking Scenarios
// =============================================================================

/// Test the echo-the-sequence-back winning path.
#[test]
fn test_exact_echo_wins() {
    let (engine, _) = played_engine(7, 5);
    let answers = tokens(engine.sequence());
    assert!(engine.check_answers(&answers).unwrap());
}

/// Test that a truncated answer list loses without erroring.
#[test]
fn test_short_answer_list_loses() {
    let (engine, _) = played_engine(7, 3);
    let mut answers = tokens(engine.sequence());
    answers.pop();
    assert!(!engine.check_answers(&answers).unwrap());
}

/// Test that an unrecognized token loses without erroring.
#[test]
fn test_unrecognized_token_loses() {
    let (engine, _) = played_engine(7, 2);
    let mut answers = tokens(engine.sequence());
    answers[1] = "X".to_string();
    assert!(!engine.check_answers(&answers).unwrap());
}

/// Test that lowercase tokens are not accepted as directions.
#[test]
fn test_lowercase_token_loses() {
    let (engine, _) = played_engine(7, 1);
    let answers = vec![engine.sequence()[0].token().to_lowercase().to_string()];
    assert!(!engine.check_answers(&answers).unwrap());
}

/// Test that an empty answer list is a contract error, not a loss.
#[test]
fn test_empty_answers_error() {
    let (engine, _) = played_engine(7, 2);
    let empty: Vec<String> = Vec::new();
    assert!(matches!(
        engine.check_answers(&empty),
        Err(GameError::EmptyAnswers)
    ));
}

// =============================================================================
// Full Round via Prompts
// =============================================================================

/// Test a complete round driven through the prompt functions.
#[test]
fn test_full_round_through_prompts() {
    let mut setup_input = Cursor::new("5\n10000\n");
    let mut output = Vec::new();

    let step_count = prompt::read_step_count(&mut setup_input, &mut output).unwrap();
    let speed = prompt::read_speed(&mut setup_input, &mut output).unwrap();

    let mut engine = SequenceEngine::with_seed(99);
    engine.set_step_count(step_count).unwrap();
    engine.set_speed(speed).unwrap();

    let mut renderer = CapturingRenderer::default();
    engine.generate_and_play(&mut renderer).unwrap();
    assert_eq!(renderer.frames.len(), 5);

    // The player echoes the sequence back and finishes with DONE.
    let mut answer_lines = tokens(engine.sequence()).join("\n");
    answer_lines.push_str("\nDONE\n");
    let mut answer_input = Cursor::new(answer_lines);

    let answers = prompt::read_answers(&mut answer_input, &mut output).unwrap();
    assert!(engine.check_answers(&answers).unwrap());
}

/// Test that garbage setup input only delays the round.
#[test]
fn test_setup_survives_garbage_input() {
    let mut setup_input = Cursor::new("zero\n0\n3\n-2.5\nslow\n10000\n");
    let mut output = Vec::new();

    assert_eq!(
        prompt::read_step_count(&mut setup_input, &mut output).unwrap(),
        3
    );
    assert_eq!(
        prompt::read_speed(&mut setup_input, &mut output).unwrap(),
        10_000.0
    );
}

// =============================================================================
// Generated Sequence Invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For all step counts, the generated sequence has exactly that
    /// many entries and no two adjacent entries are equal.
    #[test]
    fn test_sequence_invariants(seed in any::<u64>(), steps in 1usize..32) {
        let (engine, _) = played_engine(seed, steps);

        prop_assert_eq!(engine.sequence().len(), steps);
        for pair in engine.sequence().windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    /// Echoing the generated sequence back always wins.
    #[test]
    fn test_echoed_sequence_always_wins(seed in any::<u64>(), steps in 1usize..16) {
        let (engine, _) = played_engine(seed, steps);
        let answers = tokens(engine.sequence());
        prop_assert!(engine.check_answers(&answers).unwrap());
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Test that core value types survive a serde round trip.
#[test]
fn test_direction_serde_round_trip() {
    for dir in Direction::ALL {
        let json = serde_json::to_string(&dir).unwrap();
        let restored: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(dir, restored);
    }
}
