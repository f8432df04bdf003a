//! Terminal entry point: plays one round of the arrow memory game.

use std::io::{self, Write};

use arrow_recall::{prompt, GameResult, SequenceEngine, TerminalRenderer};

const WIN_MESSAGE: &str = "Congratulations! You've guessed correctly!";
const LOSE_MESSAGE: &str = "Sorry, but you seem to be wrong!";

fn run() -> GameResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let step_count = prompt::read_step_count(&mut input, &mut output)?;
    let speed = prompt::read_speed(&mut input, &mut output)?;

    let mut engine = SequenceEngine::new();
    engine.set_step_count(step_count)?;
    engine.set_speed(speed)?;

    let mut renderer = TerminalRenderer::new();
    engine.generate_and_play(&mut renderer)?;

    let answers = prompt::read_answers(&mut input, &mut output)?;
    let verdict = if engine.check_answers(&answers)? {
        WIN_MESSAGE
    } else {
        LOSE_MESSAGE
    };
    writeln!(output, "{}", verdict)?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
