//! Blocking prompt loops for game setup and answer entry.
//!
//! Every function is generic over `BufRead`/`Write` so tests can drive
//! the loops with in-memory buffers. Invalid input never aborts a
//! prompt; it prints a warning line and asks again. End of input, on
//! the other hand, is an error: there is no one left to re-prompt.

use std::io::{BufRead, Write};

use crate::error::GameResult;

/// Prompt for the number of steps to memorize.
pub const STEP_PROMPT: &str =
    "How many steps would you like to memorize? (positive non-zero integers only) ";

/// Prompt for the playback speed.
pub const SPEED_PROMPT: &str =
    "How fast would you like the game to run? (positive non-zero numerical values only) ";

/// Prompt for a single answer token.
pub const ANSWER_PROMPT: &str = "Enter a direction (U/D/L/R) or 'DONE' to finish: ";

const STEP_WARNING: &str = "WARNING: Please enter a positive non-zero integer value.";
const SPEED_WARNING: &str = "WARNING: Please enter a positive non-zero numerical value.";
const EARLY_DONE_WARNING: &str = "Please enter at least one answer before selecting 'DONE'.";

/// Sentinel that ends answer entry.
const DONE: &str = "DONE";

fn read_trimmed_line<R: BufRead>(input: &mut R) -> GameResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }
    Ok(line.trim().to_string())
}

/// Prompt until the player enters a positive non-zero integer.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails, or if input ends
/// before a valid value is entered.
pub fn read_step_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> GameResult<usize> {
    loop {
        write!(output, "{}", STEP_PROMPT)?;
        output.flush()?;

        match read_trimmed_line(input)?.parse::<usize>() {
            Ok(n) if n > 0 => return Ok(n),
            _ => writeln!(output, "{}", STEP_WARNING)?,
        }
    }
}

/// Prompt until the player enters a positive non-zero finite number.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails, or if input ends
/// before a valid value is entered.
pub fn read_speed<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> GameResult<f64> {
    loop {
        write!(output, "{}", SPEED_PROMPT)?;
        output.flush()?;

        match read_trimmed_line(input)?.parse::<f64>() {
            Ok(speed) if speed.is_finite() && speed > 0.0 => return Ok(speed),
            _ => writeln!(output, "{}", SPEED_WARNING)?,
        }
    }
}

/// Prompt for answer tokens until the player enters `DONE`.
///
/// Tokens are collected as entered (trimmed); validation happens in
/// `check_answers`. `DONE` before any token has been entered warns and
/// re-prompts, so the returned list is never empty.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails, or if input ends
/// before `DONE` is entered.
pub fn read_answers<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> GameResult<Vec<String>> {
    let mut answers = Vec::new();

    loop {
        write!(output, "{}", ANSWER_PROMPT)?;
        output.flush()?;

        let token = read_trimmed_line(input)?;
        if token == DONE {
            if answers.is_empty() {
                writeln!(output, "{}", EARLY_DONE_WARNING)?;
            } else {
                return Ok(answers);
            }
        } else {
            answers.push(token);
        }
    }
}
