//! Validated prompts.
//!
//! Each prompt reads one line and reports invalid input on screen. Retrying
//! is left to the caller, except for [`ask_weekday`] which loops itself.

use std::time::Duration;

use tracing::debug;

use crate::core::input::{parse_int, parse_yes_no};
use crate::core::types::Answer;
use crate::core::weekday::{Weekday, parse_weekday};
use crate::io::line::read_line;
use crate::io::terminal::{Terminal, TerminalError};

pub const YES_NO_ERROR: &str = "Input must be either yes or no";
const WEEKDAY_QUESTION: &str = "\nWhat day is it today? ";
const WEEKDAY_RETRY_PAUSE: Duration = Duration::from_secs(1);

pub fn prompt_yes_no<T: Terminal + ?Sized>(
    term: &mut T,
    text: &str,
) -> Result<Answer, TerminalError> {
    let line = read_line(term, text)?;
    let answer = parse_yes_no(&line);
    if answer == Answer::Invalid {
        term.println(YES_NO_ERROR)?;
    }
    Ok(answer)
}

pub fn prompt_int<T: Terminal + ?Sized>(
    term: &mut T,
    text: &str,
) -> Result<Option<i64>, TerminalError> {
    let line = read_line(term, text)?;
    Ok(parse_int(&line))
}

/// List the weekdays and read one; prints the reason and returns `None` when
/// the answer is not a number from 1 to 7.
pub fn prompt_weekday<T: Terminal + ?Sized>(
    term: &mut T,
) -> Result<Option<Weekday>, TerminalError> {
    for (i, name) in Weekday::NAMES.iter().enumerate() {
        term.println(&format!("{}. {name}", i + 1))?;
    }
    let line = read_line(term, WEEKDAY_QUESTION)?;
    match parse_weekday(&line) {
        Ok(day) => Ok(Some(day)),
        Err(err) => {
            debug!(input = %line, %err, "weekday rejected");
            term.println(&err.to_string())?;
            Ok(None)
        }
    }
}

/// Ask for the weekday until a valid one is entered.
pub fn ask_weekday<T: Terminal + ?Sized>(term: &mut T) -> Result<Weekday, TerminalError> {
    loop {
        if let Some(day) = prompt_weekday(term)? {
            return Ok(day);
        }
        term.pause(WEEKDAY_RETRY_PAUSE)?;
        term.clear()?;
    }
}
