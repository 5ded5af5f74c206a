//! Weekend branch: sleeping in.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::snooze::{Snooze, WakeTime, missed_school};
use crate::core::types::Answer;
use crate::core::weekday::Weekday;
use crate::io::prompt::prompt_yes_no;
use crate::io::terminal::{Control, Terminal, TerminalError};

const BEAT: Duration = Duration::from_secs(3);
const DOT: Duration = Duration::from_millis(333);
const NOTICE: Duration = Duration::from_secs(1);

pub const MISSED_SCHOOL: &str =
    "You wake up, and realize that you slept so much that you missed school...";
pub const NICE_DAY: &str = "Have a nice day!";
pub const NOT_YES_OR_NO: &str = "That is not either yes or no";

/// How the snooze loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnoozeResult {
    Woke(WakeTime),
    /// The player answered something other than yes or no.
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendOutcome {
    Rested,
    MissedSchool,
    Aborted,
}

/// Offer more sleep one hour at a time until the player gets up.
pub fn snooze_loop<T: Terminal + ?Sized>(term: &mut T) -> Result<SnoozeResult, TerminalError> {
    let mut snooze = Snooze::new();
    loop {
        term.clear()?;
        term.control(Control::ShowCursor)?;
        term.println(&format!("The time is {snooze}"))?;
        let answer = prompt_yes_no(term, "Do you want to sleep more? ")?;
        term.control(Control::HideCursor)?;
        term.clear()?;

        match answer {
            Answer::Yes => {
                snooze.sleep_more();
                debug!(time = %snooze, days = snooze.days(), "snoozed");
                sleeping_animation(term)?;
            }
            Answer::No => return Ok(SnoozeResult::Woke(snooze.wake())),
            Answer::Invalid => {
                term.say(NOT_YES_OR_NO, NOTICE)?;
                return Ok(SnoozeResult::Aborted);
            }
        }
    }
}

fn sleeping_animation<T: Terminal + ?Sized>(term: &mut T) -> Result<(), TerminalError> {
    for dots in 1..=3 {
        term.write_str(&format!("\rSleeping{}", ".".repeat(dots)))?;
        term.pause(DOT)?;
    }
    term.clear()
}

pub fn weekend_events<T: Terminal + ?Sized>(
    term: &mut T,
    day: Weekday,
) -> Result<WeekendOutcome, TerminalError> {
    term.say("Today is a weekend", BEAT)?;
    term.clear()?;
    term.say("You have the option to sleep in", BEAT)?;
    term.clear()?;

    let result = snooze_loop(term)?;
    term.clear()?;
    term.control(Control::HideCursor)?;

    let outcome = match result {
        SnoozeResult::Woke(wake) if missed_school(day, wake) => WeekendOutcome::MissedSchool,
        SnoozeResult::Woke(_) => WeekendOutcome::Rested,
        SnoozeResult::Aborted => WeekendOutcome::Aborted,
    };
    info!(?result, ?outcome, start = %day, "weekend finished");

    let message = match outcome {
        WeekendOutcome::MissedSchool => MISSED_SCHOOL,
        WeekendOutcome::Rested | WeekendOutcome::Aborted => NICE_DAY,
    };
    term.say(message, BEAT)?;
    Ok(outcome)
}
