//! One full playthrough: wake-up alarm, weekday choice, then either branch.

use std::time::Duration;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::info;

use crate::core::types::Ending;
use crate::io::clock::Clock;
use crate::io::line::{EXIT_PROMPT, pause_enter};
use crate::io::prompt::ask_weekday;
use crate::io::terminal::{ScreenSession, Terminal};
use crate::schoolday::schoolday_events;
use crate::weekend::{WeekendOutcome, weekend_events};

const RINGS: usize = 3;
const RING: Duration = Duration::from_millis(500);
const BEAT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaythroughOutcome {
    Weekend(WeekendOutcome),
    School(Ending),
}

/// Play the game once inside an alternate screen session.
///
/// The session is restored when this returns, including on interrupt.
pub fn run_playthrough<T: Terminal + ?Sized, R: Rng, C: Clock>(
    term: &mut T,
    rng: &mut R,
    clock: &C,
) -> Result<PlaythroughOutcome> {
    let mut session = ScreenSession::enter(term).context("enter screen session")?;
    let term = &mut *session;

    alarm(term).context("ring alarm")?;
    term.say("You just woke up and it is 7 AM", BEAT)
        .context("wake up")?;
    term.clear().context("clear screen")?;

    let start = clock.now();
    let day = ask_weekday(term).context("ask weekday")?;
    let prompt_time = clock.since(start);
    term.clear().context("clear screen")?;
    info!(%day, school_day = day.is_school_day(), "weekday chosen");

    let outcome = if day.is_school_day() {
        let ending = schoolday_events(term, rng, clock, day, prompt_time)
            .context("play school day")?;
        PlaythroughOutcome::School(ending)
    } else {
        let outcome = weekend_events(term, day).context("play weekend")?;
        PlaythroughOutcome::Weekend(outcome)
    };

    term.pause(BEAT).context("linger on outcome")?;
    pause_enter(term, EXIT_PROMPT).context("wait for exit")?;
    info!(?outcome, "playthrough finished");
    Ok(outcome)
}

fn alarm<T: Terminal + ?Sized>(term: &mut T) -> Result<()> {
    for _ in 0..RINGS {
        term.println("Ring!")?;
        term.pause(RING)?;
        term.clear()?;
        term.pause(RING)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys::Key;
    use crate::io::terminal::{Control, TerminalError};
    use crate::test_support::{ScriptedTerminal, StepClock, scripted};
    use crate::weekend::NICE_DAY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Scripted terminal that also logs writes and pauses in order.
    struct Recording {
        inner: ScriptedTerminal,
        events: Vec<String>,
    }

    impl Terminal for Recording {
        fn read_key(&mut self) -> Result<Key, TerminalError> {
            self.inner.read_key()
        }

        fn write_str(&mut self, text: &str) -> Result<(), TerminalError> {
            self.events.push(text.to_string());
            self.inner.write_str(text)
        }

        fn control(&mut self, op: Control) -> Result<(), TerminalError> {
            self.inner.control(op)
        }

        fn pause(&mut self, duration: Duration) -> Result<(), TerminalError> {
            self.events.push(format!("pause {}ms", duration.as_millis()));
            self.inner.pause(duration)
        }
    }

    #[test]
    fn outcome_lingers_before_exit_prompt() {
        let mut term = Recording {
            inner: scripted("7\rno\r\r"),
            events: Vec::new(),
        };
        let outcome = run_playthrough(
            &mut term,
            &mut StdRng::seed_from_u64(1),
            &StepClock::minutes_per_segment(1),
        )
        .expect("playthrough");
        assert_eq!(outcome, PlaythroughOutcome::Weekend(WeekendOutcome::Rested));

        let events = &term.events;
        let said = events.iter().position(|e| e == NICE_DAY).expect("nice day");
        let exit = events.iter().position(|e| e == EXIT_PROMPT).expect("exit");
        let beats = events[said..exit]
            .iter()
            .filter(|e| *e == "pause 3000ms")
            .count();
        assert_eq!(beats, 2);
    }
}
