//! Interrupt signal outside raw mode.
//!
//! While a key is being read the terminal is raw and Ctrl-C arrives as a
//! byte. Between reads it arrives as SIGINT (a console control event on
//! Windows); the handler only raises a flag, and pacing sleeps poll it so the
//! interrupt unwinds through the same `TerminalError::Interrupted` path and
//! the screen guards still run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::io::terminal::TerminalError;

/// Longest a sleep runs before checking the flag again.
const POLL: Duration = Duration::from_millis(25);

/// Shared interrupt flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// Raise the flag on Ctrl-C for the rest of the process.
    ///
    /// Fails if a handler is already installed.
    pub fn install_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.clone();
        ctrlc::set_handler(move || flag.raise())?;
        debug!("interrupt handler installed");
        Ok(())
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// `Err(Interrupted)` once the flag has been raised.
    pub fn check(&self) -> Result<(), TerminalError> {
        if self.is_raised() {
            return Err(TerminalError::Interrupted);
        }
        Ok(())
    }

    /// Sleep for `duration`, returning early if the flag is raised.
    pub fn sleep(&self, duration: Duration) -> Result<(), TerminalError> {
        let deadline = Instant::now() + duration;
        loop {
            self.check()?;
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return Ok(());
            }
            thread::sleep(left.min(POLL));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let flag = InterruptFlag::default();
        let handle = flag.clone();
        assert!(flag.check().is_ok());
        handle.raise();
        assert!(flag.is_raised());
        assert!(matches!(flag.check(), Err(TerminalError::Interrupted)));
    }

    #[test]
    fn sleep_runs_to_completion_without_interrupt() {
        let flag = InterruptFlag::default();
        let started = Instant::now();
        flag.sleep(Duration::from_millis(30)).expect("sleep");
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn raising_cuts_a_long_sleep_short() {
        let flag = InterruptFlag::default();
        let handle = flag.clone();
        let raiser = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            handle.raise();
        });

        let started = Instant::now();
        let result = flag.sleep(Duration::from_secs(30));
        raiser.join().expect("raiser");

        assert!(matches!(result, Err(TerminalError::Interrupted)));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
