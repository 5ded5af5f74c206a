//! Test-only helpers for scripted terminal sessions.

use std::cell::Cell;
use std::io::{self, Cursor};
use std::time::Duration;

use crate::io::byte_terminal::ByteTerminal;
use crate::io::clock::Clock;
use crate::io::config::TerminalConfig;
use crate::io::terminal::ModeSwitch;

/// Byte terminal over in-memory buffers with pacing disabled.
pub type ScriptedTerminal = ByteTerminal<Cursor<Vec<u8>>, Vec<u8>, CountingMode>;

/// Create a terminal that will "type" `input` and record everything written.
pub fn scripted(input: &str) -> ScriptedTerminal {
    ByteTerminal::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        CountingMode::default(),
        &TerminalConfig::scripted(),
    )
}

/// Everything written to the terminal so far, ANSI sequences included.
pub fn transcript(term: &ScriptedTerminal) -> String {
    String::from_utf8_lossy(term.output()).into_owned()
}

/// Mode switch that only counts transitions.
#[derive(Debug, Default)]
pub struct CountingMode {
    enabled: Cell<u32>,
    disabled: Cell<u32>,
}

impl CountingMode {
    pub fn enabled(&self) -> u32 {
        self.enabled.get()
    }

    pub fn disabled(&self) -> u32 {
        self.disabled.get()
    }

    /// Every raw mode entry was matched by a restore.
    pub fn is_balanced(&self) -> bool {
        self.enabled() == self.disabled()
    }
}

impl ModeSwitch for CountingMode {
    fn enable_raw(&self) -> io::Result<()> {
        self.enabled.set(self.enabled.get() + 1);
        Ok(())
    }

    fn disable_raw(&self) -> io::Result<()> {
        self.disabled.set(self.disabled.get() + 1);
        Ok(())
    }
}

/// Clock that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct StepClock {
    step: Duration,
    readings: Cell<u32>,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            readings: Cell::new(0),
        }
    }

    /// Step such that each timed segment counts as `minutes` game minutes.
    pub fn minutes_per_segment(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes))
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let n = self.readings.get() + 1;
        self.readings.set(n);
        self.step * n
    }
}
