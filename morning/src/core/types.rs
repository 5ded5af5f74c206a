//! Shared deterministic types for the game core.
//!
//! These types are the contracts between the minigames, the classifier and
//! the narration layer. They carry no terminal state.

use std::fmt;

/// Parsed answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything other than exactly `yes` or `no` after normalization.
    Invalid,
}

/// Foreground color a message is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Blue,
    Green,
    Yellow,
}

/// Final school-day outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Arrived on time.
    Good,
    /// Arrived late and checked in with the office.
    Late,
    /// Arrived late and skipped the check-in.
    Suspended,
    /// Arrived after school hours or on a later day.
    Absent,
}

impl Ending {
    pub fn title(self) -> &'static str {
        match self {
            Ending::Good => "Good Ending",
            Ending::Late => "Late Ending",
            Ending::Suspended => "Suspended Ending",
            Ending::Absent => "Absent Ending",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Ending::Good => Tone::Green,
            Ending::Late => Tone::Yellow,
            Ending::Suspended | Ending::Absent => Tone::Red,
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
