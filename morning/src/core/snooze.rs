//! Weekend snooze counter.

use std::fmt;

use crate::core::clock::{HOURS_PER_DAY, Half, MINUTES_PER_HOUR, face_hour};
use crate::core::ending::SESSION_START;
use crate::core::weekday::Weekday;

/// Hour of day the player wakes up at.
pub const WAKE_HOUR: u64 = 7;

/// Hours slept since midnight of the starting day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snooze {
    total_hours: u64,
}

/// When the player finally got up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTime {
    pub days: u64,
    pub hour: u64,
}

impl Default for Snooze {
    fn default() -> Self {
        Self {
            total_hours: WAKE_HOUR,
        }
    }
}

impl Snooze {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleep_more(&mut self) {
        self.total_hours += 1;
    }

    pub fn days(&self) -> u64 {
        self.total_hours / HOURS_PER_DAY
    }

    pub fn hour_of_day(&self) -> u64 {
        self.total_hours % HOURS_PER_DAY
    }

    pub fn half(&self) -> Half {
        Half::of_hour(self.hour_of_day())
    }

    pub fn wake(&self) -> WakeTime {
        WakeTime {
            days: self.days(),
            hour: self.hour_of_day(),
        }
    }
}

impl fmt::Display for Snooze {
    /// Renders like `7am`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", face_hour(self.hour_of_day()), self.half())
    }
}

impl WakeTime {
    pub fn weekday(&self, start: Weekday) -> Weekday {
        start.plus_days(self.days)
    }
}

/// Whether sleeping in from `start` until `wake` skipped a school day.
///
/// Waking on Tuesday through Friday always misses school; waking on Monday
/// misses it only after the session start.
pub fn missed_school(start: Weekday, wake: WakeTime) -> bool {
    let day = wake.weekday(start);
    if !day.is_school_day() {
        return false;
    }
    day >= Weekday::TUESDAY || wake.hour * MINUTES_PER_HOUR > SESSION_START
}
