//! Minute-based game clock.
//!
//! A [`ClockValue`] counts whole minutes from an epoch chosen by the caller.
//! The school-day classifier applies the 7:00 AM day start as an offset before
//! decomposing, so day 0 hour 0 is always midnight of the starting day.

use std::fmt;

pub const MINUTES_PER_HOUR: u64 = 60;
pub const HOURS_PER_DAY: u64 = 24;
pub const MINUTES_PER_DAY: u64 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// Twelve-hour period indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    Am,
    Pm,
}

impl Half {
    /// Half for an hour of the day; hours past 23 wrap first.
    pub fn of_hour(hour: u64) -> Self {
        if (hour % HOURS_PER_DAY) / 12 == 0 {
            Half::Am
        } else {
            Half::Pm
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Half::Am => "am",
            Half::Pm => "pm",
        }
    }

    fn offset_hours(self) -> u64 {
        match self {
            Half::Am => 0,
            Half::Pm => 12,
        }
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole minutes since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockValue(pub u64);

/// A [`ClockValue`] split into calendar parts.
///
/// `hours` is already wrapped to the 12-hour range `0..12`; combine it with
/// `half` to recover the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
    pub half: Half,
}

impl ClockValue {
    pub fn from_minutes(minutes: u64) -> Self {
        Self(minutes)
    }

    pub fn plus_minutes(self, minutes: u64) -> Self {
        Self(self.0.saturating_add(minutes))
    }

    pub fn decompose(self) -> ClockParts {
        let total_hours = self.0 / MINUTES_PER_HOUR;
        let hour_of_day = total_hours % HOURS_PER_DAY;
        ClockParts {
            minutes: self.0 % MINUTES_PER_HOUR,
            hours: hour_of_day % 12,
            days: total_hours / HOURS_PER_DAY,
            half: Half::of_hour(hour_of_day),
        }
    }

    /// Minutes elapsed since midnight of the current day.
    pub fn minute_of_day(self) -> u64 {
        self.0 % MINUTES_PER_DAY
    }

    /// Split as a duration: (days, hours, minutes) with no 12-hour wrap.
    pub fn duration_parts(self) -> (u64, u64, u64) {
        let total_hours = self.0 / MINUTES_PER_HOUR;
        (
            total_hours / HOURS_PER_DAY,
            total_hours % HOURS_PER_DAY,
            self.0 % MINUTES_PER_HOUR,
        )
    }
}

impl ClockParts {
    pub fn hour_of_day(&self) -> u64 {
        self.hours + self.half.offset_hours()
    }

    pub fn recompose(&self) -> ClockValue {
        ClockValue(
            self.days * MINUTES_PER_DAY + self.hour_of_day() * MINUTES_PER_HOUR + self.minutes,
        )
    }

    /// Hour as shown on a 12-hour clock face (0 shows as 12).
    pub fn display_hour(&self) -> u64 {
        if self.hours == 0 { 12 } else { self.hours }
    }
}

impl fmt::Display for ClockParts {
    /// Renders like `8:05am`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}{}", self.display_hour(), self.minutes, self.half)
    }
}

/// 12-hour face value for an hour of day: `(hour - 1) mod 12 + 1`.
pub fn face_hour(hour_of_day: u64) -> u64 {
    (hour_of_day % HOURS_PER_DAY + 11) % 12 + 1
}

/// Minute of day for `hour:minute` on a 24-hour clock.
pub const fn time_of_day(hour: u64, minute: u64) -> u64 {
    hour * MINUTES_PER_HOUR + minute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_recompose_round_trips() {
        let samples = (0..3 * MINUTES_PER_DAY).step_by(7).chain([
            0,
            59,
            60,
            719,
            720,
            1439,
            1440,
            10_000_019,
        ]);
        for minutes in samples {
            let value = ClockValue(minutes);
            assert_eq!(value.decompose().recompose(), value, "minutes={minutes}");
        }
    }

    #[test]
    fn decompose_wraps_hours_and_counts_days() {
        let parts = ClockValue(time_of_day(31, 5)).decompose();
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 7);
        assert_eq!(parts.minutes, 5);
        assert_eq!(parts.half, Half::Am);
    }

    #[test]
    fn noon_and_midnight_display_as_twelve() {
        assert_eq!(ClockValue(time_of_day(12, 0)).decompose().to_string(), "12:00pm");
        assert_eq!(ClockValue(time_of_day(0, 30)).decompose().to_string(), "12:30am");
        assert_eq!(ClockValue(time_of_day(15, 9)).decompose().to_string(), "3:09pm");
    }

    #[test]
    fn face_hour_matches_twelve_hour_clock() {
        assert_eq!(face_hour(0), 12);
        assert_eq!(face_hour(7), 7);
        assert_eq!(face_hour(12), 12);
        assert_eq!(face_hour(13), 1);
        assert_eq!(face_hour(23), 11);
        assert_eq!(face_hour(24), 12);
    }

    #[test]
    fn duration_parts_do_not_wrap_to_twelve_hours() {
        assert_eq!(ClockValue(time_of_day(13, 2)).duration_parts(), (0, 13, 2));
        assert_eq!(ClockValue(MINUTES_PER_DAY + 61).duration_parts(), (1, 1, 1));
    }

    #[test]
    fn half_of_hour_wraps_past_midnight() {
        assert_eq!(Half::of_hour(11), Half::Am);
        assert_eq!(Half::of_hour(12), Half::Pm);
        assert_eq!(Half::of_hour(25), Half::Am);
    }
}
