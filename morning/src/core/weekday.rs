//! Weekday selection and calendar rollover.

use std::fmt;

use thiserror::Error;

use crate::core::input::parse_int;

/// Day of the week, numbered Sunday=1 through Saturday=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weekday(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeekdayError {
    #[error("Input must be a number")]
    NotANumber,
    #[error("Input must be 1-7")]
    OutOfRange,
}

impl Weekday {
    pub const SUNDAY: Weekday = Weekday(1);
    pub const MONDAY: Weekday = Weekday(2);
    pub const TUESDAY: Weekday = Weekday(3);
    pub const WEDNESDAY: Weekday = Weekday(4);
    pub const THURSDAY: Weekday = Weekday(5);
    pub const FRIDAY: Weekday = Weekday(6);
    pub const SATURDAY: Weekday = Weekday(7);

    pub const NAMES: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    pub fn new(number: i64) -> Result<Self, WeekdayError> {
        match u8::try_from(number) {
            Ok(n @ 1..=7) => Ok(Weekday(n)),
            _ => Err(WeekdayError::OutOfRange),
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[usize::from(self.0 - 1)]
    }

    /// Monday through Friday.
    pub fn is_school_day(self) -> bool {
        (2..=6).contains(&self.0)
    }

    pub fn is_weekend(self) -> bool {
        !self.is_school_day()
    }

    /// The weekday `days` days later.
    pub fn plus_days(self, days: u64) -> Self {
        let offset = u8::try_from(days % 7).unwrap_or(0);
        Weekday((self.0 - 1 + offset) % 7 + 1)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a typed weekday number.
pub fn parse_weekday(text: &str) -> Result<Weekday, WeekdayError> {
    let number = parse_int(text).ok_or(WeekdayError::NotANumber)?;
    Weekday::new(number)
}
