//! School-day outcome classification.
//!
//! Elapsed minutes are the player's preparation time. Thresholds apply to the
//! raw elapsed value; the commute and the 7:00 AM start are only added to work
//! out the arrival clock and how many days rolled over.

use crate::core::clock::{ClockParts, ClockValue, time_of_day};
use crate::core::types::Ending;
use crate::core::weekday::Weekday;

pub const COMMUTE_MINUTES: u64 = 15;
pub const DAY_START: u64 = time_of_day(7, 0);
pub const ON_TIME_LIMIT: u64 = 80;
pub const LATE_LIMIT: u64 = 480;
/// First minute of the school session (8:20am).
pub const SESSION_START: u64 = time_of_day(8, 20);
/// Last minute of the school session (3:00pm).
pub const SESSION_END: u64 = time_of_day(15, 0);

/// How the player got to school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    OnTime { at: ClockParts },
    /// Late but the same school day; the ending depends on the check-in.
    Late { at: ClockParts },
    Absent { at: ClockParts, absence: Absence },
}

/// Why an absent arrival missed school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// A later school day while classes are running.
    InSession { days: u64 },
    /// A later school day outside session hours.
    AfterSession { days: u64 },
    /// Arrived on a Saturday or Sunday.
    Weekend,
    /// Same day, after classes ended.
    SchoolOver,
}

impl Absence {
    /// A later school day: classes have met, whether or not they are still
    /// running.
    pub fn in_class(self) -> bool {
        matches!(
            self,
            Absence::InSession { .. } | Absence::AfterSession { .. }
        )
    }

    pub fn message(self) -> &'static str {
        match self {
            Absence::InSession { days: 1 } => {
                "School is currently in session, but it is the next day"
            }
            Absence::InSession { .. } => {
                "School is currently in session, but you missed a few days"
            }
            Absence::AfterSession { days: 1 } => "School already ended, and it is the next day",
            Absence::AfterSession { .. } => "School already ended, and you missed a few days",
            Absence::Weekend => "It is a weekend now",
            Absence::SchoolOver => "School is already over",
        }
    }
}

impl Arrival {
    pub fn at(&self) -> ClockParts {
        match self {
            Arrival::OnTime { at } | Arrival::Late { at } | Arrival::Absent { at, .. } => *at,
        }
    }

    /// Ending when no check-in decision is needed.
    pub fn settled_ending(&self) -> Option<Ending> {
        match self {
            Arrival::OnTime { .. } => Some(Ending::Good),
            Arrival::Late { .. } => None,
            Arrival::Absent { .. } => Some(Ending::Absent),
        }
    }
}

/// Ending for a late arrival given the check-in decision.
pub fn late_ending(checked_in: bool) -> Ending {
    if checked_in {
        Ending::Late
    } else {
        Ending::Suspended
    }
}

/// Classify a school day from preparation time and the starting weekday.
pub fn classify(elapsed_minutes: u64, start: Weekday) -> Arrival {
    let arrival =
        ClockValue::from_minutes(elapsed_minutes).plus_minutes(COMMUTE_MINUTES + DAY_START);
    let at = arrival.decompose();

    if elapsed_minutes <= ON_TIME_LIMIT {
        return Arrival::OnTime { at };
    }
    if elapsed_minutes <= LATE_LIMIT {
        return Arrival::Late { at };
    }

    let day = start.plus_days(at.days);
    let absence = if day.is_school_day() && at.days >= 1 {
        let minute = arrival.minute_of_day();
        if (SESSION_START..=SESSION_END).contains(&minute) {
            Absence::InSession { days: at.days }
        } else {
            Absence::AfterSession { days: at.days }
        }
    } else if day.is_weekend() {
        Absence::Weekend
    } else {
        Absence::SchoolOver
    };
    Arrival::Absent { at, absence }
}

/// Sentence reporting how long getting ready took.
pub fn describe_time_taken(elapsed_minutes: u64) -> String {
    let (days, hours, minutes) = ClockValue::from_minutes(elapsed_minutes).duration_parts();
    match (days > 0, hours > 0) {
        (true, true) => format!(
            "It took you {days} days, {hours} hours, and {minutes} minutes to get ready for school"
        ),
        (true, false) => {
            format!("It took you {days} days and {minutes} minutes to get ready for school")
        }
        (false, true) => {
            format!("It took you {hours} hours and {minutes} minutes to get ready for school")
        }
        (false, false) => format!("It took you {minutes} minutes to get ready for school"),
    }
}
