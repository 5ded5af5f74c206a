//! Shower temperature guessing.
//!
//! The target is fixed for the whole minigame. Feedback only says which side
//! of the target a guess fell on; no bounds are remembered between guesses.

use std::ops::RangeInclusive;

use rand::Rng;
use thiserror::Error;

use crate::core::types::Tone;

pub const TEMPERATURES: RangeInclusive<i64> = 1..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooHot,
    TooCold,
    Perfect,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::TooHot => "Too Hot!",
            Feedback::TooCold => "Too Cold!",
            Feedback::Perfect => "Perfect!",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Feedback::TooHot => Tone::Red,
            Feedback::TooCold => Tone::Blue,
            Feedback::Perfect => Tone::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Temperature must be 1-100")]
pub struct OutOfRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shower {
    target: i64,
}

impl Shower {
    /// Shower with a known target; values outside the range are clamped.
    pub fn with_target(target: i64) -> Self {
        Self {
            target: target.clamp(*TEMPERATURES.start(), *TEMPERATURES.end()),
        }
    }

    /// Shower with a target drawn uniformly from [`TEMPERATURES`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            target: rng.gen_range(TEMPERATURES),
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn check(&self, guess: i64) -> Result<Feedback, OutOfRange> {
        if !TEMPERATURES.contains(&guess) {
            return Err(OutOfRange);
        }
        Ok(match guess.cmp(&self.target) {
            std::cmp::Ordering::Greater => Feedback::TooHot,
            std::cmp::Ordering::Less => Feedback::TooCold,
            std::cmp::Ordering::Equal => Feedback::Perfect,
        })
    }
}
