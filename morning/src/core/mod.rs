//! Deterministic, pure logic for the morning routine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests; randomness is
//! injected by the caller.

pub mod clock;
pub mod ending;
pub mod input;
pub mod keys;
pub mod shower;
pub mod snooze;
pub mod types;
pub mod wardrobe;
pub mod weekday;
