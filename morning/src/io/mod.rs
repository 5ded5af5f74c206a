//! Terminal adapter and input helpers.
//!
//! Everything that touches the keyboard, the screen or the wall clock lives
//! here so the core stays deterministic.

pub mod byte_terminal;
pub mod clock;
pub mod config;
pub mod event_terminal;
pub mod interrupt;
pub mod line;
pub mod prompt;
pub mod terminal;
