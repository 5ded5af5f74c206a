//! Terminal minigame about getting ready for school.
//!
//! The player picks the weekday; weekends offer a snooze loop, school days a
//! shower temperature game, a getting-dressed game and an arrival ending
//! that depends on how long it all took. The crate keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic logic (key decoding, minigame rules,
//!   clock arithmetic, ending classification). No I/O.
//! - **[`io`]**: The terminal adapter, line input, prompts and the wall
//!   clock. Behind traits so tests can script whole sessions.
//!
//! Orchestration modules ([`weekend`], [`schoolday`], [`playthrough`])
//! narrate the game by combining the two.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod playthrough;
pub mod schoolday;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod weekend;
