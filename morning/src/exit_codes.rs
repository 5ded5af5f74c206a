//! Stable exit codes for the `morning` binary.

use crate::io::terminal::TerminalError;

/// The playthrough finished.
pub const OK: i32 = 0;
/// Terminal failure, closed input, or any other runtime error.
pub const FAILURE: i32 = 1;
/// The player pressed the interrupt keystroke (128 + SIGINT).
pub const INTERRUPTED: i32 = 130;

/// Exit code for an error returned from a playthrough.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<TerminalError>() {
        Some(TerminalError::Interrupted) => INTERRUPTED,
        _ => FAILURE,
    }
}
