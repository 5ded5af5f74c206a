//! Line editing on top of single keypresses.

use tracing::trace;

use crate::core::keys::Key;
use crate::io::terminal::{Terminal, TerminalError};

pub const CONTINUE_PROMPT: &str = "Press enter to continue...";
pub const EXIT_PROMPT: &str = "Press enter to exit...";

/// Erases the character left of the cursor.
const RUB_OUT: &str = "\x08 \x08";

/// Read a line with echo and backspace support.
///
/// Escape sequences and control characters are dropped. The terminating
/// Enter is echoed as a newline and not included in the result.
pub fn read_line<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
) -> Result<String, TerminalError> {
    term.write_str(prompt)?;
    let mut line = String::new();
    loop {
        match term.read_key()? {
            Key::Enter => {
                term.write_str("\n")?;
                return Ok(line);
            }
            Key::Backspace => {
                if line.pop().is_some() {
                    term.write_str(RUB_OUT)?;
                }
            }
            Key::Char(c) if !c.is_control() => {
                line.push(c);
                let mut buf = [0u8; 4];
                term.write_str(c.encode_utf8(&mut buf))?;
            }
            key => trace!(?key, named = ?key.named(), "key ignored"),
        }
    }
}

/// Show `prompt`, wait for Enter, then clear the screen.
pub fn pause_enter<T: Terminal + ?Sized>(
    term: &mut T,
    prompt: &str,
) -> Result<(), TerminalError> {
    term.write_str(prompt)?;
    while term.read_key()? != Key::Enter {}
    term.clear()
}
