//! Terminal adapter contract.
//!
//! The [`Terminal`] trait decouples the game from the platform's keyboard and
//! screen handling. Production picks one implementation per platform at
//! startup ([`open_terminal`]); tests drive a [`ByteTerminal`] over in-memory
//! buffers without touching the real terminal.
//!
//! Only the adapter changes terminal mode. Raw mode is held by a
//! [`RawModeGuard`] for the duration of a single key read, and the alternate
//! screen by a [`ScreenSession`] for the whole playthrough; both are released
//! on drop, so every exit path restores the terminal. Outside a read, Ctrl-C
//! raises an [`InterruptFlag`] that pauses and reads turn into
//! [`TerminalError::Interrupted`].

use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crossterm::style::Stylize;
use crossterm::{cursor, queue, terminal};
use thiserror::Error;
use tracing::{trace, warn};

use crate::core::keys::Key;
use crate::core::types::Tone;
use crate::io::byte_terminal::ByteTerminal;
use crate::io::config::{Platform, TerminalConfig};
use crate::io::event_terminal::EventTerminal;
use crate::io::interrupt::InterruptFlag;

#[derive(Debug, Error)]
pub enum TerminalError {
    /// The player pressed the interrupt keystroke.
    #[error("interrupted")]
    Interrupted,
    /// Input reached end of file.
    #[error("input closed")]
    Closed,
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Screen and cursor control operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Clear,
    EnterAltScreen,
    LeaveAltScreen,
    ShowCursor,
    HideCursor,
}

/// Keyboard and screen access for the game.
pub trait Terminal {
    /// Block until one keypress is available.
    ///
    /// Returns [`TerminalError::Interrupted`] on the interrupt keystroke.
    fn read_key(&mut self) -> Result<Key, TerminalError>;

    /// Write text and flush.
    fn write_str(&mut self, text: &str) -> Result<(), TerminalError>;

    fn control(&mut self, op: Control) -> Result<(), TerminalError>;

    /// Pacing delay between narration beats.
    ///
    /// Returns [`TerminalError::Interrupted`] if Ctrl-C arrives meanwhile.
    fn pause(&mut self, duration: Duration) -> Result<(), TerminalError>;

    fn println(&mut self, text: &str) -> Result<(), TerminalError> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Write a line in a foreground color.
    fn println_toned(&mut self, text: &str, tone: Tone) -> Result<(), TerminalError> {
        let styled = match tone {
            Tone::Red => text.red(),
            Tone::Blue => text.blue(),
            Tone::Green => text.green(),
            Tone::Yellow => text.yellow(),
        };
        self.println(&styled.to_string())
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.control(Control::Clear)
    }

    /// Write a line, then wait `duration`.
    fn say(&mut self, text: &str, duration: Duration) -> Result<(), TerminalError> {
        self.println(text)?;
        self.pause(duration)
    }
}

/// Switches the input mode of the underlying device.
pub trait ModeSwitch {
    fn enable_raw(&self) -> io::Result<()>;
    fn disable_raw(&self) -> io::Result<()>;
}

/// Raw mode through crossterm (termios on Unix, console mode on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermMode;

impl ModeSwitch for CrosstermMode {
    fn enable_raw(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Holds raw mode until dropped.
pub struct RawModeGuard<'a, M: ModeSwitch + ?Sized> {
    mode: &'a M,
}

impl<'a, M: ModeSwitch + ?Sized> RawModeGuard<'a, M> {
    pub fn enter(mode: &'a M) -> io::Result<Self> {
        mode.enable_raw()?;
        trace!("raw mode on");
        Ok(Self { mode })
    }
}

impl<M: ModeSwitch + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if let Err(err) = self.mode.disable_raw() {
            warn!(err = %err, "failed to restore terminal mode");
        } else {
            trace!("raw mode off");
        }
    }
}

/// Alternate screen with a hidden cursor, restored on drop.
///
/// Dereferences to the wrapped terminal so the game runs inside the session.
pub struct ScreenSession<'a, T: Terminal + ?Sized> {
    term: &'a mut T,
}

impl<'a, T: Terminal + ?Sized> ScreenSession<'a, T> {
    pub fn enter(term: &'a mut T) -> Result<Self, TerminalError> {
        term.control(Control::EnterAltScreen)?;
        let mut session = Self { term };
        session.term.control(Control::HideCursor)?;
        session.term.clear()?;
        Ok(session)
    }
}

impl<T: Terminal + ?Sized> Deref for ScreenSession<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.term
    }
}

impl<T: Terminal + ?Sized> DerefMut for ScreenSession<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.term
    }
}

impl<T: Terminal + ?Sized> Drop for ScreenSession<'_, T> {
    fn drop(&mut self) {
        for op in [Control::LeaveAltScreen, Control::ShowCursor] {
            if let Err(err) = self.term.control(op) {
                warn!(err = %err, ?op, "failed to restore screen");
            }
        }
    }
}

/// Emit the ANSI sequence for `op` and flush.
pub fn write_control<W: Write>(out: &mut W, op: Control) -> io::Result<()> {
    match op {
        Control::Clear => queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?,
        Control::EnterAltScreen => queue!(out, terminal::EnterAlternateScreen)?,
        Control::LeaveAltScreen => queue!(out, terminal::LeaveAlternateScreen)?,
        Control::ShowCursor => queue!(out, cursor::Show)?,
        Control::HideCursor => queue!(out, cursor::Hide)?,
    }
    out.flush()
}

/// Open the terminal implementation for the configured platform.
pub fn open_terminal(config: &TerminalConfig, interrupt: &InterruptFlag) -> Box<dyn Terminal> {
    match config.platform {
        Platform::Unix => Box::new(ByteTerminal::stdio(config).with_interrupt(interrupt.clone())),
        Platform::Windows => Box::new(EventTerminal::stdio(config, interrupt.clone())),
    }
}
