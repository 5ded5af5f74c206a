//! Console-event terminal for Windows.
//!
//! The Windows console delivers key events rather than a byte stream, so keys
//! are mapped from crossterm events onto the same [`Key`] tokens the byte
//! decoder produces. Navigation keys become their ANSI escape sequences and
//! the remaining function keys keep their console scan codes.

use std::io::{self, Stdout, Write};
use std::convert::Infallible;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::keys::{Decoded, ESC, Key, NamedKey, decode_key};
use crate::io::config::TerminalConfig;
use crate::io::interrupt::InterruptFlag;
use crate::io::terminal::{
    Control, CrosstermMode, RawModeGuard, Terminal, TerminalError, write_control,
};

/// Scan code base: F1 reports `0x3b`.
const F_KEY_SCAN_BASE: u8 = 0x3a;

pub struct EventTerminal {
    output: Stdout,
    mode: CrosstermMode,
    pacing: bool,
    interrupt: InterruptFlag,
}

impl EventTerminal {
    pub fn stdio(config: &TerminalConfig, interrupt: InterruptFlag) -> Self {
        Self {
            output: io::stdout(),
            mode: CrosstermMode,
            pacing: config.pacing,
            interrupt,
        }
    }
}

/// Ctrl+letter as the control byte a byte stream would carry, decoded the
/// same way so both adapters agree.
fn control_letter(letter: char) -> Option<Decoded> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let byte = u8::try_from(letter.to_ascii_lowercase()).ok()? & 0x1f;
    let Ok(decoded) = decode_key(|| Ok::<u8, Infallible>(byte));
    Some(decoded)
}

/// Map a console key event; `None` for events that are not keypresses.
pub fn map_key_event(event: &KeyEvent) -> Option<Decoded> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char(c) if ctrl && c.is_ascii_alphabetic() => return control_letter(c),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Tab => Key::Char('\t'),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Escape(vec![ESC]),
        KeyCode::Up => Key::for_named(NamedKey::Up),
        KeyCode::Down => Key::for_named(NamedKey::Down),
        KeyCode::Left => Key::for_named(NamedKey::Left),
        KeyCode::Right => Key::for_named(NamedKey::Right),
        KeyCode::Home => Key::for_named(NamedKey::Home),
        KeyCode::End => Key::for_named(NamedKey::End),
        KeyCode::Insert => Key::for_named(NamedKey::Insert),
        KeyCode::Delete => Key::for_named(NamedKey::Delete),
        KeyCode::PageUp => Key::for_named(NamedKey::PageUp),
        KeyCode::PageDown => Key::for_named(NamedKey::PageDown),
        KeyCode::F(1) => Key::for_named(NamedKey::F1),
        KeyCode::F(2) => Key::for_named(NamedKey::F2),
        KeyCode::F(3) => Key::for_named(NamedKey::F3),
        KeyCode::F(4) => Key::for_named(NamedKey::F4),
        KeyCode::F(5) => Key::for_named(NamedKey::F5),
        KeyCode::F(n @ 6..=10) => Key::Special(F_KEY_SCAN_BASE + n),
        _ => return None,
    };
    Some(Decoded::Key(key))
}

impl Terminal for EventTerminal {
    fn read_key(&mut self) -> Result<Key, TerminalError> {
        self.output.flush()?;
        self.interrupt.check()?;
        let _raw = RawModeGuard::enter(&self.mode)?;
        loop {
            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            match map_key_event(&key_event) {
                Some(Decoded::Key(key)) => return Ok(key),
                Some(Decoded::Interrupt) => return Err(TerminalError::Interrupted),
                None => {}
            }
        }
    }

    fn write_str(&mut self, text: &str) -> Result<(), TerminalError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn control(&mut self, op: Control) -> Result<(), TerminalError> {
        write_control(&mut self.output, op)?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<(), TerminalError> {
        if self.pacing {
            self.interrupt.sleep(duration)
        } else {
            self.interrupt.check()
        }
    }
}
