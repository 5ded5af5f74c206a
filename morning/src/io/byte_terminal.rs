//! Byte-stream terminal: raw bytes in, ANSI sequences out.
//!
//! Used for Unix-like terminals (stdin/stdout) and for scripted sessions over
//! in-memory buffers.

use std::io::{self, ErrorKind, Read, Stdin, Stdout, Write};
use std::time::Duration;

use crate::core::keys::{Decoded, Key, decode_key};
use crate::io::config::TerminalConfig;
use crate::io::interrupt::InterruptFlag;
use crate::io::terminal::{
    Control, CrosstermMode, ModeSwitch, RawModeGuard, Terminal, TerminalError, write_control,
};

pub struct ByteTerminal<R, W, M = CrosstermMode> {
    input: R,
    output: W,
    mode: M,
    pacing: bool,
    interrupt: InterruptFlag,
}

impl ByteTerminal<Stdin, Stdout, CrosstermMode> {
    pub fn stdio(config: &TerminalConfig) -> Self {
        Self::new(io::stdin(), io::stdout(), CrosstermMode, config)
    }
}

impl<R: Read, W: Write, M: ModeSwitch> ByteTerminal<R, W, M> {
    pub fn new(input: R, output: W, mode: M, config: &TerminalConfig) -> Self {
        Self {
            input,
            output,
            mode,
            pacing: config.pacing,
            interrupt: InterruptFlag::default(),
        }
    }

    /// Observe `interrupt` in pauses and before each key read.
    pub fn with_interrupt(mut self, interrupt: InterruptFlag) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn mode(&self) -> &M {
        &self.mode
    }
}

fn read_byte<R: Read>(input: &mut R) -> Result<u8, TerminalError> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Err(TerminalError::Closed),
            Ok(_) => return Ok(buf[0]),
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            Err(err) => return Err(err.into()),
        }
    }
}

impl<R: Read, W: Write, M: ModeSwitch> Terminal for ByteTerminal<R, W, M> {
    fn read_key(&mut self) -> Result<Key, TerminalError> {
        self.output.flush()?;
        self.interrupt.check()?;
        let _raw = RawModeGuard::enter(&self.mode)?;
        let input = &mut self.input;
        match decode_key(|| read_byte(input))? {
            Decoded::Key(key) => Ok(key),
            Decoded::Interrupt => Err(TerminalError::Interrupted),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scripted, transcript};

    #[test]
    fn reads_keys_in_order() {
        let mut term = scripted("a\x1b[B\r");
        assert_eq!(term.read_key().expect("key"), Key::Char('a'));
        assert_eq!(
            term.read_key().expect("key"),
            Key::Escape(b"\x1b[B".to_vec())
        );
        assert_eq!(term.read_key().expect("key"), Key::Enter);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut term = scripted("");
        assert!(matches!(term.read_key(), Err(TerminalError::Closed)));
    }

    #[test]
    fn raw_mode_is_released_after_each_read() {
        let mut term = scripted("xy");
        term.read_key().expect("key");
        term.read_key().expect("key");
        assert_eq!(term.mode().enabled(), 2);
        assert!(term.mode().is_balanced());
    }

    #[test]
    fn raw_mode_is_released_after_interrupt() {
        let mut term = scripted("\x03");
        assert!(matches!(term.read_key(), Err(TerminalError::Interrupted)));
        assert_eq!(term.mode().enabled(), 1);
        assert!(term.mode().is_balanced());
    }

    #[test]
    fn raw_mode_is_released_when_input_closes_mid_sequence() {
        let mut term = scripted("\x1b[");
        assert!(matches!(term.read_key(), Err(TerminalError::Closed)));
        assert!(term.mode().is_balanced());
    }

    #[test]
    fn controls_emit_ansi_sequences() {
        let mut term = scripted("");
        term.control(Control::EnterAltScreen).expect("alt");
        term.control(Control::HideCursor).expect("hide");
        term.control(Control::ShowCursor).expect("show");
        term.control(Control::LeaveAltScreen).expect("leave");
        let out = transcript(&term);
        assert!(out.contains("\x1b[?1049h"));
        assert!(out.contains("\x1b[?25l"));
        assert!(out.contains("\x1b[?25h"));
        assert!(out.contains("\x1b[?1049l"));
    }

    #[test]
    fn raised_interrupt_fails_pause_and_read() {
        let interrupt = InterruptFlag::default();
        let mut term = scripted("a").with_interrupt(interrupt.clone());
        term.pause(Duration::from_secs(3)).expect("pause");

        interrupt.raise();
        assert!(matches!(
            term.pause(Duration::from_secs(3)),
            Err(TerminalError::Interrupted)
        ));
        assert!(matches!(term.read_key(), Err(TerminalError::Interrupted)));
        assert_eq!(term.mode().enabled(), 0);
    }

    #[test]
    fn failing_mode_switch_fails_the_read() {
        struct Broken;
        impl ModeSwitch for Broken {
            fn enable_raw(&self) -> io::Result<()> {
                Err(io::Error::other("not a tty"))
            }
            fn disable_raw(&self) -> io::Result<()> {
                Ok(())
            }
        }
        let mut term = ByteTerminal::new(
            io::Cursor::new(b"a".to_vec()),
            Vec::new(),
            Broken,
            &TerminalConfig::scripted(),
        );
        assert!(matches!(term.read_key(), Err(TerminalError::Io(_))));
    }
}
