//! Startup configuration for the terminal adapter.
//!
//! Built once in `main` and passed by reference into the adapter. There is no
//! configuration file; the only inputs are the compile target and whether
//! pacing delays are honored.

/// Keyboard access strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Raw bytes from stdin, decoded by the escape-sequence grammar.
    Unix,
    /// Console key events from crossterm.
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Terminal adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    pub platform: Platform,
    /// Sleep through narration pauses. Off for scripted sessions.
    pub pacing: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            pacing: true,
        }
    }
}

impl TerminalConfig {
    /// Configuration for the terminal this process is attached to.
    pub fn detect() -> Self {
        Self::default()
    }

    /// Configuration for scripted input: byte decoding, no pauses.
    pub fn scripted() -> Self {
        Self {
            platform: Platform::Unix,
            pacing: false,
        }
    }
}
