//! Morning routine terminal minigame.
//!
//! Runs one playthrough on the attached terminal. Raw mode is only held while
//! a key is being read, and the alternate screen is left on every exit path.

use anyhow::{Context, Result};
use clap::Parser;
use morning::exit_codes;
use morning::io::clock::SystemClock;
use morning::io::config::TerminalConfig;
use morning::io::interrupt::InterruptFlag;
use morning::io::terminal::open_terminal;
use morning::logging;
use morning::playthrough::run_playthrough;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "morning",
    version,
    about = "Get ready for school before the bell rings"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    logging::init();

    if let Err(err) = run() {
        let code = exit_codes::for_error(&err);
        if code == exit_codes::INTERRUPTED {
            eprintln!("Interrupted");
        } else {
            eprintln!("{err:#}");
        }
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let config = TerminalConfig::detect();
    debug!(?config, "terminal config");
    let interrupt = InterruptFlag::default();
    interrupt
        .install_handler()
        .context("install interrupt handler")?;
    let mut term = open_terminal(&config, &interrupt);
    let clock = SystemClock::new();
    let mut rng = rand::thread_rng();

    let outcome = run_playthrough(term.as_mut(), &mut rng, &clock)?;
    debug!(?outcome, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use morning::io::terminal::TerminalError;

    #[test]
    fn takes_no_arguments() {
        assert!(Cli::try_parse_from(["morning"]).is_ok());
        assert!(Cli::try_parse_from(["morning", "extra"]).is_err());
    }

    #[test]
    fn interrupt_is_reported_with_its_code() {
        let err = anyhow::Error::new(TerminalError::Interrupted);
        assert_eq!(exit_codes::for_error(&err), exit_codes::INTERRUPTED);
    }
}
