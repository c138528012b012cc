//! # Tenergy Terminal Library
//!
//! Text-mode front end for the Tenergy club app. Reads one command per
//! line, applies it to the session, and redraws the current screen.
//!
//! ## Module Organization
//! ```text
//! tenergy_terminal/
//! ├── lib.rs          ◄─── You are here (startup & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── The owned Session + availability policy
//! │   └── config.rs   ◄─── Terminal configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Parsing + dispatch
//! │   ├── auth.rs     ◄─── Onboarding, login, logout
//! │   ├── booking.rs  ◄─── Booking wizard, payment, session end
//! │   ├── navigation.rs ◄─ Back, links, bottom nav
//! │   └── account.rs  ◄─── Promos, partners, cards, settings
//! ├── view.rs         ◄─── Screen rendering
//! └── error.rs        ◄─── App error type for commands
//! ```
//!
//! ## Run Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render(screen) ──► read line ──► Command::parse ──► execute            │
//! │        ▲                                                  │             │
//! │        │            Notice / error line printed           │             │
//! │        └──────────────────────────────────────────────────┘             │
//! │                                                                         │
//! │  Stops on `quit` or end of input. Logs go to stderr, screens to stdout. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use std::io::{self, BufRead, Write};

use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Outcome};
use error::AppResult;
use state::{SessionState, TerminalConfig};

/// Starts the app on stdin/stdout.
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = TerminalConfig::from_env();
    info!(
        club = %config.club_name,
        availability = %config.availability,
        "Starting Tenergy terminal"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let state = run_with(&config, stdin.lock(), stdout.lock())?;

    info!(bookings = state.session().bookings().len(), "Tenergy terminal stopped");
    Ok(())
}

/// Runs the command loop over any input/output pair and returns the final
/// state.
pub fn run_with<R, W>(config: &TerminalConfig, input: R, mut output: W) -> AppResult<SessionState>
where
    R: BufRead,
    W: Write,
{
    let mut state = SessionState::new(config.availability);
    writeln!(output, "{}", view::render(&state, config, Utc::now()))?;

    for line in input.lines() {
        let line = line?;
        let outcome = Command::parse(&line)
            .and_then(|command| match command {
                Some(command) => commands::execute(&mut state, config, command),
                None => Ok(Outcome::Render),
            });

        match outcome {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => {
                writeln!(output, "{}", text)?;
                continue;
            }
            Ok(Outcome::Notice(text)) => writeln!(output, "* {}", text)?,
            Ok(Outcome::Render) => {}
            Err(e) => {
                warn!(code = ?e.code, "{}", e.message);
                writeln!(output, "! {}", e)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "{}", view::render(&state, config, Utc::now()))?;
    }

    output.flush()?;
    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tenergy_core=trace` - Show trace for the core only
/// - Default: INFO, DEBUG for the tenergy crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tenergy_core=debug,tenergy_terminal=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenergy_core::{BookingStatus, Money, Screen};

    fn run_script(script: &str) -> (SessionState, String) {
        let mut output = Vec::new();
        let state = run_with(&TerminalConfig::default(), script.as_bytes(), &mut output).unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_booking_script() {
        let (state, output) = run_script(
            "start\n\
             login Алексей 79991234567\n\
             book\n\
             next\n\
             slot 2 10:00\n\
             next\n\
             racket r1\n\
             next\n\
             next\n\
             pay\n",
        );

        let session = state.session();
        assert_eq!(session.screen(), Screen::ActiveSession);
        assert_eq!(session.bookings().len(), 1);
        let booking = session.active_booking().unwrap();
        assert_eq!(booking.total_price, Money::from_rubles(850));
        assert_eq!(booking.status, BookingStatus::Active);
        assert!(output.contains("* Оплачено 850 ₽"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (state, output) = run_script("dance\nlogin\nslot 9 10:00\nquit\nlogout\n");

        assert!(output.contains("! Unknown command: dance"));
        assert!(output.contains("! Table not found: 9"));
        assert!(state.session().is_logged_in());
        assert_eq!(state.session().screen(), Screen::Dashboard);
    }

    #[test]
    fn test_state_command_prints_json() {
        let (_, output) = run_script("login Анна\nstate\n");
        assert!(output.contains("\"name\": \"Анна\""));
        assert!(output.contains("\"phone\": \"79990000000\""));
    }
}
