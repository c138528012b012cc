//! # Tenergy Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `TENERGY_*` variables
//! 3. Create the session
//! 4. Read commands until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for testability
    match tenergy_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tenergy: {}", e);
            ExitCode::FAILURE
        }
    }
}
