//! # Application State
//!
//! ```text
//! state/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── session.rs  ◄─── The owned Session + availability policy
//! └── config.rs   ◄─── Terminal configuration
//! ```

mod config;
mod session;

pub use config::TerminalConfig;
pub use session::SessionState;
