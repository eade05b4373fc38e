//! pf-cli library
//!
//! Wires the profile screen to terminal collaborators: the HTTP gateway, a
//! file-backed session, stderr notifications and a path-based file picker.

pub mod cli;
pub mod commands;
pub mod error;
pub mod host;
pub mod logger;
pub mod runner;
pub mod session;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::Runner;
pub use session::{FileSessionStore, SessionError, SessionResult, StoredSession};
