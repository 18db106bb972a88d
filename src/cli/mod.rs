//! CLI module for blogdesk
//!
//! Provides command-line interface for:
//! - serve: Run the admin HTTP API
//! - hash-password / gen-secret: Produce credential material
//! - reindex: Rebuild index.html
//! - verify: Check index.html against the post files

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{reindex, run, run_command, serve, verify, verify_store};
pub use errors::{CliError, CliErrorCode, CliResult};
