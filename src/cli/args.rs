//! CLI argument definitions using clap
//!
//! Commands:
//! - blogdesk serve [--config <path>] [--port <n>]
//! - blogdesk hash-password <password>
//! - blogdesk gen-secret
//! - blogdesk reindex [--config <path>]
//! - blogdesk verify [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// blogdesk - administrative API for a static HTML blog
#[derive(Parser, Debug)]
#[command(name = "blogdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the admin HTTP API
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print an Argon2 hash of a password for BLOG_PASSWORD_HASH
    HashPassword {
        password: String,
    },

    /// Print a random secret for JWT_SECRET
    GenSecret,

    /// Regenerate index.html from the post files
    Reindex {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that index.html lists exactly the posts on disk
    Verify {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
