//! CLI-specific error types

use std::fmt;

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::posts::PostError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or environment error
    ConfigError,
    /// Store could not be opened or written
    StoreError,
    /// Index listing disagrees with the post files
    IndexMismatch,
    /// Server failed to start or crashed
    ServeFailed,
    /// Hashing or secret generation failed
    AuthError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BLOG_CLI_CONFIG_ERROR",
            Self::StoreError => "BLOG_CLI_STORE_ERROR",
            Self::IndexMismatch => "BLOG_CLI_INDEX_MISMATCH",
            Self::ServeFailed => "BLOG_CLI_SERVE_FAILED",
            Self::AuthError => "BLOG_CLI_AUTH_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn index_mismatch(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IndexMismatch, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(CliErrorCode::ConfigError, e.to_string())
    }
}

impl From<PostError> for CliError {
    fn from(e: PostError) -> Self {
        Self::new(CliErrorCode::StoreError, e.to_string())
    }
}

impl From<AuthError> for CliError {
    fn from(e: AuthError) -> Self {
        Self::new(CliErrorCode::AuthError, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
