//! Service configuration.
//!
//! Loaded from an optional JSON file, then overridden by environment
//! variables:
//!
//! | Variable             | Field           |
//! |----------------------|-----------------|
//! | `BLOG_DIR`           | `blog_dir`      |
//! | `BLOG_PASSWORD_HASH` | `password_hash` |
//! | `JWT_SECRET`         | `jwt_secret`    |
//! | `PORT`               | `port`          |
//!
//! A missing password hash is not a load error; login reports it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::jwt::DEFAULT_SECRET;
use crate::posts::SiteConfig;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Blog admin service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Directory holding `<slug>.html` files and `index.html`
    #[serde(default = "default_blog_dir")]
    pub blog_dir: PathBuf,

    /// Argon2 PHC hash of the admin password
    #[serde(default)]
    pub password_hash: Option<String>,

    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default)]
    pub site: SiteConfig,
}

fn default_blog_dir() -> PathBuf {
    PathBuf::from("/app/blog")
}

fn default_jwt_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            blog_dir: default_blog_dir(),
            password_hash: None,
            jwt_secret: default_jwt_secret(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            site: SiteConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load from an optional file, apply process environment, validate
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from an environment lookup; empty values are ignored
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(dir) = var("BLOG_DIR") {
            self.blog_dir = PathBuf::from(dir);
        }
        if let Some(hash) = var("BLOG_PASSWORD_HASH") {
            self.password_hash = Some(hash);
        }
        if let Some(secret) = var("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(port) = var("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT",
                value: port.clone(),
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".to_string()));
        }
        let base = &self.site.base_path;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::Invalid(format!(
                "site.base_path must start and end with '/': {}",
                base
            )));
        }
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("jwt_secret must not be empty".to_string()));
        }
        Ok(())
    }

    /// Whether the built-in JWT secret is still in use
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }

    /// Socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
