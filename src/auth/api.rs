//! # Auth Service
//!
//! Password login and bearer-token checks for the admin API.

use super::crypto::verify_password;
use super::errors::{AuthError, AuthResult};
use super::jwt::{AdminClaims, JwtConfig, JwtManager};

/// Admin authentication service
#[derive(Debug, Clone)]
pub struct AuthService {
    password_hash: Option<String>,
    jwt: JwtManager,
}

impl AuthService {
    /// `password_hash` is an Argon2 PHC string; `None` leaves login disabled
    pub fn new(password_hash: Option<String>, jwt_config: JwtConfig) -> Self {
        Self {
            password_hash: password_hash.filter(|h| !h.is_empty()),
            jwt: JwtManager::new(jwt_config),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.password_hash.is_some()
    }

    /// Exchange the admin password for a bearer token
    pub fn login(&self, password: Option<&str>) -> AuthResult<String> {
        let password = match password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(AuthError::PasswordRequired),
        };
        let hash = self.password_hash.as_deref().ok_or(AuthError::NotConfigured)?;

        if !verify_password(password, hash)? {
            return Err(AuthError::InvalidPassword);
        }
        self.jwt.issue()
    }

    /// Validate the value of an `Authorization` header
    pub fn authorize(&self, header: Option<&str>) -> AuthResult<AdminClaims> {
        let token = header
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(AuthError::MissingToken)?;
        self.jwt.validate(token)
    }
}
