//! # Auth Errors

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Login Errors
    // ==================

    /// Login request carried no password
    #[error("Password required")]
    PasswordRequired,

    /// Password does not match the configured hash
    #[error("Invalid password")]
    InvalidPassword,

    /// No password hash configured
    #[error("Server not configured — BLOG_PASSWORD_HASH missing")]
    NotConfigured,

    // ==================
    // Bearer Token Errors
    // ==================

    /// No `Authorization: Bearer` header
    #[error("Unauthorized")]
    MissingToken,

    /// Token signature valid but expired
    #[error("Invalid or expired token")]
    TokenExpired,

    /// Token malformed, badly signed or lacking the admin role
    #[error("Invalid or expired token")]
    InvalidToken,

    // ==================
    // Internal Errors
    // ==================

    /// Configured hash could not be parsed or checked
    #[error("Authentication error")]
    HashingFailed,

    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::PasswordRequired => 400,

            AuthError::InvalidPassword => 401,
            AuthError::MissingToken => 401,
            AuthError::TokenExpired => 401,
            AuthError::InvalidToken => 401,

            AuthError::NotConfigured => 500,
            AuthError::HashingFailed => 500,
            AuthError::TokenGenerationFailed => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AuthError::PasswordRequired.status_code(), 400);
        assert_eq!(AuthError::InvalidPassword.status_code(), 401);
        assert_eq!(AuthError::MissingToken.status_code(), 401);
        assert_eq!(AuthError::NotConfigured.status_code(), 500);
    }

    #[test]
    fn test_expired_and_invalid_look_the_same() {
        assert_eq!(
            AuthError::TokenExpired.to_string(),
            AuthError::InvalidToken.to_string()
        );
    }
}
