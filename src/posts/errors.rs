//! # Post Store Errors

use thiserror::Error;

/// Result type for post store operations
pub type PostResult<T> = Result<T, PostError>;

/// Post store errors
#[derive(Debug, Clone, Error)]
pub enum PostError {
    // Validation errors (reported before any I/O)
    #[error("Invalid slug")]
    InvalidSlug,

    #[error("Title required")]
    TitleRequired,

    #[error("Valid date required (YYYY-MM-DD)")]
    DateInvalid,

    #[error("Body required")]
    BodyRequired,

    // Record errors
    #[error("Post not found")]
    NotFound(String),

    #[error("A post with this slug already exists")]
    Conflict(String),

    // I/O errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PostError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            PostError::InvalidSlug => 400,
            PostError::TitleRequired => 400,
            PostError::DateInvalid => 400,
            PostError::BodyRequired => 400,
            PostError::NotFound(_) => 404,
            PostError::Conflict(_) => 409,
            PostError::Storage(_) => 500,
        }
    }
}

impl From<std::io::Error> for PostError {
    fn from(e: std::io::Error) -> Self {
        PostError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PostError::InvalidSlug.status_code(), 400);
        assert_eq!(PostError::DateInvalid.status_code(), 400);
        assert_eq!(PostError::NotFound("a1".into()).status_code(), 404);
        assert_eq!(PostError::Conflict("a1".into()).status_code(), 409);
        assert_eq!(PostError::Storage("disk".into()).status_code(), 500);
    }

    #[test]
    fn test_messages_do_not_leak_slug() {
        let err = PostError::Conflict("secret-draft".into());
        assert!(!err.to_string().contains("secret-draft"));
    }
}
