//! # Field Validation
//!
//! Slug, date and required-field checks. All of these run before the
//! store touches the filesystem.

use super::errors::{PostError, PostResult};

/// Minimum slug length
pub const MIN_SLUG_LEN: usize = 2;

/// Maximum slug length
pub const MAX_SLUG_LEN: usize = 100;

/// Check slug syntax.
///
/// Lowercase ASCII letters, digits and hyphens; 2 to 100 characters;
/// must start and end with a letter or digit.
pub fn is_valid_slug(slug: &str) -> bool {
    let bytes = slug.as_bytes();
    if bytes.len() < MIN_SLUG_LEN || bytes.len() > MAX_SLUG_LEN {
        return false;
    }

    let is_edge = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let is_inner = |b: &u8| is_edge(b) || *b == b'-';

    is_edge(&bytes[0]) && is_edge(&bytes[bytes.len() - 1]) && bytes.iter().all(is_inner)
}

/// Validate a slug, returning `InvalidSlug` on failure
pub fn validate_slug(slug: &str) -> PostResult<()> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(PostError::InvalidSlug)
    }
}

/// Check that a date has the fixed-width `YYYY-MM-DD` shape.
///
/// Only the shape is checked; fixed width is what makes lexicographic
/// ordering of dates chronological.
pub fn is_valid_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Derive a slug from a post title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into
/// one hyphen, trims hyphens at both ends and truncates to
/// [`MAX_SLUG_LEN`]. The result is not guaranteed to be valid (a title
/// with no letters or digits yields an empty string); callers validate it.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    // Truncation can expose a hyphen at the cut point.
    let trimmed_len = slug.trim_end_matches('-').len();
    slug.truncate(trimmed_len);
    slug
}

/// Unvalidated post fields as received from a client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub date: String,
    pub body: String,
}

/// Post fields after validation, with title and body trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub title: String,
    pub date: String,
    pub body: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, date: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            body: body.into(),
        }
    }

    /// Validate in the order title, date, body
    pub fn validate(&self) -> PostResult<ValidatedFields> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PostError::TitleRequired);
        }
        if !is_valid_date(&self.date) {
            return Err(PostError::DateInvalid);
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Err(PostError::BodyRequired);
        }

        Ok(ValidatedFields {
            title: title.to_string(),
            date: self.date.clone(),
            body: body.to_string(),
        })
    }
}
