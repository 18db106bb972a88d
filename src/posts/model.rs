//! Post record types.

use serde::{Deserialize, Serialize};

/// A full post record. Identity is the slug; one record maps to exactly
/// one `<slug>.html` document in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Plain text, paragraphs separated by blank lines
    pub body: String,
}

/// The fields carried inside a post document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub date: String,
    pub body: String,
}

/// Listing entry for a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
}

impl Post {
    pub fn from_fields(slug: impl Into<String>, fields: PostFields) -> Self {
        Self {
            slug: slug.into(),
            title: fields.title,
            date: fields.date,
            body: fields.body,
        }
    }

    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
        }
    }
}

/// Sort summaries newest first.
///
/// Dates are fixed-width ISO strings, so byte order is chronological.
/// Equal dates fall back to slug order so that the directory listing
/// and the index agree regardless of directory enumeration order.
pub fn sort_newest_first(summaries: &mut [PostSummary]) {
    summaries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}
