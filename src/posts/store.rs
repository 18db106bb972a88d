//! # Directory Store
//!
//! Posts stored as `<slug>.html` documents plus a derived `index.html`.
//!
//! ## Invariants
//! - Validation (slug, title, date, body) happens before any I/O.
//! - Mutations run one at a time under the store's [`WriteSerializer`];
//!   existence checks happen inside the gate.
//! - Every successful mutation fully regenerates the index from the
//!   current documents, so after it returns the index listing equals
//!   [`PostStore::list`].
//! - Reads are not gated and may observe a mutation in progress (post
//!   written, index not yet rebuilt).
//!
//! There is no rollback: if the post write succeeds and the index
//! rebuild fails, the post stays and the error is returned.

use super::backend::DocumentBackend;
use super::codec;
use super::errors::{PostError, PostResult};
use super::index::{self, INDEX_FILE};
use super::local::LocalBackend;
use super::model::{sort_newest_first, Post, PostSummary};
use super::serializer::WriteSerializer;
use super::templates::SiteConfig;
use super::validation::{slugify, validate_slug, PostInput, ValidatedFields};
use crate::observability::{log_event_with_fields, Event};

const DOCUMENT_EXT: &str = ".html";

fn document_name(slug: &str) -> String {
    format!("{}{}", slug, DOCUMENT_EXT)
}

/// Post store over a document backend
#[derive(Debug)]
pub struct PostStore<B: DocumentBackend = LocalBackend> {
    backend: B,
    site: SiteConfig,
    writes: WriteSerializer,
}

impl<B: DocumentBackend> PostStore<B> {
    /// Create a store with its own write serializer
    pub fn new(backend: B, site: SiteConfig) -> Self {
        Self::with_serializer(backend, site, WriteSerializer::new())
    }

    /// Create a store that shares `writes` with other stores
    pub fn with_serializer(backend: B, site: SiteConfig, writes: WriteSerializer) -> Self {
        Self {
            backend,
            site,
            writes,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Summaries of every post, newest first
    pub fn list(&self) -> PostResult<Vec<PostSummary>> {
        let mut summaries = Vec::new();

        for name in self.backend.names()? {
            if name == INDEX_FILE {
                continue;
            }
            let Some(slug) = name.strip_suffix(DOCUMENT_EXT) else {
                continue;
            };
            // Removed between listing and reading
            let Some(document) = self.backend.read(&name)? else {
                continue;
            };

            let fields = codec::decode(&document);
            summaries.push(PostSummary {
                slug: slug.to_string(),
                title: fields.title,
                date: fields.date,
            });
        }

        sort_newest_first(&mut summaries);
        Ok(summaries)
    }

    /// Load one post
    pub fn get(&self, slug: &str) -> PostResult<Post> {
        validate_slug(slug)?;

        match self.backend.read(&document_name(slug))? {
            Some(document) => Ok(Post::from_fields(slug, codec::decode(&document))),
            None => Err(PostError::NotFound(slug.to_string())),
        }
    }

    /// Create a post. Without an explicit slug (or with an empty one) the
    /// slug is derived from the title.
    pub async fn create(&self, slug: Option<&str>, input: &PostInput) -> PostResult<PostSummary> {
        let fields = input.validate()?;
        let slug = match slug.filter(|s| !s.is_empty()) {
            Some(explicit) => explicit.to_string(),
            None => slugify(&fields.title),
        };
        validate_slug(&slug)?;

        let post = into_post(slug, fields);
        let name = document_name(&post.slug);

        let _permit = self.writes.acquire().await;
        if self.backend.exists(&name)? {
            return Err(PostError::Conflict(post.slug));
        }
        self.backend.write(&name, &codec::encode(&post, &self.site))?;
        self.regenerate_index()?;

        log_event_with_fields(
            Event::PostCreated,
            &[("slug", post.slug.as_str()), ("date", post.date.as_str())],
        );
        Ok(post.summary())
    }

    /// Replace the title, date and body of an existing post
    pub async fn update(&self, slug: &str, input: &PostInput) -> PostResult<PostSummary> {
        validate_slug(slug)?;
        let fields = input.validate()?;

        let post = into_post(slug.to_string(), fields);
        let name = document_name(slug);

        let _permit = self.writes.acquire().await;
        if !self.backend.exists(&name)? {
            return Err(PostError::NotFound(post.slug));
        }
        self.backend.write(&name, &codec::encode(&post, &self.site))?;
        self.regenerate_index()?;

        log_event_with_fields(
            Event::PostUpdated,
            &[("slug", post.slug.as_str()), ("date", post.date.as_str())],
        );
        Ok(post.summary())
    }

    /// Remove a post
    pub async fn delete(&self, slug: &str) -> PostResult<()> {
        validate_slug(slug)?;

        let _permit = self.writes.acquire().await;
        if !self.backend.remove(&document_name(slug))? {
            return Err(PostError::NotFound(slug.to_string()));
        }
        self.regenerate_index()?;

        log_event_with_fields(Event::PostDeleted, &[("slug", slug)]);
        Ok(())
    }

    /// Rebuild the index from the current documents, under the gate.
    ///
    /// Returns the number of posts listed.
    pub async fn reindex(&self) -> PostResult<usize> {
        self.writes.run(|| self.regenerate_index()).await
    }

    /// The listing currently recorded in the index document, or `None`
    /// if no index has been generated yet
    pub fn index_entries(&self) -> PostResult<Option<Vec<PostSummary>>> {
        Ok(self
            .backend
            .read(INDEX_FILE)?
            .map(|document| index::read_entries(&document)))
    }

    // Caller must hold the write gate.
    fn regenerate_index(&self) -> PostResult<usize> {
        let summaries = self.list()?;
        self.backend
            .write(INDEX_FILE, &index::render(&summaries, &self.site))?;

        let count = summaries.len().to_string();
        log_event_with_fields(Event::IndexRegenerated, &[("posts", count.as_str())]);
        Ok(summaries.len())
    }
}

fn into_post(slug: String, fields: ValidatedFields) -> Post {
    Post {
        slug,
        title: fields.title,
        date: fields.date,
        body: fields.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PostStore) {
        let temp = TempDir::new().unwrap();
        let store = PostStore::new(LocalBackend::new(temp.path()), SiteConfig::default());
        (temp, store)
    }

    fn input(title: &str, date: &str, body: &str) -> PostInput {
        PostInput::new(title, date, body)
    }

    #[tokio::test]
    async fn test_create_derives_slug() {
        let (_temp, store) = store();
        let created = store
            .create(None, &input("Hello World", "2024-01-15", "First post."))
            .await
            .unwrap();

        assert_eq!(created.slug, "hello-world");
        assert_eq!(store.list().unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_empty_explicit_slug_is_derived() {
        let (_temp, store) = store();
        let created = store
            .create(Some(""), &input("Second Post", "2024-01-16", "x"))
            .await
            .unwrap();
        assert_eq!(created.slug, "second-post");
    }

    #[tokio::test]
    async fn test_create_rejects_underivable_slug() {
        let (temp, store) = store();
        let result = store.create(None, &input("!!!", "2024-01-15", "x")).await;
        assert!(matches!(result, Err(PostError::InvalidSlug)));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_create_trims_fields() {
        let (_temp, store) = store();
        let created = store
            .create(Some("trim-me"), &input("  Padded  ", "2024-01-15", "\n\n body \n"))
            .await
            .unwrap();
        assert_eq!(created.title, "Padded");

        let post = store.get("trim-me").unwrap();
        assert_eq!(post.title, "Padded");
        assert_eq!(post.body, "body");
    }

    #[tokio::test]
    async fn test_update_is_full_replace() {
        let (_temp, store) = store();
        store
            .create(Some("a1"), &input("Old", "2024-01-01", "one\n\ntwo"))
            .await
            .unwrap();
        let updated = store
            .update("a1", &input("New", "2024-02-02", "three"))
            .await
            .unwrap();
        assert_eq!(updated.title, "New");

        let post = store.get("a1").unwrap();
        assert_eq!(post.body, "three");
        assert_eq!(post.date, "2024-02-02");
    }

    #[tokio::test]
    async fn test_validation_precedes_existence_check() {
        let (_temp, store) = store();
        let result = store.update("missing", &input("", "2024-01-01", "x")).await;
        assert!(matches!(result, Err(PostError::TitleRequired)));

        let result = store.update("missing", &input("T", "2024-01-01", "x")).await;
        assert!(matches!(result, Err(PostError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (_temp, store) = store();
        assert!(matches!(store.delete("ghost").await, Err(PostError::NotFound(_))));
        assert!(matches!(store.delete("-bad").await, Err(PostError::InvalidSlug)));
    }

    #[tokio::test]
    async fn test_list_ignores_index_and_other_files() {
        let (temp, store) = store();
        store
            .create(Some("a1"), &input("A", "2024-01-01", "x"))
            .await
            .unwrap();
        std::fs::write(temp.path().join("notes.txt"), "not a post").unwrap();

        let slugs: Vec<_> = store.list().unwrap().into_iter().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["a1"]);
    }

    #[tokio::test]
    async fn test_foreign_html_lists_with_empty_fields() {
        let (temp, store) = store();
        std::fs::write(temp.path().join("about.html"), "<html>about</html>").unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].slug, "about");
        assert_eq!(list[0].title, "");
    }

    #[tokio::test]
    async fn test_non_utf8_document_does_not_block_mutations() {
        let (temp, store) = store();
        store
            .create(Some("a1"), &input("A", "2024-01-01", "x"))
            .await
            .unwrap();
        std::fs::write(
            temp.path().join("legacy.html"),
            b"<h1 class=\"post-title\">caf\xe9</h1>".as_slice(),
        )
        .unwrap();

        let created = store
            .create(None, &input("Hello World", "2024-01-15", "First post."))
            .await
            .unwrap();
        assert_eq!(created.slug, "hello-world");

        let listed = store.list().unwrap();
        let slugs: Vec<_> = listed.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["hello-world", "a1", "legacy"]);
        assert_eq!(listed[2].title, "caf\u{FFFD}");
        assert_eq!(store.index_entries().unwrap(), Some(listed));
    }

    #[tokio::test]
    async fn test_reindex_rebuilds_missing_index() {
        let (temp, store) = store();
        store
            .create(Some("a1"), &input("A", "2024-01-01", "x"))
            .await
            .unwrap();
        std::fs::remove_file(temp.path().join(INDEX_FILE)).unwrap();
        assert!(store.index_entries().unwrap().is_none());

        assert_eq!(store.reindex().await.unwrap(), 1);
        assert_eq!(store.index_entries().unwrap(), Some(store.list().unwrap()));
    }
}
