//! # Post Store
//!
//! A directory of HTML documents acting as a record store:
//!
//! - `codec` encodes a post into a standalone page and decodes it back
//! - `index` renders the derived listing page
//! - `store` enumerates, reads and mutates documents, rebuilding the
//!   index after every mutation
//! - `serializer` admits one mutation at a time

pub mod errors;
pub mod model;
pub mod validation;
pub mod escape;
pub mod templates;
pub mod codec;
pub mod index;
pub mod backend;
pub mod local;
pub mod serializer;
pub mod store;

pub use errors::{PostError, PostResult};
pub use model::{Post, PostFields, PostSummary};
pub use validation::{is_valid_date, is_valid_slug, slugify, PostInput};
pub use templates::SiteConfig;
pub use backend::DocumentBackend;
pub use local::LocalBackend;
pub use serializer::WriteSerializer;
pub use store::PostStore;
pub use index::INDEX_FILE;
