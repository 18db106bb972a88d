//! blogdesk - administrative API for a blog stored as static HTML files
//!
//! Posts live as `<slug>.html` documents in one directory next to a
//! generated `index.html`. The admin API creates, edits and deletes
//! posts and keeps the index in step after every change.

pub mod auth;
pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod posts;
