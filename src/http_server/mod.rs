//! # Blog Admin HTTP Server
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/blog/login` - Exchange the admin password for a token
//! - `/api/blog/posts`, `/api/blog/posts/:slug` - Post CRUD (bearer token)

pub mod errors;
pub mod server;
pub mod auth_routes;
pub mod post_routes;
pub mod health_routes;

pub use errors::ErrorResponse;
pub use server::{build_router, AppState, HttpServer, API_PREFIX};
