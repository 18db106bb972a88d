//! # Auth Module
//!
//! Single-admin authentication: an Argon2 password hash exchanged for a
//! 24-hour HS256 bearer token.

pub mod errors;
pub mod crypto;
pub mod jwt;
pub mod api;

pub use errors::{AuthError, AuthResult};
pub use crypto::{generate_secret, hash_password, verify_password};
pub use jwt::{AdminClaims, JwtConfig, JwtManager};
pub use api::AuthService;
