//! # HTTP Server
//!
//! Combines the health, auth and post routers into one axum app.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::auth_routes::auth_routes;
use super::health_routes::health_routes;
use super::post_routes::post_routes;
use crate::auth::{AuthService, JwtConfig};
use crate::config::BlogConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::posts::{LocalBackend, PostResult, PostStore};

/// Path prefix for the admin API
pub const API_PREFIX: &str = "/api/blog";

/// State shared by all handlers
#[derive(Debug)]
pub struct AppState {
    pub store: PostStore<LocalBackend>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(store: PostStore<LocalBackend>, auth: AuthService) -> Self {
        Self { store, auth }
    }

    /// Build store and auth service from configuration
    pub fn from_config(config: &BlogConfig) -> PostResult<Self> {
        let backend = LocalBackend::open(&config.blog_dir)?;
        let store = PostStore::new(backend, config.site.clone());
        let auth = AuthService::new(
            config.password_hash.clone(),
            JwtConfig::with_secret(config.jwt_secret.clone()),
        );
        Ok(Self::new(store, auth))
    }
}

/// HTTP server for the blog admin API
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server from configuration
    pub fn from_config(config: &BlogConfig) -> PostResult<Self> {
        let state = Arc::new(AppState::from_config(config)?);
        Ok(Self::with_state(state, config))
    }

    /// Create a server around existing state
    pub fn with_state(state: Arc<AppState>, config: &BlogConfig) -> Self {
        Self {
            addr: config.socket_addr(),
            router: build_router(state, &config.cors_origins),
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.addr, e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(
            Event::ServerStart,
            &[("addr", self.addr.as_str()), ("prefix", API_PREFIX)],
        );

        axum::serve(listener, self.router).await
    }
}

/// Build the combined router
pub fn build_router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes(state.clone()))
        .nest(
            API_PREFIX,
            auth_routes(state.clone()).merge(post_routes(state)),
        )
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_server_from_config() {
        let temp = TempDir::new().unwrap();
        let config = BlogConfig {
            blog_dir: temp.path().join("blog"),
            port: 8080,
            ..BlogConfig::default()
        };

        let server = HttpServer::from_config(&config).unwrap();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        assert!(temp.path().join("blog").is_dir());
        let _router = server.router();
    }
}
