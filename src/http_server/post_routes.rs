//! Post HTTP Routes
//!
//! CRUD over the post store. Every route requires an admin bearer token.
//! Reads go straight to the store; create, update and delete queue on
//! the store's write serializer.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::auth_routes::require_admin;
use super::errors::{json_body, post_error, ApiResult};
use super::server::AppState;
use crate::posts::{Post, PostInput, PostSummary};

/// Post routes with shared state
pub fn post_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/posts", get(list_posts_handler).post(create_post_handler))
        .route(
            "/posts/:slug",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

/// Body of `POST /posts`. Fields are optional so that missing values are
/// reported by field validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Body of `PUT /posts/:slug`
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn post_input(title: Option<String>, date: Option<String>, body: Option<String>) -> PostInput {
    PostInput::new(
        title.unwrap_or_default(),
        date.unwrap_or_default(),
        body.unwrap_or_default(),
    )
}

// ==================
// Handlers
// ==================

async fn list_posts_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<PostSummary>>> {
    state
        .store
        .list()
        .map(Json)
        .map_err(|e| post_error(e, "list", "Failed to list posts"))
}

async fn get_post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Post>> {
    state
        .store
        .get(&slug)
        .map(Json)
        .map_err(|e| post_error(e, "get", "Failed to read post"))
}

async fn create_post_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PostSummary>)> {
    let request = json_body(body)?;
    let input = post_input(request.title, request.date, request.body);

    state
        .store
        .create(request.slug.as_deref(), &input)
        .await
        .map(|summary| (StatusCode::CREATED, Json(summary)))
        .map_err(|e| post_error(e, "create", "Failed to create post"))
}

async fn update_post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    body: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> ApiResult<Json<PostSummary>> {
    let request = json_body(body)?;
    let input = post_input(request.title, request.date, request.body);

    state
        .store
        .update(&slug, &input)
        .await
        .map(Json)
        .map_err(|e| post_error(e, "update", "Failed to update post"))
}

async fn delete_post_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .store
        .delete(&slug)
        .await
        .map_err(|e| post_error(e, "delete", "Failed to delete post"))?;

    Ok(Json(MessageResponse {
        message: "Post deleted".to_string(),
    }))
}
