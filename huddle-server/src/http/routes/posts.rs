//! Post endpoints
//!
//! Reads resolve the owning user. A failed create shows every failing field
//! on its own page rather than a one-line fragment.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, patch, post},
    Json, Router,
};

use super::parse_id;
use crate::http::error::{ApiError, PageError};
use crate::http::extractors::FormOrJson;
use crate::http::server::AppState;
use crate::models::{NewPost, PostInput, PostPatch, PostWithOwner};
use crate::render;

/// GET /api/posts - every post with its owner
async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostWithOwner>>, ApiError> {
    let posts = state.store().list_posts().await?;
    Ok(Json(posts))
}

/// GET /api/posts/{id} - one post, `null` when unknown
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<PostWithOwner>>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Ok(Json(None));
    };

    let post = state.store().get_post(id).await?;
    Ok(Json(post))
}

/// POST /posts - create; the owner id is not checked for existence
async fn create_post(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<PostInput>,
) -> Result<Redirect, PageError> {
    let new_post = NewPost::from_input(&input).map_err(PageError::PostInvalid)?;
    let post = state.store().create_post(new_post).await?;

    tracing::debug!(post_id = %post.id, user_id = %post.user_id, "post created");
    Ok(Redirect::to("/"))
}

/// GET /posts/{id}/edit - edit form with owner selector
async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let not_found = || PageError::NotFound { resource: "Post" };

    let id = parse_id(&id).ok_or_else(not_found)?;
    let post = state.store().get_post(id).await?.ok_or_else(not_found)?;
    let users = state.store().list_users().await?;

    Ok(Html(render::post_edit_form(&post, &users).into_string()))
}

/// PATCH /posts/{id} - partial update
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormOrJson(input): FormOrJson<PostInput>,
) -> Result<Redirect, PageError> {
    let patch = PostPatch::from_input(&input).map_err(PageError::Invalid)?;

    if let Some(id) = parse_id(&id) {
        let updated = state.store().update_post(id, patch).await?;
        tracing::debug!(post_id = %id, found = updated.is_some(), "post updated");
    }

    Ok(Redirect::to("/"))
}

/// DELETE /posts/{id}
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    if let Some(id) = parse_id(&id) {
        let deleted = state.store().delete_post(id).await?;
        tracing::debug!(post_id = %id, deleted, "post deleted");
    }

    Ok(Redirect::to("/"))
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/{id}", get(get_post))
        .route("/posts", post(create_post))
        .route(
            "/posts/{id}",
            patch(update_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{id}/edit", get(edit_post))
}
