//! User endpoints
//!
//! JSON reads under `/api/users`, form routes under `/users`. Mutations
//! redirect to `/` on success.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, patch, post},
    Json, Router,
};

use super::parse_id;
use crate::db::DbError;
use crate::http::error::{ApiError, PageError};
use crate::http::extractors::FormOrJson;
use crate::http::server::AppState;
use crate::models::{duplicate_email, NewUser, User, UserInput, UserPatch};
use crate::render;

/// Turn a rejected email into a field error; everything else stays a store error.
fn write_error(err: DbError) -> PageError {
    match err {
        DbError::Duplicate { .. } => PageError::Invalid(duplicate_email()),
        other => PageError::Store(other),
    }
}

/// GET /api/users - every user
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store().list_users().await?;
    Ok(Json(users))
}

/// GET /api/users/{id} - one user, `null` when unknown
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<User>>, ApiError> {
    let Some(id) = parse_id(&id) else {
        return Ok(Json(None));
    };

    let user = state.store().get_user(id).await?;
    Ok(Json(user))
}

/// POST /users - create from form or JSON body
async fn create_user(
    State(state): State<AppState>,
    FormOrJson(input): FormOrJson<UserInput>,
) -> Result<Redirect, PageError> {
    let new_user = NewUser::from_input(&input).map_err(PageError::Invalid)?;
    let user = state
        .store()
        .create_user(new_user)
        .await
        .map_err(write_error)?;

    tracing::debug!(user_id = %user.id, "user created");
    Ok(Redirect::to("/"))
}

/// GET /users/{id}/edit - pre-filled edit form
async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let not_found = || PageError::NotFound { resource: "User" };

    let id = parse_id(&id).ok_or_else(not_found)?;
    let user = state.store().get_user(id).await?.ok_or_else(not_found)?;

    Ok(Html(render::user_edit_form(&user).into_string()))
}

/// PATCH /users/{id} - partial update
///
/// Only fields present in the body change. Unknown ids are a no-op.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormOrJson(input): FormOrJson<UserInput>,
) -> Result<Redirect, PageError> {
    let patch = UserPatch::from_input(&input).map_err(PageError::Invalid)?;

    if let Some(id) = parse_id(&id) {
        let updated = state
            .store()
            .update_user(id, patch)
            .await
            .map_err(write_error)?;
        tracing::debug!(user_id = %id, found = updated.is_some(), "user updated");
    }

    Ok(Redirect::to("/"))
}

/// DELETE /users/{id} - remove the user, keeping their posts
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, PageError> {
    if let Some(id) = parse_id(&id) {
        let deleted = state.store().delete_user(id).await?;
        tracing::debug!(user_id = %id, deleted, "user deleted");
    }

    Ok(Redirect::to("/"))
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user))
        .route("/users", post(create_user))
        .route(
            "/users/{id}",
            patch(update_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/edit", get(edit_user))
}
