//! Root page

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::PageError;
use crate::http::server::AppState;
use crate::render;

/// GET / - listing of users and posts with create, edit and delete forms
async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let users = state.store().list_users().await?;
    let posts = state.store().list_posts().await?;

    Ok(Html(render::index_page(&users, &posts).into_string()))
}

/// Page routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
