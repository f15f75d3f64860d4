//! Shared helpers for router tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use huddle_server::http::App;
use huddle_server::{build_app, AppState, MemoryStore, SharedStore};
use tower::ServiceExt;

/// App over a fresh in-memory store.
pub fn app() -> (App, SharedStore) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let app = build_app(AppState::new(store.clone()), Duration::from_secs(5));
    (app, store)
}

pub async fn send(app: &App, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn get(app: &App, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_form(app: &App, uri: &str, body: &str) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: &App, uri: &str, body: serde_json::Value) -> Response {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

pub async fn text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn json(response: Response) -> serde_json::Value {
    let body = text(response).await;
    serde_json::from_str(&body).unwrap()
}

pub fn assert_redirect_home(response: &Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

/// Create a user through the form route and return its id.
pub async fn create_user(app: &App, first: &str, email: &str) -> String {
    let body = format!(
        "firstName={first}&lastName=Runner&age=25&email={}",
        email.replace('@', "%40")
    );
    let response = post_form(app, "/users", &body).await;
    assert_redirect_home(&response);

    let users = json(get(app, "/api/users").await).await;
    users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == email)
        .map(|u| u["id"].as_str().unwrap().to_owned())
        .unwrap()
}
