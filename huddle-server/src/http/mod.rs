//! HTTP server layer
//!
//! Axum server with:
//! - HTML form routes and read-only JSON routes
//! - `?_method=` override for forms
//! - Request tracing and timeout
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod method_override;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{build_app, build_router, run_server, App, AppState, ServerConfig, ServerError};
