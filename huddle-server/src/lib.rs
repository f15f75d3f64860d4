//! huddle-server: users and posts over HTML forms and a JSON API
//!
//! Persists records through a [`Store`] (PostgreSQL or in-memory), validates
//! every write, and renders listings where each post shows its owning user.

pub mod db;
pub mod http;
pub mod models;
pub mod render;

pub use db::{create_store, DbError, MemoryStore, PgStore, SharedStore, Store};
pub use http::{build_app, run_server, AppState, ServerConfig, ServerError};
