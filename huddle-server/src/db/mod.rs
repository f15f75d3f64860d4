//! Persistence layer - store trait and backends
//!
//! # Design Principles
//!
//! - One process-wide store handle, opened at startup and shared by handlers
//! - Only validated models are written
//! - Post owners are resolved on read; no foreign keys, no cascades
//! - Last write wins; no transactions span records

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repos;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewPost, NewUser, Post, PostPatch, PostWithOwner, User, UserPatch};

pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{PgStore, DEFAULT_MAX_CONNECTIONS};

/// Connection string prefix selecting [`MemoryStore`]
pub const MEMORY_URL_PREFIX: &str = "memory:";

/// Users and posts collections
#[async_trait]
pub trait Store: Send + Sync {
    /// Create the collections if they don't exist yet.
    async fn migrate(&self) -> Result<(), DbError>;

    async fn list_users(&self) -> Result<Vec<User>, DbError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, DbError>;
    async fn create_user(&self, new: NewUser) -> Result<User, DbError>;
    /// `Ok(None)` when no user has this id.
    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, DbError>;
    /// Removes the user only; their posts stay.
    async fn delete_user(&self, id: Uuid) -> Result<bool, DbError>;

    async fn list_posts(&self) -> Result<Vec<PostWithOwner>, DbError>;
    async fn get_post(&self, id: Uuid) -> Result<Option<PostWithOwner>, DbError>;
    async fn create_post(&self, new: NewPost) -> Result<Post, DbError>;
    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, DbError>;
    async fn delete_post(&self, id: Uuid) -> Result<bool, DbError>;
}

/// Shared store handle
pub type SharedStore = Arc<dyn Store>;

/// Open the store named by `database_url`.
///
/// `memory://` (any `memory:` URL) gives a fresh [`MemoryStore`]; anything
/// else is handed to PostgreSQL.
pub async fn create_store(database_url: &str, max_connections: u32) -> Result<SharedStore, DbError> {
    if database_url.starts_with(MEMORY_URL_PREFIX) {
        tracing::info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    tracing::info!(max_connections, "Connecting to PostgreSQL");
    let store = PgStore::connect(database_url, max_connections).await?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_url_selects_memory_store() {
        let store = create_store("memory://", DEFAULT_MAX_CONNECTIONS)
            .await
            .unwrap();
        store.migrate().await.unwrap();
        assert!(store.list_users().await.unwrap().is_empty());
    }
}
