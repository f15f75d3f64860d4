//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::repos::{PostRepo, UserRepo};
use super::{DbError, Store};
use crate::models::{NewPost, NewUser, Post, PostPatch, PostWithOwner, User, UserPatch};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store over an `sqlx` connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a pool to `database_url`.
    ///
    /// ```ignore
    /// let store = PgStore::connect("postgres://localhost/huddle", 5).await?;
    /// store.migrate().await?;
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Store for PgStore {
    async fn migrate(&self) -> Result<(), DbError> {
        tracing::info!("Running migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                age INTEGER NOT NULL CHECK (age >= 1),
                email TEXT NOT NULL UNIQUE,
                is_admin BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // No foreign key on user_id: posts outlive their owners.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                user_id UUID NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS posts_user_id_idx ON posts (user_id)")
            .execute(&self.pool)
            .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, DbError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn create_user(&self, new: NewUser) -> Result<User, DbError> {
        UserRepo::new(&self.pool).create(new).await
    }

    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, DbError> {
        UserRepo::new(&self.pool).update(id, patch).await
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, DbError> {
        UserRepo::new(&self.pool).delete(id).await
    }

    async fn list_posts(&self) -> Result<Vec<PostWithOwner>, DbError> {
        PostRepo::new(&self.pool).list().await
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<PostWithOwner>, DbError> {
        PostRepo::new(&self.pool).get(id).await
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, DbError> {
        PostRepo::new(&self.pool).create(new).await
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, DbError> {
        PostRepo::new(&self.pool).update(id, patch).await
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, DbError> {
        PostRepo::new(&self.pool).delete(id).await
    }
}
