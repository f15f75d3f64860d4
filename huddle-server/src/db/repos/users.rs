//! User repository
//!
//! - create: INSERT ... RETURNING, unique email enforced by the table
//! - update: COALESCE per column so absent fields keep their value
//! - delete: plain DELETE, posts are left alone

use sqlx::PgPool;
use uuid::Uuid;

use super::super::DbError;
use crate::models::{NewUser, User, UserPatch};

const USER_COLUMNS: &str = "id, first_name, last_name, age, email, is_admin, created_at";

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users in insertion order.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at, id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user. A taken email comes back as [`DbError::Duplicate`].
    pub async fn create(&self, new: NewUser) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (first_name, last_name, age, email, is_admin)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(new.first_name.as_str())
        .bind(new.last_name.as_str())
        .bind(new.age.get())
        .bind(new.email.as_str())
        .bind(new.is_admin)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "email"))
    }

    /// Apply a partial update. Returns `None` when no user has this id.
    pub async fn update(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, DbError> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                age = COALESCE($4, age),
                email = COALESCE($5, email),
                is_admin = COALESCE($6, is_admin)
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.first_name.as_ref().map(|n| n.as_str()))
        .bind(patch.last_name.as_ref().map(|n| n.as_str()))
        .bind(patch.age.map(|a| a.get()))
        .bind(patch.email.as_ref().map(|e| e.as_str()))
        .bind(patch.is_admin)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::from_write(e, "email"))
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
