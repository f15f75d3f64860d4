//! Post repository
//!
//! Reads join the owning user with a LEFT JOIN so orphaned posts still come
//! back, with the owner columns NULL.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::super::DbError;
use crate::models::{NewPost, Owner, Post, PostPatch, PostWithOwner};

const POST_COLUMNS: &str = "id, title, content, user_id, created_at";

/// Row shape of the post/user join
#[derive(FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    user_id: Uuid,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<PostRow> for PostWithOwner {
    fn from(row: PostRow) -> Self {
        let user = match (row.first_name, row.last_name) {
            (Some(first_name), Some(last_name)) => Some(Owner {
                id: row.user_id,
                first_name,
                last_name,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            user_id: row.user_id,
            user,
        }
    }
}

const JOINED_SELECT: &str = r#"
    SELECT p.id, p.title, p.content, p.user_id, u.first_name, u.last_name
    FROM posts p
    LEFT JOIN users u ON u.id = p.user_id
"#;

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All posts with owners, in insertion order (single query).
    pub async fn list(&self) -> Result<Vec<PostWithOwner>, DbError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{JOINED_SELECT} ORDER BY p.created_at, p.id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PostWithOwner::from).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<PostWithOwner>, DbError> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{JOINED_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(PostWithOwner::from))
    }

    pub async fn create(&self, new: NewPost) -> Result<Post, DbError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES ($1, $2, $3)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(new.title.as_str())
        .bind(new.content.as_str())
        .bind(new.user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, DbError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                user_id = COALESCE($4, user_id)
            WHERE id = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title.as_ref().map(|t| t.as_str()))
        .bind(patch.content.as_ref().map(|c| c.as_str()))
        .bind(patch.user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
