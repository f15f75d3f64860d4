//! Post records
//!
//! A post belongs to one user through `user_id`. The reference is only
//! checked for shape; a post may point at a user that never existed or has
//! since been deleted, in which case its owner is unresolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{FieldErrors, ValidationError};

/// Owner label for posts whose user no longer resolves
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Stored post, reference not resolved
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// The owning user's display fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Owner {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// Post joined with its owner
///
/// Serializes with `user` set to the owner or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostWithOwner {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(skip)]
    pub user_id: Uuid,
    pub user: Option<Owner>,
}

impl PostWithOwner {
    pub fn owner_name(&self) -> String {
        match &self.user {
            Some(owner) => format!("{} {}", owner.first_name, owner.last_name),
            None => UNKNOWN_OWNER.to_owned(),
        }
    }
}

/// Validated, non-empty text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    pub fn title(s: &str) -> Result<Self, ValidationError> {
        Self::new(s, "title", "Title")
    }

    pub fn content(s: &str) -> Result<Self, ValidationError> {
        Self::new(s, "content", "Content")
    }

    fn new(s: &str, field: &'static str, label: &'static str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required { field, label });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a post's user reference.
///
/// Only the id's shape is checked, never whether the user exists.
pub fn parse_owner(s: &str) -> Result<Uuid, ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::Required {
            field: "user",
            label: "User",
        });
    }
    Uuid::parse_str(s.trim()).map_err(|_| ValidationError::InvalidReference {
        field: "user",
        label: "User",
    })
}

/// Post fields as submitted by a form or JSON body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user: Option<String>,
}

/// A post ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: PostText,
    pub content: PostText,
    pub user_id: Uuid,
}

impl NewPost {
    /// Validate every field, reporting all failures together.
    pub fn from_input(input: &PostInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new("Post");

        let title = errors.check(PostText::title(input.title.as_deref().unwrap_or_default()));
        let content = errors.check(PostText::content(
            input.content.as_deref().unwrap_or_default(),
        ));
        let user_id = errors.check(parse_owner(input.user.as_deref().unwrap_or_default()));

        match (title, content, user_id) {
            (Some(title), Some(content), Some(user_id)) if errors.is_empty() => Ok(Self {
                title,
                content,
                user_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Partial update: `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<PostText>,
    pub content: Option<PostText>,
    pub user_id: Option<Uuid>,
}

impl PostPatch {
    pub fn from_input(input: &PostInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new("Post");

        let patch = Self {
            title: errors.check_optional(input.title.as_deref().map(PostText::title)),
            content: errors.check_optional(input.content.as_deref().map(PostText::content)),
            user_id: errors.check_optional(input.user.as_deref().map(parse_owner)),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    pub fn apply(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.as_str().to_owned();
        }
        if let Some(content) = &self.content {
            post.content = content.as_str().to_owned();
        }
        if let Some(user_id) = self.user_id {
            post.user_id = user_id;
        }
    }
}
