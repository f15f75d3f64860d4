//! In-process store
//!
//! Keeps both collections in insertion-ordered vectors behind one lock.
//! Selected with a `memory://` connection string; contents are lost when the
//! process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DbError, Store};
use crate::models::{NewPost, NewUser, Owner, Post, PostPatch, PostWithOwner, User, UserPatch};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl Collections {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn populate(&self, post: &Post) -> PostWithOwner {
        let user = self
            .users
            .iter()
            .find(|u| u.id == post.user_id)
            .map(|u| Owner {
                id: u.id,
                first_name: u.first_name.clone(),
                last_name: u.last_name.clone(),
            });

        PostWithOwner {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            user_id: post.user_id,
            user,
        }
    }
}

/// Store that lives in process memory
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn migrate(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, DbError> {
        let mut inner = self.inner.write().await;
        if inner.email_taken(new.email.as_str(), None) {
            return Err(DbError::Duplicate { field: "email" });
        }

        let user = User {
            id: Uuid::new_v4(),
            first_name: new.first_name.into_string(),
            last_name: new.last_name.into_string(),
            age: new.age.get(),
            email: new.email.as_str().to_owned(),
            is_admin: new.is_admin,
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<Option<User>, DbError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(email) = &patch.email {
            if inner.email_taken(email.as_str(), Some(id)) {
                return Err(DbError::Duplicate { field: "email" });
            }
        }

        let user = &mut inner.users[index];
        patch.apply(user);
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: Uuid) -> Result<bool, DbError> {
        let mut inner = self.inner.write().await;
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok(inner.users.len() < before)
    }

    async fn list_posts(&self) -> Result<Vec<PostWithOwner>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().map(|p| inner.populate(p)).collect())
    }

    async fn get_post(&self, id: Uuid) -> Result<Option<PostWithOwner>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| inner.populate(p)))
    }

    async fn create_post(&self, new: NewPost) -> Result<Post, DbError> {
        let post = Post {
            id: Uuid::new_v4(),
            title: new.title.as_str().to_owned(),
            content: new.content.as_str().to_owned(),
            user_id: new.user_id,
            created_at: Utc::now(),
        };
        self.inner.write().await.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, DbError> {
        let mut inner = self.inner.write().await;
        Ok(inner.posts.iter_mut().find(|p| p.id == id).map(|post| {
            patch.apply(post);
            post.clone()
        }))
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, DbError> {
        let mut inner = self.inner.write().await;
        let before = inner.posts.len();
        inner.posts.retain(|p| p.id != id);
        Ok(inner.posts.len() < before)
    }
}
