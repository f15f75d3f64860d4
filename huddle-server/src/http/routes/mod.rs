//! Route handlers organized by resource
//!
//! - pages: root listing
//! - users: user JSON API, forms and mutations
//! - posts: post JSON API, forms and mutations
//! - health: liveness check

pub mod health;
pub mod pages;
pub mod posts;
pub mod users;

use uuid::Uuid;

/// Parse a path id; anything malformed is treated like an unknown record.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
