//! Repository implementations for PostgreSQL
//!
//! Each repository borrows the pool and maps rows onto the domain models:
//! - Uses a LEFT JOIN for post owners (no N+1, orphans kept)
//! - Relies on the UNIQUE constraint for emails (no check-then-insert)

pub mod posts;
pub mod users;

pub use posts::PostRepo;
pub use users::UserRepo;
