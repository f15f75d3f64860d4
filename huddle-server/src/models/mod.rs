//! Domain models with validation at construction
//!
//! Request bodies deserialize into loose `*Input` structs. Turning those into
//! `New*` or `*Patch` values validates every field; the store only ever sees
//! validated values.

pub mod input;
pub mod post;
pub mod user;
pub mod validation;

pub use input::RawValue;
pub use post::{
    parse_owner, NewPost, Owner, Post, PostInput, PostPatch, PostText, PostWithOwner,
    UNKNOWN_OWNER,
};
pub use user::{duplicate_email, Age, Email, NewUser, PersonName, User, UserInput, UserPatch};
pub use validation::{FieldErrors, ValidationError};
