//! Store error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("duplicate value for unique field '{field}'")]
    Duplicate { field: &'static str },
}

impl DbError {
    /// Map a unique-constraint violation onto [`DbError::Duplicate`].
    pub(crate) fn from_write(err: sqlx::Error, field: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate { field },
            _ => Self::Sqlx(err),
        }
    }
}
