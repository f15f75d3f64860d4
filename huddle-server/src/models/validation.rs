//! Validation error types
//!
//! A single failing field is a [`ValidationError`]. Constructors that check
//! several fields collect every failure into [`FieldErrors`] instead of
//! stopping at the first one.

use std::fmt;

/// Validation error for one field of a domain record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or empty
    Required { field: &'static str, label: &'static str },

    /// String doesn't match the field's pattern
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value could not be read as a number
    NotANumber { field: &'static str, label: &'static str },

    /// Number outside the accepted range
    OutOfRange { field: &'static str, reason: &'static str },

    /// Value must be unique and another record already holds it
    Duplicate { field: &'static str, label: &'static str },

    /// Value is not a well-formed record identifier
    InvalidReference { field: &'static str, label: &'static str },
}

impl ValidationError {
    /// Name of the field that failed, as it appears in request bodies.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::NotANumber { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::Duplicate { field, .. }
            | Self::InvalidReference { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { label, .. } => write!(f, "{} is required", label),
            Self::InvalidFormat { reason, .. } | Self::OutOfRange { reason, .. } => {
                f.write_str(reason)
            }
            Self::NotANumber { label, .. } => write!(f, "{} must be a number", label),
            Self::Duplicate { label, .. } => write!(f, "{} is already in use", label),
            Self::InvalidReference { label, .. } => write!(f, "{} must be a valid id", label),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every validation failure for one record, in field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    entity: &'static str,
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            errors: Vec::new(),
        }
    }

    /// Errors for a record with exactly one failing field.
    pub fn single(entity: &'static str, error: ValidationError) -> Self {
        Self {
            entity,
            errors: vec![error],
        }
    }

    /// Record the failure of `result`, if any, and pass the value through.
    pub fn check<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }

    /// Like [`check`](Self::check) for fields that may be absent.
    pub fn check_optional<T>(&mut self, result: Option<Result<T, ValidationError>>) -> Option<T> {
        result.and_then(|r| self.check(r))
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Human-readable message for each failing field.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether any failure concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed", self.entity)?;
        for (i, err) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{}{}: {}", sep, err.field(), err)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Required {
            field: "firstName",
            label: "First name",
        };
        assert_eq!(err.to_string(), "First name is required");

        let err = ValidationError::Duplicate {
            field: "email",
            label: "Email",
        };
        assert_eq!(err.to_string(), "Email is already in use");
    }

    #[test]
    fn aggregate_display_lists_every_field() {
        let mut errors = FieldErrors::new("Post");
        errors.check::<()>(Err(ValidationError::Required {
            field: "title",
            label: "Title",
        }));
        errors.check::<()>(Err(ValidationError::Required {
            field: "content",
            label: "Content",
        }));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Post validation failed: title: Title is required, content: Content is required"
        );
    }

    #[test]
    fn check_passes_values_through() {
        let mut errors = FieldErrors::new("User");
        assert_eq!(errors.check(Ok::<_, ValidationError>(7)), Some(7));
        assert_eq!(errors.check_optional::<i32>(None), None);
        assert!(errors.is_empty());
    }
}
