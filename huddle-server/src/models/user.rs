//! User records and their field rules
//!
//! - first and last name: letters and whitespace only
//! - age: whole number, at least 1
//! - email: `local@domain.tld` shape, unique across users (checked by the store)
//! - is_admin: checkbox, defaults to false

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::input::RawValue;
use super::{FieldErrors, ValidationError};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("invalid name regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Stored user
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: i32,
    pub email: String,
    pub is_admin: bool,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated first or last name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Validate a first name.
    ///
    /// ```
    /// use huddle_server::models::PersonName;
    ///
    /// assert!(PersonName::first("Mary Ann").is_ok());
    /// assert!(PersonName::first("Jo3").is_err());
    /// ```
    pub fn first(s: &str) -> Result<Self, ValidationError> {
        Self::new(s, "firstName", "First name")
    }

    pub fn last(s: &str) -> Result<Self, ValidationError> {
        Self::new(s, "lastName", "Last name")
    }

    fn new(s: &str, field: &'static str, label: &'static str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required { field, label });
        }

        if !NAME_RE.is_match(s) {
            let reason = if field == "firstName" {
                "First name cannot contain numbers or special characters"
            } else {
                "Last name cannot contain numbers or special characters"
            };
            return Err(ValidationError::InvalidFormat { field, reason });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated age (>= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age(i32);

impl Age {
    pub fn new(n: i32) -> Result<Self, ValidationError> {
        if n < 1 {
            return Err(ValidationError::OutOfRange {
                field: "age",
                reason: "Age must be a positive number",
            });
        }
        Ok(Self(n))
    }

    /// Validate an age from a form field or JSON value.
    pub fn parse(raw: &RawValue) -> Result<Self, ValidationError> {
        if raw.is_blank() {
            return Err(ValidationError::Required {
                field: "age",
                label: "Age",
            });
        }

        let n = raw.as_i32().ok_or(ValidationError::NotANumber {
            field: "age",
            label: "Age",
        })?;
        Self::new(n)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// ```
    /// use huddle_server::models::Email;
    ///
    /// assert!(Email::new("a@b.com").is_ok());
    /// assert!(Email::new("a@b").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "email",
                label: "Email",
            });
        }

        if !EMAIL_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "Invalid email format",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The error reported when the store rejects a duplicate email.
pub fn duplicate_email() -> FieldErrors {
    FieldErrors::single(
        "User",
        ValidationError::Duplicate {
            field: "email",
            label: "Email",
        },
    )
}

/// User fields as submitted by a form or JSON body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub age: Option<RawValue>,
    pub email: Option<String>,
    pub is_admin: Option<RawValue>,
}

fn required(field: &'static str, label: &'static str) -> ValidationError {
    ValidationError::Required { field, label }
}

/// A user ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: Age,
    pub email: Email,
    pub is_admin: bool,
}

impl NewUser {
    /// Validate every field, reporting all failures together.
    pub fn from_input(input: &UserInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new("User");

        let first_name = errors.check(
            input
                .first_name
                .as_deref()
                .ok_or_else(|| required("firstName", "First name"))
                .and_then(PersonName::first),
        );
        let last_name = errors.check(
            input
                .last_name
                .as_deref()
                .ok_or_else(|| required("lastName", "Last name"))
                .and_then(PersonName::last),
        );
        let age = errors.check(
            input
                .age
                .as_ref()
                .ok_or_else(|| required("age", "Age"))
                .and_then(Age::parse),
        );
        let email = errors.check(
            input
                .email
                .as_deref()
                .ok_or_else(|| required("email", "Email"))
                .and_then(Email::new),
        );
        let is_admin = input.is_admin.as_ref().is_some_and(RawValue::is_checked);

        match (first_name, last_name, age, email) {
            (Some(first_name), Some(last_name), Some(age), Some(email)) if errors.is_empty() => {
                Ok(Self {
                    first_name,
                    last_name,
                    age,
                    email,
                    is_admin,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Partial update: `None` leaves the stored value alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub age: Option<Age>,
    pub email: Option<Email>,
    pub is_admin: Option<bool>,
}

impl UserPatch {
    /// Validate the fields that are present.
    pub fn from_input(input: &UserInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new("User");

        let patch = Self {
            first_name: errors.check_optional(input.first_name.as_deref().map(PersonName::first)),
            last_name: errors.check_optional(input.last_name.as_deref().map(PersonName::last)),
            age: errors.check_optional(input.age.as_ref().map(Age::parse)),
            email: errors.check_optional(input.email.as_deref().map(Email::new)),
            is_admin: input.is_admin.as_ref().map(RawValue::is_checked),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the present fields to `user`.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.first_name {
            user.first_name = name.as_str().to_owned();
        }
        if let Some(name) = &self.last_name {
            user.last_name = name.as_str().to_owned();
        }
        if let Some(age) = self.age {
            user.age = age.get();
        }
        if let Some(email) = &self.email {
            user.email = email.as_str().to_owned();
        }
        if let Some(is_admin) = self.is_admin {
            user.is_admin = is_admin;
        }
    }
}
