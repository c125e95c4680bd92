//! Validation for waitlist form fields
//!
//! `name` is free text. `email` is required and must look like an address.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::form::FormValues;

/// Address grammar: local part, `@`, dot-separated domain labels, alphabetic TLD.
/// Leading dots and `..` in the local part are checked separately since the
/// regex engine has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WaitlistField {
    Name,
    Email,
}

impl WaitlistField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaitlistField::Name => "name",
            WaitlistField::Email => "email",
        }
    }
}

/// Field validation error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Errors keyed by the failing field. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<WaitlistField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn insert(&mut self, field: WaitlistField, error: FieldError) {
        self.fields.insert(field, error);
    }

    pub fn remove(&mut self, field: WaitlistField) {
        self.fields.remove(&field);
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn get(&self, field: WaitlistField) -> Option<FieldError> {
        self.fields.get(&field).copied()
    }

    /// Human-readable message for a field, if it failed
    pub fn message(&self, field: WaitlistField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (WaitlistField, FieldError)> + '_ {
        self.fields.iter().map(|(field, error)| (*field, *error))
    }
}

/// Check an address against the email grammar
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, _domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_PATTERN.is_match(email)
}

/// Validate all form fields.
///
/// Runs synchronously and never touches the network.
pub fn validate(values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let email = values.email.trim();
    if email.is_empty() {
        errors.insert(WaitlistField::Email, FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.insert(WaitlistField::Email, FieldError::InvalidEmail);
    }

    errors
}
