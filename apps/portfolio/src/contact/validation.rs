use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Structural check only: something@something.something, no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Failing fields mapped to a human-readable message. Empty means valid.
pub type FieldErrors = BTreeMap<ContactField, String>;

/// Validates every field; never stops at the first failure.
///
/// Lengths are counted in characters on the trimmed value. The email pattern
/// is applied to the value as typed.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.insert(ContactField::Name, "Name is required".to_string());
    } else if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(
            ContactField::Name,
            format!("Name must be at least {NAME_MIN_CHARS} characters"),
        );
    }

    if fields.email.trim().is_empty() {
        errors.insert(ContactField::Email, "Email is required".to_string());
    } else if !EMAIL_PATTERN.is_match(&fields.email) {
        errors.insert(
            ContactField::Email,
            "Please enter a valid email address".to_string(),
        );
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, "Message is required".to_string());
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.insert(
            ContactField::Message,
            format!("Message must be at least {MESSAGE_MIN_CHARS} characters"),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_reports_three_required() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Email is required");
        assert_eq!(errors[&ContactField::Message], "Message is required");
    }

    #[test]
    fn test_boundary_lengths_pass() {
        let errors = validate(&ContactFields::new("Jo", "a@b.co", "0123456789"));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_too_short_fields() {
        let errors = validate(&ContactFields::new(" J ", "a@b.co", "   short   "));
        assert_eq!(errors[&ContactField::Name], "Name must be at least 2 characters");
        assert_eq!(
            errors[&ContactField::Message],
            "Message must be at least 10 characters"
        );
        assert!(!errors.contains_key(&ContactField::Email));
    }

    #[test]
    fn test_whitespace_only_is_required() {
        let errors = validate(&ContactFields::new("   ", "  ", "\n\t"));
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Email is required");
        assert_eq!(errors[&ContactField::Message], "Message is required");
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["plainaddress", "a@b", "a b@c.de", "@b.co", "a@@b.co", "a@b.co "] {
            let errors = validate(&ContactFields::new("Jo", email, "0123456789"));
            assert_eq!(
                errors.get(&ContactField::Email).map(String::as_str),
                Some("Please enter a valid email address"),
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_lenient_emails_accepted() {
        for email in ["a@b.co", "first.last+tag@sub.example.org", "x@y.z"] {
            let errors = validate(&ContactFields::new("Jo", email, "0123456789"));
            assert!(errors.is_empty(), "email {email:?} should pass");
        }
    }

    #[test]
    fn test_multibyte_name_counts_characters() {
        let errors = validate(&ContactFields::new("李明", "a@b.co", "0123456789"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_field_accessors() {
        let mut fields = ContactFields::default();
        fields.set(ContactField::Email, "me@site.dev");
        assert_eq!(fields.get(ContactField::Email), "me@site.dev");
    }
}
