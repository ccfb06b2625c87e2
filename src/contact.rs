// SPDX-License-Identifier: MPL-2.0
//! Contact form validation and the payload sent to the form service.
//!
//! Delivery itself belongs to the third-party form endpoint; this module
//! only decides whether a form may be sent and builds the JSON body the
//! endpoint expects.

use crate::config::{
    ContactConfig, MAX_CONTACT_EMAIL_CHARS, MAX_CONTACT_MESSAGE_CHARS, MAX_CONTACT_NAME_CHARS,
};
use crate::error::Result;
use crate::i18n::Key;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Dot-separated local part, hostname labels, alphabetic TLD of 2+ letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+-]+(\.[A-Za-z0-9_'+-]+)*@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Key of the field's placeholder text.
    pub fn placeholder_key(self) -> Key {
        match self {
            Field::Name => Key::ContactName,
            Field::Email => Key::ContactEmail,
            Field::Message => Key::ContactMessage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooLong,
}

impl FieldError {
    /// Key of the message shown under the offending field.
    pub fn message_key(self, field: Field) -> Key {
        match (self, field) {
            (FieldError::InvalidEmail, _) | (FieldError::Required, Field::Email) => {
                Key::ContactEmailInvalid
            }
            (FieldError::Required, Field::Name) => Key::ContactNameRequired,
            (FieldError::Required, Field::Message) => Key::ContactMessageRequired,
            (FieldError::TooLong, _) => Key::ContactTooLong,
        }
    }
}

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field, reporting at most one error per field in field
    /// order.
    pub fn validate(&self) -> std::result::Result<ValidContact, Vec<(Field, FieldError)>> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push((Field::Name, FieldError::Required));
        } else if name.chars().count() > MAX_CONTACT_NAME_CHARS {
            errors.push((Field::Name, FieldError::TooLong));
        }

        if email.is_empty() {
            errors.push((Field::Email, FieldError::Required));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push((Field::Email, FieldError::InvalidEmail));
        } else if email.chars().count() > MAX_CONTACT_EMAIL_CHARS {
            errors.push((Field::Email, FieldError::TooLong));
        }

        if message.is_empty() {
            errors.push((Field::Message, FieldError::Required));
        } else if message.chars().count() > MAX_CONTACT_MESSAGE_CHARS {
            errors.push((Field::Message, FieldError::TooLong));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

impl Submission {
    pub fn new(contact: ValidContact, config: &ContactConfig) -> Self {
        let subject = format!("Portfolio Contact from {}", contact.name);
        Self {
            access_key: config.access_key.clone().unwrap_or_default(),
            name: contact.name,
            email: contact.email,
            message: contact.message,
            subject,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
