// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact form validation and submission.

use std::fmt;
use std::sync::LazyLock;

use irada_core::{ContactMessage, ContentClient, IradaError};
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

/// Shortest accepted message, in characters, after trimming.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// One failing field and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid contact form: {}", summarize(.0))]
pub struct ContactFormErrors(pub Vec<FieldError>);

impl ContactFormErrors {
    /// The message for `field`, if it failed.
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks all fields and returns the trimmed message on success.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        let mut errors = Vec::new();

        if name.is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Name is required",
            });
        }

        if email.is_empty() {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Email is required",
            });
        } else if !EMAIL.is_match(email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Please enter a valid email",
            });
        }

        if message.is_empty() {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Message is required",
            });
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Message must be at least 10 characters",
            });
        }

        if !errors.is_empty() {
            return Err(ContactFormErrors(errors));
        }
        Ok(ContactMessage {
            sender_email: email.to_string(),
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

/// Failure of [`send_contact_message`].
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Invalid(#[from] ContactFormErrors),

    #[error("message not delivered: {0}")]
    Delivery(#[from] IradaError),
}

/// Validates `form` and submits it. Nothing is sent when validation fails.
pub async fn send_contact_message(
    client: &dyn ContentClient,
    form: &ContactForm,
) -> Result<serde_json::Value, SendError> {
    let message = form.validate()?;
    match client.submit_message(&message).await {
        Ok(reply) => {
            info!(sender = %message.sender_email, "contact message delivered");
            Ok(reply)
        }
        Err(err) => {
            warn!(sender = %message.sender_email, error = %err, "contact message failed");
            Err(err.into())
        }
    }
}
