// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Irada content widgets.

use thiserror::Error;

/// The error type reported by every [`ContentClient`](crate::ContentClient) operation.
#[derive(Debug, Error)]
pub enum IradaError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-2xx status, or with a body that could not be decoded.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The referenced item does not exist.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// A required credential or setting is missing. Raised before any request is sent.
    #[error("configuration error: {0}")]
    Config(String),
}

impl IradaError {
    /// Builds a [`IradaError::Transport`] wrapping the underlying cause.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds a [`IradaError::NotFound`] for the given resource description.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Returns true when the error is a [`IradaError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
