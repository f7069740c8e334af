// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response envelopes of the blogs API.

use irada_core::{Item, Page, Pagination};
use serde::Deserialize;

/// `{ "data": ... }` wrapper used by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Absent or `null` decodes as `None`.
    pub data: Option<T>,
}

/// Payload of a list response: `{ "blogs": [...], "pagination": {...} }`.
#[derive(Debug, Default, Deserialize)]
pub struct BlogList {
    #[serde(default)]
    pub blogs: Option<Vec<Item>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl From<BlogList> for Page {
    fn from(list: BlogList) -> Self {
        Page::new(
            list.blogs.unwrap_or_default(),
            list.pagination.unwrap_or_default(),
        )
    }
}

/// Error body shapes seen on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn text(self) -> Option<String> {
        self.message.or(self.error)
    }
}
