// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content client trait for the remote blogs API.

use async_trait::async_trait;

use crate::error::IradaError;
use crate::types::{ContactMessage, Item, Page, PageQuery};

/// I/O boundary to the remote content API.
///
/// Implementations report every failure as one of the [`IradaError`] kinds
/// and never retry internally; retry policy belongs to the caller.
#[async_trait]
pub trait ContentClient: Send + Sync + 'static {
    /// Fetches one page of items matching `query`.
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page, IradaError>;

    /// Fetches a single item by slug.
    ///
    /// Fails with [`IradaError::NotFound`] when no item has this slug.
    async fn fetch_item(&self, slug: &str) -> Result<Item, IradaError>;

    /// Submits a contact message and returns the server's JSON reply.
    async fn submit_message(
        &self,
        message: &ContactMessage,
    ) -> Result<serde_json::Value, IradaError>;
}
