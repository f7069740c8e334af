// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP implementation of [`ContentClient`] for the Irada blogs API.
//!
//! Endpoints:
//! - `GET  <endpoint><blogs_path>?page=N&category=C&tags=a,b&limit=L&featured=true`
//! - `GET  <endpoint><blogs_path>/<slug>`
//! - `POST <endpoint><messages_path>`

pub mod client;
pub mod types;

use async_trait::async_trait;
use irada_config::ApiConfig;
use irada_core::{ContactMessage, ContentClient, IradaError, Item, Page, PageQuery};
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::types::{BlogList, Envelope};

/// [`ContentClient`] backed by the remote REST API.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    api: ApiClient,
}

impl HttpContentClient {
    /// Creates a client from the `[api]` configuration section.
    ///
    /// Missing credentials are reported here as [`IradaError::Config`],
    /// before any request is attempted.
    pub fn from_config(config: &ApiConfig) -> Result<Self, IradaError> {
        let api = ApiClient::new(config)?;
        info!(
            endpoint = %api.base_url(),
            auth = %config.auth,
            "content client initialized"
        );
        Ok(Self { api })
    }
}

#[async_trait]
impl ContentClient for HttpContentClient {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page, IradaError> {
        debug!(
            page = query.page,
            category = query.category.as_deref(),
            featured = query.featured,
            "fetching page"
        );
        let envelope: Envelope<BlogList> = self
            .api
            .get_json(self.api.list_url(query), &format!("blogs page {}", query.page))
            .await?;
        Ok(envelope.data.unwrap_or_default().into())
    }

    async fn fetch_item(&self, slug: &str) -> Result<Item, IradaError> {
        debug!(slug, "fetching item");
        let resource = format!("blog `{slug}`");
        let envelope: Envelope<Item> = self.api.get_json(self.api.item_url(slug), &resource).await?;
        envelope.data.ok_or_else(|| IradaError::not_found(resource))
    }

    async fn submit_message(
        &self,
        message: &ContactMessage,
    ) -> Result<serde_json::Value, IradaError> {
        debug!(sender = %message.sender_email, "submitting contact message");
        self.api
            .post_json(self.api.messages_url(), message, "contact message")
            .await
    }
}
