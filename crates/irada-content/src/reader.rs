// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembles everything the article view needs from one slug.

use std::sync::Arc;

use irada_config::SimilarConfig;
use irada_core::{ContentClient, IradaError, Item, OutlineEntry, SimilarSet};
use tracing::info;

use crate::format::reading_minutes;
use crate::similar::SimilarityMatcher;
use crate::toc;

/// A fully prepared article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub item: Item,
    pub outline: Vec<OutlineEntry>,
    /// Body content with an anchor id on every heading.
    pub content: String,
    pub reading_minutes: u32,
    pub similar: SimilarSet,
}

pub struct ArticleReader {
    client: Arc<dyn ContentClient>,
    matcher: SimilarityMatcher,
}

impl ArticleReader {
    pub fn new(client: Arc<dyn ContentClient>, config: SimilarConfig) -> Self {
        Self {
            matcher: SimilarityMatcher::new(Arc::clone(&client), config),
            client,
        }
    }

    /// Fetches the item behind `slug` and prepares it for reading.
    ///
    /// Only the item fetch can fail. Outline extraction and similar-item
    /// lookup degrade to empty results.
    pub async fn open(&self, slug: &str) -> Result<Article, IradaError> {
        let item = self.client.fetch_item(slug).await?;
        let toc = toc::extract(&item.content);
        let minutes = reading_minutes(&item.content);
        let similar = self.matcher.find_similar(&item).await;

        info!(
            slug,
            headings = toc.outline.len(),
            similar = similar.len(),
            reading_minutes = minutes,
            "article opened"
        );
        Ok(Article {
            item,
            outline: toc.outline,
            content: toc.content,
            reading_minutes: minutes,
            similar,
        })
    }
}
