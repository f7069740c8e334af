// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based selection of items similar to a reference item.
//!
//! Candidates come from two queries. Same-category items are taken first, in
//! server order. When those fall short of the limit and the reference has
//! enough tags, a broader pool is scanned for items from other categories
//! that share at least `min_shared_tags` tags with the reference. A failed
//! query contributes nothing; matching itself never fails.

use std::collections::HashSet;
use std::sync::Arc;

use irada_config::SimilarConfig;
use irada_core::{ContentClient, Item, PageQuery, SimilarSet};
use tracing::{debug, warn};

/// Number of distinct tags present on both items.
///
/// Exact, case-sensitive comparison; symmetric in its arguments.
pub fn shared_tags(a: &Item, b: &Item) -> usize {
    let left: HashSet<&str> = a.tags.iter().map(String::as_str).collect();
    let right: HashSet<&str> = b.tags.iter().map(String::as_str).collect();
    left.intersection(&right).count()
}

/// Selects up to `config.limit` items related to a reference item.
pub struct SimilarityMatcher {
    client: Arc<dyn ContentClient>,
    config: SimilarConfig,
}

impl SimilarityMatcher {
    pub fn new(client: Arc<dyn ContentClient>, config: SimilarConfig) -> Self {
        Self { client, config }
    }

    /// Builds the similar set for `reference`.
    ///
    /// Returns an empty set when the reference has no category.
    pub async fn find_similar(&self, reference: &Item) -> SimilarSet {
        let limit = self.config.limit;
        let Some(category) = reference.category() else {
            debug!(id = %reference.id, "reference has no category, skipping similar items");
            return SimilarSet::empty(&reference.id);
        };

        let mut seen = HashSet::from([reference.id.clone()]);
        let mut picked = self.category_matches(reference, category, &mut seen).await;

        if picked.len() < limit && reference.tags.len() >= self.config.min_shared_tags {
            let tagged = self.tag_matches(reference, category, &mut seen).await;
            picked.extend(tagged);
        }

        picked.truncate(limit);
        debug!(
            id = %reference.id,
            category,
            found = picked.len(),
            "similar items selected"
        );
        SimilarSet {
            reference_id: reference.id.clone(),
            items: picked,
        }
    }

    async fn category_matches(
        &self,
        reference: &Item,
        category: &str,
        seen: &mut HashSet<String>,
    ) -> Vec<Item> {
        let query = PageQuery::first()
            .with_category(category)
            .with_limit(self.config.category_pool);

        match self.client.fetch_page(&query).await {
            Ok(page) => page
                .items
                .into_iter()
                .filter(|item| !item.same_as(reference))
                .filter(|item| seen.insert(item.id.clone()))
                .collect(),
            Err(err) => {
                warn!(id = %reference.id, category, error = %err, "category lookup failed, continuing without it");
                Vec::new()
            }
        }
    }

    async fn tag_matches(
        &self,
        reference: &Item,
        category: &str,
        seen: &mut HashSet<String>,
    ) -> Vec<Item> {
        let query = PageQuery::first().with_limit(self.config.tag_pool);

        match self.client.fetch_page(&query).await {
            Ok(page) => page
                .items
                .into_iter()
                .filter(|item| !item.same_as(reference))
                .filter(|item| item.category() != Some(category))
                .filter(|item| shared_tags(reference, item) >= self.config.min_shared_tags)
                .filter(|item| seen.insert(item.id.clone()))
                .collect(),
            Err(err) => {
                warn!(id = %reference.id, error = %err, "tag pool lookup failed, continuing without it");
                Vec::new()
            }
        }
    }
}
