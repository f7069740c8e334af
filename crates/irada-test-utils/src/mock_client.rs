// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock content client for deterministic component tests.
//!
//! By default `MockContentClient` serves an in-memory catalog: list queries
//! are filtered by category, tags, and the featured set, then paginated.
//! A router closure can take over page responses entirely, failures can be
//! injected per query, and a gate can hold page fetches open so tests can
//! observe in-flight state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use irada_core::{ContactMessage, ContentClient, IradaError, Item, Page, PageQuery, Pagination};
use tokio::sync::Notify;

type Router = Box<dyn Fn(&PageQuery) -> Option<Page> + Send + Sync>;
type Predicate = Box<dyn Fn(&PageQuery) -> bool + Send + Sync>;

/// Page size used when a query does not set `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// In-memory [`ContentClient`].
#[derive(Default)]
pub struct MockContentClient {
    catalog: Vec<Item>,
    featured: HashSet<String>,
    router: Option<Router>,
    fail_pages: Option<Predicate>,
    fail_messages: bool,
    gate: Option<Arc<Notify>>,
    page_calls: Mutex<Vec<PageQuery>>,
    item_calls: Mutex<Vec<String>>,
    messages: Mutex<Vec<ContactMessage>>,
}

impl MockContentClient {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `items`, in this order, from the catalog.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.catalog = items;
        self
    }

    /// Marks catalog items as featured by identifier.
    pub fn with_featured<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.featured = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Answers page queries with `router`; `None` falls back to the catalog.
    pub fn with_router<F>(mut self, router: F) -> Self
    where
        F: Fn(&PageQuery) -> Option<Page> + Send + Sync + 'static,
    {
        self.router = Some(Box::new(router));
        self
    }

    /// Page queries matching `predicate` fail with a transport error.
    pub fn fail_pages_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&PageQuery) -> bool + Send + Sync + 'static,
    {
        self.fail_pages = Some(Box::new(predicate));
        self
    }

    /// Message submissions fail with a server error.
    pub fn fail_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    /// Every page fetch waits for a permit from `gate` before answering.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Page queries received so far, in call order.
    pub fn page_calls(&self) -> Vec<PageQuery> {
        lock(&self.page_calls).clone()
    }

    /// Slugs requested through `fetch_item`, in call order.
    pub fn item_calls(&self) -> Vec<String> {
        lock(&self.item_calls).clone()
    }

    /// Contact messages accepted so far.
    pub fn messages(&self) -> Vec<ContactMessage> {
        lock(&self.messages).clone()
    }

    fn serve_catalog(&self, query: &PageQuery) -> Page {
        let matching: Vec<&Item> = self
            .catalog
            .iter()
            .filter(|item| {
                query
                    .category
                    .as_deref()
                    .is_none_or(|c| item.category() == Some(c))
            })
            .filter(|item| {
                query.tags_any.is_empty() || item.tags.iter().any(|t| query.tags_any.contains(t))
            })
            .filter(|item| !query.featured || self.featured.contains(&item.id))
            .collect();

        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;
        let total_items = matching.len() as u64;
        let total_pages = matching.len().div_ceil(limit).max(1);
        let start = (query.page.max(1) as usize - 1) * limit;
        let items = matching
            .into_iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect();

        Page::new(
            items,
            Pagination {
                current_page: query.page,
                total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
                total_items,
                limit: limit as u32,
                ..Pagination::default()
            },
        )
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ContentClient for MockContentClient {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Page, IradaError> {
        lock(&self.page_calls).push(query.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail_pages.as_ref().is_some_and(|fail| fail(query)) {
            return Err(IradaError::Transport {
                message: format!("mock transport failure for page {}", query.page),
                source: None,
            });
        }

        let routed = self.router.as_ref().and_then(|route| route(query));
        Ok(routed.unwrap_or_else(|| self.serve_catalog(query)))
    }

    async fn fetch_item(&self, slug: &str) -> Result<Item, IradaError> {
        lock(&self.item_calls).push(slug.to_string());
        self.catalog
            .iter()
            .find(|item| item.slug == slug)
            .cloned()
            .ok_or_else(|| IradaError::not_found(format!("blog `{slug}`")))
    }

    async fn submit_message(
        &self,
        message: &ContactMessage,
    ) -> Result<serde_json::Value, IradaError> {
        if self.fail_messages {
            return Err(IradaError::Server {
                status: 503,
                message: "mock message failure".to_string(),
            });
        }
        lock(&self.messages).push(message.clone());
        Ok(serde_json::json!({ "success": true }))
    }
}
