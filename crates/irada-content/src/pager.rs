// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accumulates items across sequential page fetches for infinite scroll.
//!
//! The fetcher is purely reactive: callers decide when to call
//! [`PagedFetcher::load_next`]. A load that is already in flight, or an
//! exhausted cursor, turns further triggers into no-ops. State lives behind a
//! mutex that is never held across an await point.

use std::sync::{Arc, Mutex, MutexGuard};

use irada_core::{ContentClient, IradaError, Item, PageQuery};
use tracing::{debug, warn};

use crate::search::matches_query;

/// Lifecycle of the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    LoadingFirst,
    LoadingMore,
    Error,
}

impl LoadStatus {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::LoadingFirst | Self::LoadingMore)
    }
}

/// Pagination bookmark.
///
/// `current_page` is 0 until the first page has loaded; `total_pages` is
/// unknown until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub current_page: u32,
    pub total_pages: Option<u32>,
    pub has_next: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: None,
            has_next: true,
        }
    }
}

/// Result of a [`PagedFetcher::load_next`] call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page arrived and `appended` items were added.
    Loaded { appended: usize },
    /// A load was already in flight or no pages remain. Nothing was fetched.
    Skipped,
    /// The response belonged to a result set cleared by `reset`.
    Discarded,
}

#[derive(Debug, Default)]
struct PagerState {
    items: Vec<Item>,
    cursor: Cursor,
    status: LoadStatus,
    last_error: Option<String>,
    query: PageQuery,
    generation: u64,
}

impl PagerState {
    fn clear(&mut self) {
        self.items.clear();
        self.cursor = Cursor::default();
        self.status = LoadStatus::Idle;
        self.last_error = None;
        self.generation += 1;
    }
}

/// Infinite-scroll item accumulator over a [`ContentClient`].
pub struct PagedFetcher {
    client: Arc<dyn ContentClient>,
    state: Mutex<PagerState>,
}

impl PagedFetcher {
    /// Creates an idle fetcher for `query`. The page number in `query` is
    /// ignored; loading always starts at page 1.
    pub fn new(client: Arc<dyn ContentClient>, query: PageQuery) -> Self {
        Self {
            client,
            state: Mutex::new(PagerState {
                query,
                ..PagerState::default()
            }),
        }
    }

    /// Drops all loaded items and rewinds the cursor.
    ///
    /// A response still in flight when this is called is discarded on arrival.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.clear();
        debug!(generation = state.generation, "pager reset");
    }

    /// Replaces the filters and resets.
    pub fn set_query(&self, query: PageQuery) {
        let mut state = self.lock();
        state.query = query;
        state.clear();
        debug!(
            generation = state.generation,
            category = state.query.category.as_deref(),
            "pager query changed"
        );
    }

    /// Fetches the page after the cursor and appends its items.
    ///
    /// On failure the status becomes [`LoadStatus::Error`], previously loaded
    /// items are kept, and the error is returned. Calling again retries the
    /// same page.
    pub async fn load_next(&self) -> Result<LoadOutcome, IradaError> {
        let (query, generation) = {
            let mut state = self.lock();
            if state.status.is_loading() || !state.cursor.has_next {
                debug!(
                    status = %state.status,
                    has_next = state.cursor.has_next,
                    "load skipped"
                );
                return Ok(LoadOutcome::Skipped);
            }
            state.status = if state.items.is_empty() {
                LoadStatus::LoadingFirst
            } else {
                LoadStatus::LoadingMore
            };
            let next_page = state.cursor.current_page + 1;
            (state.query.at_page(next_page), state.generation)
        };

        let result = self.client.fetch_page(&query).await;

        let mut state = self.lock();
        if state.generation != generation {
            warn!(
                page = query.page,
                "discarding response for a result set cleared while it was in flight"
            );
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(page) => {
                let total_pages = page.pagination.total_pages;
                let appended = page.items.len();
                state.items.extend(page.items);
                state.cursor = Cursor {
                    current_page: query.page,
                    total_pages: Some(total_pages),
                    has_next: query.page < total_pages,
                };
                state.status = LoadStatus::Idle;
                state.last_error = None;
                debug!(
                    page = query.page,
                    total_pages,
                    appended,
                    loaded = state.items.len(),
                    "page loaded"
                );
                Ok(LoadOutcome::Loaded { appended })
            }
            Err(err) => {
                warn!(page = query.page, error = %err, "page load failed");
                state.status = LoadStatus::Error;
                state.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Snapshot of the loaded items in load order.
    pub fn items(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    /// Runs `f` over the loaded items without cloning them.
    pub fn with_items<R>(&self, f: impl FnOnce(&[Item]) -> R) -> R {
        f(&self.lock().items)
    }

    /// Loaded items matching a free-text query, in load order.
    pub fn filtered(&self, query: &str) -> Vec<Item> {
        self.with_items(|items| {
            items
                .iter()
                .filter(|item| matches_query(item, query))
                .cloned()
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.lock().cursor
    }

    pub fn status(&self) -> LoadStatus {
        self.lock().status
    }

    /// Message of the most recent failure, cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    pub fn query(&self) -> PageQuery {
        self.lock().query.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PagerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
