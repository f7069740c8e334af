// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content logic for the Irada widgets.
//!
//! - [`SimilarityMatcher`] picks related items by category, then shared tags.
//! - [`PagedFetcher`] accumulates pages for infinite scroll.
//! - [`toc::extract`] builds a heading outline and anchors the content.
//!
//! Everything talks to the API through an injected
//! [`ContentClient`](irada_core::ContentClient).

pub mod carousel;
pub mod contact;
pub mod format;
pub mod pager;
pub mod reader;
pub mod search;
pub mod similar;
pub mod toc;

pub use carousel::{AUTO_ADVANCE, Carousel, FeaturedCarousel, Swipe};
pub use contact::{ContactField, ContactForm, ContactFormErrors, SendError, send_contact_message};
pub use pager::{Cursor, LoadOutcome, LoadStatus, PagedFetcher};
pub use reader::{Article, ArticleReader};
pub use search::matches_query;
pub use similar::{SimilarityMatcher, shared_tags};
pub use toc::TableOfContents;
