// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Irada content widgets.
//!
//! This crate provides the data model, the error taxonomy, and the
//! [`ContentClient`] trait that the HTTP client implements and the content
//! components consume.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::IradaError;
pub use traits::ContentClient;
pub use types::{
    Author, ContactMessage, Item, OutlineEntry, Page, PageQuery, Pagination, SimilarSet,
};
