// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Irada component tests.
//!
//! - [`MockContentClient`]: in-memory [`ContentClient`](irada_core::ContentClient)
//!   with scripted routing, failure injection, fetch gating, and a call log.
//! - [`fixtures`]: terse constructors for items and pages.

pub mod fixtures;
pub mod mock_client;

pub use mock_client::MockContentClient;
