// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the content components and their collaborators.
//!
//! Traits use `#[async_trait]` so implementations can be held as
//! `Arc<dyn ContentClient>`.

pub mod content;

pub use content::ContentClient;
