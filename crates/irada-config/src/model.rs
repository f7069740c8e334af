// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Irada widgets.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at load time instead of being silently ignored.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Irada configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IradaConfig {
    /// Remote content API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Similar-article selection settings.
    #[serde(default)]
    pub similar: SimilarConfig,

    /// Paged list settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// How the API key is presented to the server.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`.
    #[default]
    Bearer,
    /// `<key_header>: <key>`.
    ApiKey,
}

/// Remote content API configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing path.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key. Required by the HTTP client; usually supplied via `IRADA_API_KEY`.
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub auth: AuthScheme,

    /// Header carrying the key when `auth = "api_key"`.
    #[serde(default = "default_key_header")]
    pub key_header: String,

    #[serde(default = "default_blogs_path")]
    pub blogs_path: String,

    #[serde(default = "default_messages_path")]
    pub messages_path: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            key: None,
            auth: AuthScheme::default(),
            key_header: default_key_header(),
            blogs_path: default_blogs_path(),
            messages_path: default_messages_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://bloggestapi.sohaibaftab.me".to_string()
}

fn default_key_header() -> String {
    "x-api-key".to_string()
}

fn default_blogs_path() -> String {
    "/api/blogs".to_string()
}

fn default_messages_path() -> String {
    "/api/messages".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Similar-article selection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SimilarConfig {
    /// Maximum number of similar items returned (K).
    #[serde(default = "default_similar_limit")]
    pub limit: usize,

    /// Page size requested when looking for same-category items.
    #[serde(default = "default_category_pool")]
    pub category_pool: u32,

    /// Page size of the broader pool scanned for shared tags.
    #[serde(default = "default_tag_pool")]
    pub tag_pool: u32,

    /// Minimum number of shared tags for a tag match.
    #[serde(default = "default_min_shared_tags")]
    pub min_shared_tags: usize,
}

impl Default for SimilarConfig {
    fn default() -> Self {
        Self {
            limit: default_similar_limit(),
            category_pool: default_category_pool(),
            tag_pool: default_tag_pool(),
            min_shared_tags: default_min_shared_tags(),
        }
    }
}

fn default_similar_limit() -> usize {
    5
}

fn default_category_pool() -> u32 {
    10
}

fn default_tag_pool() -> u32 {
    20
}

fn default_min_shared_tags() -> usize {
    2
}

/// Paged list configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Items per page. `None` leaves the page size to the server.
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl IradaConfig {
    /// A copy safe to print: the API key is replaced by a marker.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api.key.is_some() {
            copy.api.key = Some("[REDACTED]".to_string());
        }
        copy
    }
}
