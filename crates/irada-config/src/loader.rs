// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `/etc/irada/irada.toml`, `~/.config/irada/irada.toml`,
//! `./irada.toml`, then `IRADA_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::IradaConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/irada/irada.toml";

/// Configuration file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "irada.toml";

/// Sections recognized in `IRADA_<SECTION>_<KEY>` variable names.
const ENV_SECTIONS: &[&str] = &["api", "similar", "feed", "log"];

/// The per-user configuration file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("irada").join("irada.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/irada/irada.toml`
/// 3. `~/.config/irada/irada.toml`
/// 4. `./irada.toml`
/// 5. `IRADA_*` environment variables
pub fn load_config() -> Result<IradaConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only. No files, no environment.
pub fn load_config_from_str(toml_content: &str) -> Result<IradaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IradaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<IradaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(IradaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(IradaConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `IRADA_SECTION_KEY` to `section.key`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `IRADA_SIMILAR_MIN_SHARED_TAGS` lands on `similar.min_shared_tags`.
fn env_provider() -> Env {
    Env::prefixed("IRADA_").map(|key| map_env_key(key.as_str()).into())
}

/// Figment hands over the key in its original (upper) case.
fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_split_on_section_only() {
        assert_eq!(map_env_key("api_key"), "api.key");
        assert_eq!(map_env_key("api_timeout_secs"), "api.timeout_secs");
        assert_eq!(
            map_env_key("similar_min_shared_tags"),
            "similar.min_shared_tags"
        );
        assert_eq!(map_env_key("feed_page_size"), "feed.page_size");
        assert_eq!(map_env_key("log_level"), "log.level");
        assert_eq!(map_env_key("unrelated"), "unrelated");
    }

    #[test]
    fn uppercase_env_keys_map_to_sections() {
        assert_eq!(map_env_key("API_KEY"), "api.key");
        assert_eq!(map_env_key("SIMILAR_TAG_POOL"), "similar.tag_pool");
        assert_eq!(map_env_key("Log_Level"), "log.level");
    }
}
