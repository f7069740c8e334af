// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::IradaConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &IradaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let endpoint = config.api.endpoint.trim();
    if endpoint.is_empty() {
        fail("api.endpoint must not be empty".to_string());
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        fail(format!(
            "api.endpoint `{endpoint}` must start with http:// or https://"
        ));
    }

    for (key, path) in [
        ("api.blogs_path", &config.api.blogs_path),
        ("api.messages_path", &config.api.messages_path),
    ] {
        if !path.starts_with('/') {
            fail(format!("{key} `{path}` must start with `/`"));
        }
    }

    if config.api.key_header.trim().is_empty() {
        fail("api.key_header must not be empty".to_string());
    }

    if config.api.timeout_secs == 0 {
        fail("api.timeout_secs must be greater than 0".to_string());
    }

    if config.similar.limit == 0 {
        fail("similar.limit must be at least 1".to_string());
    }
    if config.similar.min_shared_tags == 0 {
        fail("similar.min_shared_tags must be at least 1".to_string());
    }
    if config.similar.category_pool == 0 {
        fail("similar.category_pool must be at least 1".to_string());
    }
    if config.similar.tag_pool == 0 {
        fail("similar.tag_pool must be at least 1".to_string());
    }

    if config.feed.page_size == Some(0) {
        fail("feed.page_size must be at least 1 when set".to_string());
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        fail(format!(
            "log.level `{}` is not one of {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(config: &IradaConfig) -> Vec<String> {
        validate_config(config)
            .unwrap_err()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&IradaConfig::default()).is_ok());
    }

    #[test]
    fn endpoint_without_scheme_fails() {
        let mut config = IradaConfig::default();
        config.api.endpoint = "example.com".into();
        let errs = messages(&config);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].contains("http://"), "got: {errs:?}");
    }

    #[test]
    fn relative_paths_fail() {
        let mut config = IradaConfig::default();
        config.api.blogs_path = "api/blogs".into();
        let errs = messages(&config);
        assert!(errs[0].contains("api.blogs_path"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = IradaConfig::default();
        config.api.timeout_secs = 0;
        config.similar.limit = 0;
        config.similar.min_shared_tags = 0;
        config.feed.page_size = Some(0);
        config.log.level = "loud".into();
        assert_eq!(messages(&config).len(), 5);
    }
}
