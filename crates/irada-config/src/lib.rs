// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Irada content widgets.
//!
//! TOML files and `IRADA_*` environment variables are merged with Figment,
//! checked with `deny_unknown_fields`, validated semantically, and reported
//! as miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use irada_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("API endpoint: {}", config.api.endpoint);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, SourceFile, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{ApiConfig, AuthScheme, FeedConfig, IradaConfig, LogConfig, SimilarConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<IradaConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<IradaConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = [SourceFile::new("<inline>", toml_content)];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from an explicit file (plus environment) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<IradaConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources: Vec<SourceFile> = std::fs::read_to_string(path)
                .map(|text| vec![SourceFile::new(path.display().to_string(), text)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Reads every config file that exists, for source spans in diagnostics.
fn collect_toml_sources() -> Vec<SourceFile> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::LOCAL_CONFIG_PATH))
        .unwrap_or_else(|_| loader::LOCAL_CONFIG_PATH.into());

    [
        Some(local),
        loader::user_config_path(),
        Some(loader::SYSTEM_CONFIG_PATH.into()),
    ]
    .into_iter()
    .flatten()
    .filter_map(|path| {
        let text = std::fs::read_to_string(&path).ok()?;
        tracing::debug!(path = %path.display(), "read config source");
        Some(SourceFile::new(path.display().to_string(), text))
    })
    .collect()
}
