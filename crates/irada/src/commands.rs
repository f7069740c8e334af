// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

use std::sync::Arc;

use irada_config::IradaConfig;
use irada_content::{
    ArticleReader, ContactForm, FeaturedCarousel, LoadOutcome, PagedFetcher, SendError,
};
use irada_core::{ContentClient, IradaError, Item, PageQuery};
use thiserror::Error;
use tracing::{info, warn};

use crate::render;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Content(#[from] IradaError),

    #[error(transparent)]
    Contact(#[from] SendError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode configuration: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Options for `irada list`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Pages to load; `None` loads every page.
    pub pages: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub json: bool,
}

impl ListOptions {
    fn query(&self, config: &IradaConfig) -> PageQuery {
        let mut query = PageQuery::first();
        if let Some(category) = &self.category {
            query = query.with_category(category.clone());
        }
        if let Some(size) = config.feed.page_size {
            query = query.with_limit(size);
        }
        query
    }
}

/// Loads pages into a fetcher and returns the items to show.
///
/// A failure on the first page is returned. A failure on a later page stops
/// loading and keeps the pages that already arrived.
pub async fn collect_list(
    client: Arc<dyn ContentClient>,
    config: &IradaConfig,
    options: &ListOptions,
) -> Result<Vec<Item>, IradaError> {
    let pager = PagedFetcher::new(client, options.query(config));

    let mut loaded_pages = 0;
    while options.pages.is_none_or(|limit| loaded_pages < limit) {
        match pager.load_next().await {
            Ok(LoadOutcome::Loaded { .. }) => loaded_pages += 1,
            Ok(LoadOutcome::Skipped | LoadOutcome::Discarded) => break,
            Err(err) if loaded_pages > 0 => {
                warn!(
                    page = loaded_pages + 1,
                    error = %err,
                    "stopping list after a failed page"
                );
                break;
            }
            Err(err) => return Err(err),
        }
    }
    info!(pages = loaded_pages, items = pager.len(), "list loaded");

    Ok(match options.search.as_deref() {
        Some(search) => pager.filtered(search),
        None => pager.items(),
    })
}

pub async fn run_list(
    client: Arc<dyn ContentClient>,
    config: &IradaConfig,
    options: &ListOptions,
    use_color: bool,
) -> Result<(), CommandError> {
    let items = collect_list(client, config, options).await?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render::item_table(&items, chrono::Utc::now(), use_color));
    }
    Ok(())
}

pub async fn run_read(
    client: Arc<dyn ContentClient>,
    config: &IradaConfig,
    slug: &str,
    use_color: bool,
) -> Result<(), CommandError> {
    let reader = ArticleReader::new(client, config.similar);
    let article = reader.open(slug).await?;
    print!("{}", render::article(&article, use_color));
    Ok(())
}

pub async fn run_featured(client: &dyn ContentClient, use_color: bool) -> Result<(), CommandError> {
    let featured = FeaturedCarousel::load(client).await?;
    print!("{}", render::featured(&featured, use_color));
    Ok(())
}

pub async fn run_message(
    client: &dyn ContentClient,
    name: String,
    email: String,
    message: String,
    use_color: bool,
) -> Result<(), CommandError> {
    let form = ContactForm {
        name,
        email,
        message,
    };
    match irada_content::send_contact_message(client, &form).await {
        Ok(_) => {
            println!("{}", render::status_line(true, "Message sent", use_color));
            Ok(())
        }
        Err(SendError::Invalid(errors)) => {
            for error in errors.iter() {
                eprintln!("  {}: {}", error.field, error.message);
            }
            Err(SendError::Invalid(errors).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Prints the effective configuration as TOML with the API key masked.
pub fn print_config(config: &IradaConfig) -> Result<(), CommandError> {
    print!("{}", toml::to_string_pretty(&config.redacted())?);
    Ok(())
}
