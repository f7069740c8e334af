// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Item and page fixtures.

use chrono::{DateTime, TimeZone, Utc};
use irada_core::{Author, Item, Page, Pagination};

/// Fixed publication time used by every fixture.
pub fn published() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// An item with slug `<id>-slug`, no category, and no tags.
pub fn item(id: &str) -> Item {
    Item {
        id: id.to_string(),
        slug: format!("{id}-slug"),
        title: format!("Title {id}"),
        summary: format!("Summary of {id}"),
        category: None,
        tags: Vec::new(),
        views: 0,
        likes: 0,
        published_at: published(),
        updated_at: None,
        banner: None,
        author: Some(Author {
            username: Some("writer".to_string()),
            profile_image_url: None,
        }),
        content: String::new(),
    }
}

/// An item in `category` carrying `tags`.
pub fn item_in(id: &str, category: &str, tags: &[&str]) -> Item {
    Item {
        category: Some(category.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..item(id)
    }
}

/// Items `<prefix>-1` through `<prefix>-<count>`.
pub fn items(prefix: &str, count: usize) -> Vec<Item> {
    (1..=count).map(|n| item(&format!("{prefix}-{n}"))).collect()
}

/// A page holding `items` at `current` of `total` pages.
pub fn page_of(items: Vec<Item>, current: u32, total: u32) -> Page {
    let limit = u32::try_from(items.len()).unwrap_or(u32::MAX).max(1);
    Page::new(
        items,
        Pagination {
            current_page: current,
            total_pages: total,
            total_items: u64::from(limit) * u64::from(total),
            limit,
            ..Pagination::default()
        },
    )
}
