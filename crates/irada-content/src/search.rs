// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-text filtering over items that are already loaded.

use irada_core::Item;

/// True when `query` occurs, ignoring case, in the title, summary, category,
/// or any tag of `item`. A blank query matches every item.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);

    hit(&item.title)
        || hit(&item.summary)
        || item.category.as_deref().is_some_and(hit)
        || item.tags.iter().any(|tag| hit(tag))
}
