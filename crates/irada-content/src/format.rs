// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display helpers for counts, dates, and reading time.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: usize = 200;

static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Estimated minutes to read an HTML body, rounded up. Empty content is 0.
pub fn reading_minutes(html: &str) -> u32 {
    let text = TAGS.replace_all(html, " ");
    let words = text.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE)).unwrap_or(u32::MAX)
}

/// `1234` → `1.2K`, `2500000` → `2.5M`, smaller numbers unchanged.
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Coarse age of `then` as seen at `now`, e.g. `3h ago`.
///
/// Timestamps in the future read as `Just now`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - then).num_seconds().max(0);
    let (minute, hour, day) = (60, 3_600, 86_400);

    match secs {
        s if s < minute => "Just now".to_string(),
        s if s < hour => format!("{}m ago", s / minute),
        s if s < day => format!("{}h ago", s / hour),
        s if s < 30 * day => format!("{}d ago", s / day),
        s if s < 365 * day => format!("{}mo ago", s / (30 * day)),
        s => format!("{}y ago", s / (365 * day)),
    }
}

/// Long-form date such as `March 5, 2025`.
pub fn long_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// Shortens `text` to `max` characters, ending in `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}...")
}
