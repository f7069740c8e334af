// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering for items, articles, and the featured carousel.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use colored::Colorize;
use irada_content::format::{compact_count, long_date, relative_time, truncate};
use irada_content::{Article, FeaturedCarousel};
use irada_core::Item;

const TITLE_WIDTH: usize = 48;

/// `[OK] text` / `[FAIL] text`, or a colored check mark.
pub fn status_line(ok: bool, text: &str, use_color: bool) -> String {
    match (ok, use_color) {
        (true, true) => format!("{} {}", "✓".green(), text.green()),
        (false, true) => format!("{} {}", "✗".red(), text.red()),
        (true, false) => format!("[OK] {text}"),
        (false, false) => format!("[FAIL] {text}"),
    }
}

fn heading(text: &str, use_color: bool) -> String {
    if use_color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// One line per item: title, category, views, likes, age.
pub fn item_table(items: &[Item], now: DateTime<Utc>, use_color: bool) -> String {
    let mut out = String::new();
    if items.is_empty() {
        out.push_str("  No blogs found.\n");
        return out;
    }
    for item in items {
        let title = truncate(&item.title, TITLE_WIDTH);
        let _ = writeln!(
            out,
            "  {:<width$}  {:<12}  {:>6} views  {:>5} likes  {}",
            heading(&title, use_color),
            item.category().unwrap_or("-"),
            compact_count(item.views),
            compact_count(item.likes),
            relative_time(item.published_at, now),
            width = TITLE_WIDTH,
        );
    }
    out
}

/// Article header, outline, and related posts.
pub fn article(article: &Article, use_color: bool) -> String {
    let item = &article.item;
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", heading(&item.title, use_color));
    let _ = writeln!(out, "  {}", "-".repeat(35));

    let author = item.author.as_ref().map_or("Anonymous", |a| a.display_name());
    let _ = writeln!(out, "    By:        {author}");
    let _ = writeln!(out, "    Published: {}", long_date(item.published_at));
    if let Some(updated) = item.last_updated() {
        let _ = writeln!(out, "    Updated:   {}", long_date(updated));
    }
    if let Some(category) = item.category() {
        let _ = writeln!(out, "    Category:  {category}");
    }
    if !item.tags.is_empty() {
        let _ = writeln!(out, "    Tags:      {}", item.tags.join(", "));
    }
    let _ = writeln!(out, "    Reading:   {} min", article.reading_minutes);

    if !article.outline.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", heading("Contents", use_color));
        for entry in &article.outline {
            let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
            let _ = writeln!(out, "    {indent}{} (#{})", entry.text, entry.id);
        }
    }

    if !article.similar.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", heading("Similar posts", use_color));
        for similar in article.similar.iter() {
            let _ = writeln!(out, "    - {} ({})", similar.title, similar.slug);
        }
    }
    let _ = writeln!(out);
    out
}

/// Featured items with the current slide marked.
pub fn featured(featured: &FeaturedCarousel, use_color: bool) -> String {
    let mut out = String::new();
    if featured.items.is_empty() {
        out.push_str("  No featured blogs.\n");
        return out;
    }
    for (index, item) in featured.items.iter().enumerate() {
        let marker = if index == featured.slides.index() { ">" } else { " " };
        let _ = writeln!(
            out,
            "  {marker} {}/{}  {}",
            index + 1,
            featured.items.len(),
            heading(&item.title, use_color)
        );
        let _ = writeln!(out, "        {}", truncate(&item.summary, 80));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use irada_content::Carousel;
    use irada_core::{OutlineEntry, SimilarSet};
    use irada_test_utils::fixtures::{item_in, published};

    #[test]
    fn plain_status_lines() {
        assert_eq!(status_line(true, "Message sent", false), "[OK] Message sent");
        assert_eq!(status_line(false, "nope", false), "[FAIL] nope");
    }

    #[test]
    fn item_table_shows_counts_and_age() {
        let mut it = item_in("a", "Tech", &[]);
        it.views = 12_400;
        let table = item_table(&[it], published() + Duration::hours(2), false);
        assert!(table.contains("Title a"));
        assert!(table.contains("Tech"));
        assert!(table.contains("12.4K views"));
        assert!(table.contains("2h ago"));
        assert_eq!(item_table(&[], published(), false), "  No blogs found.\n");
    }

    #[test]
    fn article_lists_outline_and_similar() {
        let mut item = item_in("a", "Tech", &["rust"]);
        item.updated_at = Some(published() + Duration::days(3));
        let opened = Article {
            item,
            outline: vec![OutlineEntry {
                id: "heading-intro-0".into(),
                text: "Intro".into(),
                level: 2,
                tag_name: "h2".into(),
            }],
            content: String::new(),
            reading_minutes: 4,
            similar: SimilarSet {
                reference_id: "a".into(),
                items: vec![item_in("b", "Tech", &[])],
            },
        };

        let text = article(&opened, false);
        assert!(text.contains("By:        writer"));
        assert!(text.contains("Published: March 5, 2025"));
        assert!(text.contains("Updated:   March 8, 2025"));
        assert!(text.contains("Reading:   4 min"));
        assert!(text.contains("  Intro (#heading-intro-0)"));
        assert!(text.contains("- Title b (b-slug)"));
    }

    #[test]
    fn featured_marks_current_slide() {
        let mut slides = Carousel::new(2);
        slides.next();
        let carousel = FeaturedCarousel {
            items: vec![item_in("a", "Tech", &[]), item_in("b", "Life", &[])],
            slides,
        };
        let text = featured(&carousel, false);
        assert!(text.contains("  1/2  Title a"));
        assert!(text.contains("> 2/2  Title b"));
    }
}
