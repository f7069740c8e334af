// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table-of-contents extraction from HTML body content.
//!
//! Headings are visited in document order. Each one gets an anchor id: its own
//! `id` attribute when present, otherwise `heading-<slug>-<index>` where
//! `index` is its position among all headings. Headings without an id are
//! annotated by tree position, so repeated heading text cannot confuse the
//! assignment.

use html5ever::{QualName, local_name, namespace_url, ns};
use html5ever::tendril::StrTendril;
use irada_core::OutlineEntry;
use scraper::{Html, Node, Selector};
use tracing::debug;

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";

/// An outline and the content annotated with its anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    pub outline: Vec<OutlineEntry>,
    pub content: String,
}

impl TableOfContents {
    fn unchanged(html: &str) -> Self {
        Self {
            outline: Vec::new(),
            content: html.to_string(),
        }
    }
}

/// Lowercases `text` and collapses every run of characters outside
/// `[a-z0-9]` into one hyphen, with no leading or trailing hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Builds the outline of `html` and returns the content with an `id` on
/// every heading.
///
/// Content without headings comes back byte-for-byte unchanged, as does
/// content whose headings all carry ids already. Never fails.
pub fn extract(html: &str) -> TableOfContents {
    if html.trim().is_empty() {
        return TableOfContents::unchanged(html);
    }
    let Ok(selector) = Selector::parse(HEADINGS) else {
        return TableOfContents::unchanged(html);
    };

    let mut fragment = Html::parse_fragment(html);
    let mut outline = Vec::new();
    let mut pending = Vec::new();

    for (index, heading) in fragment.select(&selector).enumerate() {
        let tag_name = heading.value().name().to_string();
        let level = tag_name
            .strip_prefix('h')
            .and_then(|n| n.parse::<u8>().ok())
            .unwrap_or(1);
        let text = heading.text().collect::<String>().trim().to_string();

        let id = match heading.value().attr("id") {
            Some(existing) if !existing.is_empty() => existing.to_string(),
            _ => {
                let generated = format!("heading-{}-{index}", slugify(&text));
                pending.push((heading.id(), generated.clone()));
                generated
            }
        };

        outline.push(OutlineEntry {
            id,
            text,
            level,
            tag_name,
        });
    }

    if pending.is_empty() {
        return TableOfContents {
            outline,
            content: html.to_string(),
        };
    }

    let annotated = pending.len();
    for (node_id, id) in pending {
        if let Some(mut node) = fragment.tree.get_mut(node_id) {
            if let Node::Element(element) = node.value() {
                element.attrs.insert(
                    QualName::new(None, ns!(), local_name!("id")),
                    StrTendril::from_slice(&id),
                );
            }
        }
    }

    debug!(headings = outline.len(), annotated, "outline extracted");
    TableOfContents {
        outline,
        content: fragment.root_element().inner_html(),
    }
}
