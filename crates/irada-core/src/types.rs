// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by the content client and the content components.
//!
//! Field names follow the wire format of the blogs API (`_id`, `meta`,
//! `viewsCount`, ...) through serde renames so the same structs decode
//! responses directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Author reference attached to an [`Item`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl Author {
    /// Display name, falling back to "Anonymous".
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("Anonymous")
    }
}

/// A single blog-like content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub slug: String,

    #[serde(default)]
    pub title: String,

    /// Short summary text.
    #[serde(rename = "meta", alias = "summary", default, deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(rename = "viewsCount", default, deserialize_with = "null_as_default")]
    pub views: u64,

    #[serde(rename = "likesCount", default, deserialize_with = "null_as_default")]
    pub likes: u64,

    #[serde(alias = "createdAt")]
    pub published_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Banner image reference.
    #[serde(default)]
    pub banner: Option<String>,

    #[serde(default)]
    pub author: Option<Author>,

    /// HTML body. Usually absent from list responses.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl Item {
    /// The category, or `None` when it is absent or blank.
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// The update timestamp, only when it is strictly later than publication.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.updated_at.filter(|updated| *updated > self.published_at)
    }

    /// True when this item is `other` by identifier or by slug.
    pub fn same_as(&self, other: &Item) -> bool {
        self.id == other.id || self.slug == other.slug
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(rename = "totalBlogs", alias = "totalItems")]
    pub total_items: u64,
    pub limit: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            limit: 10,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

impl Pagination {
    /// Clamps page numbers to at least 1 and recomputes the navigation flags
    /// from them, so `has_next_page == (current_page < total_pages)` holds.
    pub fn normalized(self) -> Self {
        let current_page = self.current_page.max(1);
        let total_pages = self.total_pages.max(1);
        Self {
            current_page,
            total_pages,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
            ..self
        }
    }
}

/// One server-paginated batch of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub pagination: Pagination,
}

impl Page {
    pub fn new(items: Vec<Item>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination: pagination.normalized(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.pagination.has_next_page
    }
}

/// Request parameters for a page fetch.
///
/// Unset options are omitted from the request and left to server defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub category: Option<String>,
    /// Match items carrying any of these tags.
    pub tags_any: Vec<String>,
    pub limit: Option<u32>,
    /// Restrict to the featured collection.
    pub featured: bool,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            tags_any: Vec::new(),
            limit: None,
            featured: false,
        }
    }
}

impl PageQuery {
    /// Query for the first page with no filters.
    pub fn first() -> Self {
        Self::default()
    }

    /// Query for the featured collection.
    pub fn featured() -> Self {
        Self {
            featured: true,
            ..Self::default()
        }
    }

    /// Same filters, different page number.
    pub fn at_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags_any<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags_any = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A heading-derived navigation entry for one item's body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Anchor identifier, unique within one outline.
    pub id: String,
    /// Trimmed heading text.
    pub text: String,
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Source tag name, e.g. `h2`.
    pub tag_name: String,
}

/// Items judged related to a reference item, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarSet {
    pub reference_id: String,
    pub items: Vec<Item>,
}

impl SimilarSet {
    pub fn empty(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

/// A validated contact message ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "senderEmail")]
    pub sender_email: String,
    pub name: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item_json() -> serde_json::Value {
        serde_json::json!({
            "_id": "66a1",
            "slug": "hello-rust",
            "title": "Hello Rust",
            "meta": "A gentle start",
            "category": "Tech",
            "tags": ["rust", "intro"],
            "viewsCount": 1200,
            "likesCount": 7,
            "publishedAt": "2025-03-05T10:00:00Z",
            "updatedAt": "2025-03-06T10:00:00Z",
            "banner": "https://cdn.example.com/b.png",
            "author": {"username": "sohaib", "profileImageUrl": null},
            "content": "<h1>Hi</h1>"
        })
    }

    #[test]
    fn item_decodes_wire_field_names() {
        let item: Item = serde_json::from_value(item_json()).unwrap();
        assert_eq!(item.id, "66a1");
        assert_eq!(item.summary, "A gentle start");
        assert_eq!(item.category(), Some("Tech"));
        assert_eq!(item.tags, vec!["rust", "intro"]);
        assert_eq!(item.views, 1200);
        assert_eq!(item.likes, 7);
        assert_eq!(item.author.as_ref().unwrap().display_name(), "sohaib");
        assert!(item.last_updated().is_some());
    }

    #[test]
    fn item_tolerates_missing_and_null_optionals() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "id": "1",
            "slug": "s",
            "createdAt": "2025-01-01T00:00:00Z",
            "tags": null,
            "viewsCount": null
        }))
        .unwrap();
        assert!(item.tags.is_empty());
        assert_eq!(item.views, 0);
        assert_eq!(item.category(), None);
        assert!(item.content.is_empty());
        assert!(item.author.is_none());
    }

    #[test]
    fn blank_category_reads_as_none() {
        let mut item: Item = serde_json::from_value(item_json()).unwrap();
        item.category = Some("   ".into());
        assert_eq!(item.category(), None);
    }

    #[test]
    fn last_updated_ignores_timestamps_not_after_publication() {
        let mut item: Item = serde_json::from_value(item_json()).unwrap();
        item.updated_at = Some(item.published_at);
        assert_eq!(item.last_updated(), None);
    }

    #[test]
    fn pagination_defaults_match_single_empty_page() {
        let p: Pagination = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!(p.current_page, 1);
        assert_eq!(p.limit, 10);
        assert!(!p.has_next_page);
    }

    #[test]
    fn page_corrects_inconsistent_flags() {
        let page = Page::new(
            Vec::new(),
            Pagination {
                current_page: 2,
                total_pages: 3,
                has_next_page: false,
                ..Pagination::default()
            },
        );
        assert!(page.has_next());
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn contact_message_uses_sender_email_key() {
        let msg = ContactMessage {
            sender_email: "a@b.co".into(),
            name: "A".into(),
            message: "hello there".into(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["senderEmail"], "a@b.co");
    }

    #[test]
    fn page_query_builders_compose() {
        let q = PageQuery::first()
            .with_category("Tech")
            .with_tags_any(["ai", "rust"])
            .with_limit(20);
        let next = q.at_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(next.category.as_deref(), Some("Tech"));
        assert_eq!(next.tags_any, vec!["ai", "rust"]);
        assert!(PageQuery::featured().featured);
    }

    proptest! {
        #[test]
        fn normalized_pagination_keeps_has_next_invariant(current in 0u32..50, total in 0u32..50) {
            let p = Pagination { current_page: current, total_pages: total, ..Pagination::default() }.normalized();
            prop_assert!(p.current_page >= 1 && p.total_pages >= 1);
            prop_assert_eq!(p.has_next_page, p.current_page < p.total_pages);
        }
    }
}
