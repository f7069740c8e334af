// SPDX-FileCopyrightText: 2026 Irada Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slide cursor for the featured-items carousel.
//!
//! The carousel owns no timers. Callers drive [`Carousel::tick`] every
//! [`AUTO_ADVANCE`] and forward pointer gestures.

use std::time::Duration;

use irada_core::{ContentClient, IradaError, Item, PageQuery};
use tracing::debug;

/// Interval between automatic advances.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Minimum horizontal travel, in pixels, for a gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
    interacting: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`. Out-of-range indices are ignored; returns whether
    /// the jump happened.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Pauses auto-advance until the gesture ends.
    pub fn begin_interaction(&mut self) {
        self.interacting = true;
    }

    /// Ends a gesture that started at `start_x` and ended at `end_x`.
    ///
    /// Moving left by more than [`SWIPE_THRESHOLD`] advances; moving right
    /// goes back.
    pub fn end_swipe(&mut self, start_x: f32, end_x: f32) -> Swipe {
        self.interacting = false;
        let delta = start_x - end_x;
        let swipe = if delta > SWIPE_THRESHOLD {
            self.next();
            Swipe::Next
        } else if delta < -SWIPE_THRESHOLD {
            self.prev();
            Swipe::Prev
        } else {
            Swipe::None
        };
        debug!(?swipe, index = self.index, "swipe ended");
        swipe
    }

    /// Auto-advance step. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if self.interacting || self.len <= 1 {
            return false;
        }
        self.next();
        true
    }
}

/// Featured items with a slide cursor over them.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedCarousel {
    pub items: Vec<Item>,
    pub slides: Carousel,
}

impl FeaturedCarousel {
    /// Fetches the featured collection.
    pub async fn load(client: &dyn ContentClient) -> Result<Self, IradaError> {
        let page = client.fetch_page(&PageQuery::featured()).await?;
        debug!(featured = page.items.len(), "featured items loaded");
        Ok(Self {
            slides: Carousel::new(page.items.len()),
            items: page.items,
        })
    }

    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.slides.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irada_test_utils::MockContentClient;
    use irada_test_utils::fixtures::items;

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
        assert!(!c.go_to(0));
        assert!(!c.tick());
        assert!(c.is_empty());
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        assert!(c.go_to(3));
        assert!(!c.go_to(4));
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn swipes_respect_threshold() {
        let mut c = Carousel::new(3);
        c.begin_interaction();
        assert!(c.is_interacting());
        assert_eq!(c.end_swipe(200.0, 150.0), Swipe::None);
        assert!(!c.is_interacting());
        assert_eq!(c.end_swipe(200.0, 100.0), Swipe::Next);
        assert_eq!(c.index(), 1);
        assert_eq!(c.end_swipe(100.0, 200.0), Swipe::Prev);
        assert_eq!(c.index(), 0);
        assert_eq!(c.end_swipe(100.0, 160.0), Swipe::None);
    }

    #[test]
    fn tick_pauses_while_interacting_and_on_single_slide() {
        let mut c = Carousel::new(2);
        c.begin_interaction();
        assert!(!c.tick());
        assert_eq!(c.index(), 0);
        c.end_swipe(0.0, 0.0);
        assert!(c.tick());
        assert_eq!(c.index(), 1);

        let mut single = Carousel::new(1);
        assert!(!single.tick());
    }

    #[tokio::test]
    async fn featured_carousel_loads_featured_items() {
        let client = MockContentClient::new()
            .with_items(items("p", 4))
            .with_featured(["p-2", "p-4"]);
        let mut featured = FeaturedCarousel::load(&client).await.unwrap();
        assert_eq!(featured.slides.len(), 2);
        assert_eq!(featured.current().map(|i| i.id.as_str()), Some("p-2"));
        featured.slides.tick();
        assert_eq!(featured.current().map(|i| i.id.as_str()), Some("p-4"));
        assert!(client.page_calls()[0].featured);
    }
}
