//! Feed state for the post grid: filter, sort, and accumulated pages.
//!
//! DESIGN
//! ======
//! Changing the category filter or sort resets to page zero and replaces the
//! list; the infinite-scroll sentinel appends the next page. Appends
//! deduplicate by post id so a page boundary shifted by concurrent inserts
//! cannot double-render a post.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::types::{Page, Post};

/// Number of posts requested per feed page.
pub const FEED_PAGE_SIZE: i32 = 12;

/// Sort orders offered by the feed's selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Latest,
    Popular,
    Views,
}

impl SortOrder {
    /// Query-parameter value understood by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Views => "views",
        }
    }

    #[must_use]
    pub fn from_str(value: &str) -> Self {
        match value {
            "popular" => Self::Popular,
            "views" => Self::Views,
            _ => Self::Latest,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Newest",
            Self::Popular => "Most liked",
            Self::Views => "Most viewed",
        }
    }

    pub const ALL: [Self; 3] = [Self::Latest, Self::Popular, Self::Views];
}

/// Accumulated feed state shared by the feed page and its controls.
#[derive(Clone, Debug)]
pub struct FeedState {
    pub posts: Vec<Post>,
    /// Category name key, `None` for the all-posts view.
    pub category: Option<String>,
    pub sort: SortOrder,
    /// Zero-based index of the most recently applied page.
    pub page: i32,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            category: None,
            sort: SortOrder::Latest,
            page: 0,
            has_more: true,
            loading: false,
            error: None,
        }
    }
}

impl FeedState {
    /// Clear accumulated pages ahead of a filter/sort change.
    pub fn reset(&mut self) {
        self.posts.clear();
        self.page = 0;
        self.has_more = true;
        self.error = None;
    }

    /// Apply a fetched page. `append` distinguishes infinite-scroll loads
    /// from a fresh first page.
    pub fn apply_page(&mut self, page: Page<Post>, append: bool) {
        if append {
            for post in page.content {
                if !self.posts.iter().any(|existing| existing.id == post.id) {
                    self.posts.push(post);
                }
            }
        } else {
            self.posts = page.content;
        }
        self.page = page.number;
        self.has_more = !page.last;
        self.loading = false;
        self.error = None;
    }

    /// Patch a single post in place after a like/bookmark/status call.
    pub fn patch_post(&mut self, updated: &Post) {
        if let Some(existing) = self.posts.iter_mut().find(|p| p.id == updated.id) {
            *existing = updated.clone();
        }
    }
}
