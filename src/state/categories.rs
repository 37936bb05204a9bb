//! Category cache shared across feed chips, post cards, and composers.
//!
//! Fetched once per session and kept in a context signal so every card can
//! resolve a category key to its label/color without refetching. An empty
//! fetch result never clobbers a previously populated cache; transient
//! backend hiccups would otherwise blank every chip in view.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::CategoryInfo;

#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<CategoryInfo>,
    pub loaded: bool,
}

impl CategoriesState {
    /// Replace the cache unless the fetch came back empty.
    pub fn fill(&mut self, items: Vec<CategoryInfo>) {
        if !items.is_empty() {
            self.items = items;
        }
        self.loaded = true;
    }

    #[must_use]
    pub fn label_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(|c| c.label.as_str())
    }

    #[must_use]
    pub fn color_for(&self, name: &str) -> Option<&str> {
        self.find(name).map(|c| c.color.as_str())
    }

    fn find(&self, name: &str) -> Option<&CategoryInfo> {
        self.items.iter().find(|c| c.name == name)
    }
}
