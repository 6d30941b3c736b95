//! The fixed category list and category filtering.

use crate::item::Item;

/// Query-time sentinel that matches every item. Never stored as a category.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the UI, sentinel first.
pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Food", "Soda", "Liquor", "Wine", "Beer"];

/// Categories an item can be filed under (the list without the sentinel).
pub fn stock_categories() -> &'static [&'static str] {
    &CATEGORIES[1..]
}

/// Listing filter derived from a category path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(name.to_string())
        }
    }

    /// Label used to highlight the current category in navigation.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(name) => name,
        }
    }

    /// Exact, case-sensitive match on the stored category.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => item.category == *name,
        }
    }
}
