//! Category and search filtering over a palette list.
//!
//! Both predicates are independent, so applying them in either order (or
//! one after the other in separate passes) gives the same result.

use crate::model::Palette;
use std::collections::BTreeSet;

/// Category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Exactly `"all"`, or blank, means no category filter. Anything else is
    /// a category compared verbatim, so a real category called `All` stays
    /// selectable.
    pub fn parse(s: &str) -> Self {
        if s.trim().is_empty() || s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }

    pub fn matches(&self, palette: &Palette) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => palette.category == *category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    pub fn matches(&self, palette: &Palette) -> bool {
        self.category.matches(palette) && matches_search(palette, &self.search.trim().to_lowercase())
    }
}

/// Case-insensitive substring match against the name or any tag.
/// `needle` must already be trimmed and lowercased.
fn matches_search(palette: &Palette, needle: &str) -> bool {
    needle.is_empty()
        || palette.name.to_lowercase().contains(needle)
        || palette
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Palettes matching `criteria`, in their original relative order.
pub fn filter<'a, I>(ramps: I, criteria: &FilterCriteria) -> Vec<&'a Palette>
where
    I: IntoIterator<Item = &'a Palette>,
{
    let needle = criteria.search.trim().to_lowercase();
    ramps
        .into_iter()
        .filter(|p| criteria.category.matches(p))
        .filter(|p| matches_search(p, &needle))
        .collect()
}

/// Distinct categories, sorted.
pub fn categories(ramps: &[Palette]) -> Vec<String> {
    ramps
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
