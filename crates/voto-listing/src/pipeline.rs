//! Filter/Sort Pipeline
//!
//! Turns the raw item list plus the current query into the ordered view:
//! search filter, category filter, then a stable sort with bookmarked
//! items pinned to the front.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::bookmarks::BookmarkSet;
use crate::date;
use crate::item::Listable;
use crate::sort::{SortDirection, SortField, SortOption};

/// Filter state held by the list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Already-debounced search text
    pub search: String,
    /// Selected categories, empty means no category filter
    pub categories: BTreeSet<String>,
    pub sort: SortOption,
}

impl ListQuery {
    pub fn new(search: &str, sort: SortOption) -> Self {
        Self {
            search: search.to_string(),
            categories: BTreeSet::new(),
            sort,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// Case-insensitive substring match on any search field
pub fn matches_search<T: Listable>(item: &T, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// OR-filter across the selected categories
pub fn matches_category<T: Listable>(item: &T, categories: &BTreeSet<String>) -> bool {
    categories.is_empty() || categories.contains(item.group())
}

/// Lower-cased name with accents stripped, so "Ángel" files under "a"
pub fn name_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent-insensitive name order; names equal after folding fall back to
/// the lower-cased original
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a)
        .cmp(&name_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

/// Ordering between two items under a sort option, ignoring bookmarks
pub fn compare_by<T: Listable>(a: &T, b: &T, sort: SortOption) -> Ordering {
    let ordering = match sort.field() {
        SortField::Name => compare_names(a.sort_name(), b.sort_name()),
        // Invalid dates sit at -inf for both directions; the flip below
        // moves them to the end under desc.
        SortField::Date => date::sort_key(a.date()).cmp(&date::sort_key(b.date())),
    };
    match sort.direction() {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Full ordering: bookmarked items first, then `compare_by`
pub fn compare_pinned<T: Listable>(a: &T, b: &T, sort: SortOption, bookmarks: &BookmarkSet) -> Ordering {
    let a_pinned = bookmarks.contains(&a.id());
    let b_pinned = bookmarks.contains(&b.id());
    b_pinned
        .cmp(&a_pinned)
        .then_with(|| compare_by(a, b, sort))
}

/// Run the whole pipeline, returning a new ordered list
pub fn apply<T: Listable>(items: &[T], query: &ListQuery, bookmarks: &BookmarkSet) -> Vec<T> {
    let needle = query.search.to_lowercase();

    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| matches_search(*item, &needle))
        .filter(|item| matches_category(*item, &query.categories))
        .cloned()
        .collect();

    // sort_by is stable, equal keys keep their input order
    filtered.sort_by(|a, b| compare_pinned(a, b, query.sort, bookmarks));
    filtered
}
