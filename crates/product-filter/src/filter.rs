//! Filter Predicates
//!
//! Search, category and price checks applied to each card in turn.

use crate::models::{FilterState, Item};

/// Case-insensitive match of the search term against name and description.
///
/// `term_lower` must already be lowercased.
pub fn matches_search(item: &Item, term_lower: &str) -> bool {
    term_lower.is_empty()
        || item.name.to_lowercase().contains(term_lower)
        || item.description.to_lowercase().contains(term_lower)
}

pub fn matches_category(item: &Item, filters: &FilterState) -> bool {
    match filters.category.category() {
        None => true,
        Some(category) => item.has_category(category),
    }
}

pub fn matches_price(item: &Item, filters: &FilterState) -> bool {
    filters.price_range.contains(item.price)
}

/// Run the predicates in order: search, then category, then price.
pub fn passes_filters(item: &Item, filters: &FilterState, term_lower: &str) -> bool {
    matches_search(item, term_lower)
        && matches_category(item, filters)
        && matches_price(item, filters)
}
