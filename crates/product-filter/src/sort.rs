//! Sort Comparators
//!
//! Orders the visible cards for the non-default sort modes.

use std::cmp::Ordering;

use crate::models::{Item, SortMode};

/// Fold a name for comparison: lowercase with common Latin accents removed
fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => key.push('a'),
            'ç' => key.push('c'),
            'è' | 'é' | 'ê' | 'ë' => key.push('e'),
            'ì' | 'í' | 'î' | 'ï' => key.push('i'),
            'ñ' => key.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => key.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => key.push('u'),
            'ý' | 'ÿ' => key.push('y'),
            'æ' => key.push_str("ae"),
            'œ' => key.push_str("oe"),
            other => key.push(other),
        }
    }
    key
}

/// Locale-style name ordering: accents and case only break ties
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Numeric price ordering. Unpriced items go last in both directions.
pub fn compare_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.total_cmp(&b);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of item indices for `mode`.
///
/// Returns false and leaves `indices` untouched for [`SortMode::Default`].
pub fn sort_indices(items: &[Item], indices: &mut [usize], mode: SortMode) -> bool {
    match mode {
        SortMode::Default => return false,
        SortMode::NameAsc => {
            indices.sort_by(|&a, &b| compare_names(&items[a].name, &items[b].name))
        }
        SortMode::NameDesc => {
            indices.sort_by(|&a, &b| compare_names(&items[b].name, &items[a].name))
        }
        SortMode::PriceAsc => {
            indices.sort_by(|&a, &b| compare_prices(items[a].price, items[b].price, false))
        }
        SortMode::PriceDesc => {
            indices.sort_by(|&a, &b| compare_prices(items[a].price, items[b].price, true))
        }
    }
    true
}
