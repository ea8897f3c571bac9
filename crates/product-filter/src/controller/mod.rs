//! Filter Controller
//!
//! Owns the filter and sort selections for a fixed set of products and
//! recomputes visibility, grid order and the results label on every event.

mod tests;

use crate::count::ResultsCount;
use crate::filter::passes_filters;
use crate::models::{CategoryFilter, FilterState, Item, PriceRange, SortMode};
use crate::sort::sort_indices;

/// Which controls show the `active` marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterIndicators {
    pub category: bool,
    pub price: bool,
    pub sort: bool,
}

#[derive(Debug, Clone)]
pub struct FilterController {
    /// Products in page order; never grows or shrinks
    items: Vec<Item>,
    filters: FilterState,
    sort: SortMode,
    /// Parallel to `items`
    visible: Vec<bool>,
    /// Indices into `items` in the order the grid shows them
    grid_order: Vec<usize>,
    /// Indices of visible items, sorted when a sort mode is set
    visible_subset: Vec<usize>,
    results: ResultsCount,
    clear_active: bool,
    indicators: FilterIndicators,
}

impl FilterController {
    pub fn new(items: Vec<Item>) -> Self {
        let count = items.len();
        let mut controller = Self {
            items,
            filters: FilterState::default(),
            sort: SortMode::Default,
            visible: vec![true; count],
            grid_order: (0..count).collect(),
            visible_subset: (0..count).collect(),
            results: ResultsCount::All(count),
            clear_active: false,
            indicators: FilterIndicators::default(),
        };
        controller.apply_filters();
        controller
    }

    // ========================
    // Event Handlers
    // ========================

    pub fn on_search_input(&mut self, text: &str) {
        self.filters.search_term = text.to_string();
        self.clear_active = !text.is_empty();
        self.apply_filters();
    }

    pub fn on_clear_search(&mut self) {
        self.filters.search_term.clear();
        self.clear_active = false;
        self.apply_filters();
    }

    pub fn on_category_change(&mut self, value: &str) {
        self.filters.category = CategoryFilter::from_value(value).unwrap_or_else(|| {
            log::warn!("unknown category '{}', showing all", value);
            CategoryFilter::All
        });
        self.apply_filters();
        self.update_indicators();
    }

    pub fn on_price_change(&mut self, value: &str) {
        self.filters.price_range = PriceRange::from_value(value).unwrap_or_else(|| {
            log::warn!("unknown price range '{}', showing all", value);
            PriceRange::All
        });
        self.apply_filters();
        self.update_indicators();
    }

    pub fn on_sort_change(&mut self, value: &str) {
        self.sort = SortMode::from_value(value).unwrap_or_else(|| {
            log::warn!("unknown sort '{}', keeping grid order", value);
            SortMode::Default
        });
        self.apply_filters();
        self.update_indicators();
    }

    pub fn on_reset(&mut self) {
        self.filters = FilterState::default();
        self.clear_active = false;
        self.sort = SortMode::Default;
        self.update_indicators();
        self.apply_filters();
    }

    // ========================
    // Pipeline
    // ========================

    /// Filter, sort and reorder in one pass.
    ///
    /// With a sort set, visible cards are re-appended to the end of the grid
    /// in sorted order; hidden cards keep their relative order in front.
    fn apply_filters(&mut self) {
        let term_lower = self.filters.search_term.to_lowercase();

        let mut subset = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let visible = passes_filters(item, &self.filters, &term_lower);
            self.visible[index] = visible;
            if visible {
                subset.push(index);
            }
        }

        let sorted = sort_indices(&self.items, &mut subset, self.sort);
        if sorted {
            let visible = &self.visible;
            self.grid_order.retain(|&index| !visible[index]);
            self.grid_order.extend_from_slice(&subset);
        }

        self.results = ResultsCount::from_counts(subset.len(), self.items.len());
        log::debug!(
            "filter pass: {}/{} visible, sort={}, reordered={}",
            subset.len(),
            self.items.len(),
            self.sort.as_str(),
            sorted
        );
        self.visible_subset = subset;
    }

    fn update_indicators(&mut self) {
        self.indicators = FilterIndicators {
            category: self.filters.category != CategoryFilter::All,
            price: self.filters.price_range != PriceRange::All,
            sort: self.sort != SortMode::Default,
        };
    }

    // ========================
    // Accessors
    // ========================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn is_visible(&self, id: u32) -> bool {
        self.items
            .iter()
            .position(|item| item.id == id)
            .map(|index| self.visible[index])
            .unwrap_or(false)
    }

    /// Visible items, in sorted order or page order for the default sort
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.visible_subset.iter().map(|&index| &self.items[index])
    }

    /// All items, hidden included, in grid order
    pub fn grid_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.grid_order.iter().map(|&index| &self.items[index])
    }

    pub fn visible_count(&self) -> usize {
        self.visible_subset.len()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn results(&self) -> ResultsCount {
        self.results
    }

    /// Clear-search button marker
    pub fn clear_active(&self) -> bool {
        self.clear_active
    }

    pub fn indicators(&self) -> FilterIndicators {
        self.indicators
    }
}
