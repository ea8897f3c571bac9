//! UI Components
//!
//! Leptos components for the filter toolbar and the product grid.

mod search_bar;
mod filter_select;
mod filter_toolbar;
mod product_card;
mod product_grid;
mod results_counter;

pub use search_bar::SearchBar;
pub use filter_select::{FilterSelect, CATEGORY_OPTIONS, PRICE_OPTIONS, SORT_OPTIONS};
pub use filter_toolbar::FilterToolbar;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use results_counter::ResultsCounter;
