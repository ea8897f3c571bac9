//! Product Filter
//!
//! Search, category, price-bracket and sort state for a grid of product cards.
//! Everything here is plain data: the web frontend feeds UI events into
//! [`FilterController`] and renders whatever it reports back.

pub mod catalog;
pub mod controller;
pub mod count;
pub mod filter;
pub mod models;
pub mod price;
pub mod sort;

pub use catalog::{parse_catalog, CatalogEntry, CatalogError};
pub use controller::{FilterController, FilterIndicators};
pub use count::{ResultsCount, Tone};
pub use models::{Category, CategoryFilter, FilterState, Item, PriceRange, SortMode};
pub use price::{format_price, parse_price, PriceParseError};
