//! Catalog Loading
//!
//! Picks where the product list comes from at startup.

use product_filter::{parse_catalog, Item};

use crate::markup;

/// Demo products bundled with the app
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Cards already rendered in the page
    Markup,
    Bundled,
    Empty,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSource::Markup => "page markup",
            CatalogSource::Bundled => "bundled catalog",
            CatalogSource::Empty => "nothing",
        }
    }
}

pub fn bundled_catalog() -> Result<Vec<Item>, String> {
    parse_catalog(BUNDLED_CATALOG).map_err(|e| e.to_string())
}

/// Read cards from the page, falling back to the bundled catalog
pub fn load_catalog() -> (Vec<Item>, CatalogSource) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        match markup::read_cards(&document) {
            Ok(items) if !items.is_empty() => {
                if let Err(e) = markup::remove_static_cards(&document) {
                    web_sys::console::error_1(&format!("[CATALOG] Removing page cards failed: {}", e).into());
                }
                return (items, CatalogSource::Markup);
            }
            Ok(_) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("[CATALOG] Reading page cards failed: {}", e).into());
            }
        }
    }

    match bundled_catalog() {
        Ok(items) => (items, CatalogSource::Bundled),
        Err(e) => {
            web_sys::console::error_1(&format!("[CATALOG] Bundled catalog unusable: {}", e).into());
            (Vec::new(), CatalogSource::Empty)
        }
    }
}
