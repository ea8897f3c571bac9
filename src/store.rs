//! Global Shop State Store
//!
//! Uses Leptos reactive_stores; every UI event is forwarded to the
//! FilterController through the helpers below.

use leptos::prelude::*;
use product_filter::{FilterController, Item};
use reactive_stores::Store;

use crate::catalog::CatalogSource;

#[derive(Clone, Debug, Store)]
pub struct ShopState {
    /// Filter, sort and grid state for the products on the page
    pub controller: FilterController,
    /// Where the products were read from
    pub source: CatalogSource,
}

impl ShopState {
    pub fn new(items: Vec<Item>, source: CatalogSource) -> Self {
        Self {
            controller: FilterController::new(items),
            source,
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_search_input(store: &ShopStore, text: String) {
    store.controller().write().on_search_input(&text);
}

pub fn store_clear_search(store: &ShopStore) {
    store.controller().write().on_clear_search();
}

pub fn store_category_change(store: &ShopStore, value: String) {
    store.controller().write().on_category_change(&value);
}

pub fn store_price_change(store: &ShopStore, value: String) {
    store.controller().write().on_price_change(&value);
}

pub fn store_sort_change(store: &ShopStore, value: String) {
    store.controller().write().on_sort_change(&value);
}

pub fn store_reset(store: &ShopStore) {
    store.controller().write().on_reset();
}
