//! Product Filter App
//!
//! Toolbar, results counter and the product grid.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{FilterToolbar, ProductGrid, ResultsCounter};
use crate::store::{use_shop_store, ShopState, ShopStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let (items, source) = catalog::load_catalog();
    web_sys::console::log_1(
        &format!("[APP] Loaded {} products from {}", items.len(), source.as_str()).into(),
    );

    provide_context(Store::new(ShopState::new(items, source)));
    let store = use_shop_store();

    view! {
        <div class="shop-layout">
            <h1>"Products"</h1>

            <FilterToolbar />

            <ResultsCounter />

            <ProductGrid />

            <p class="catalog-source">
                {move || format!("Source: {}", store.source().get().as_str())}
            </p>
        </div>
    }
}
