//! Product Grid Component
//!
//! Keyed list of cards in grid order. A sort pass moves the visible cards
//! to the end of the grid; filtering alone never reorders.

use leptos::prelude::*;
use product_filter::Item;

use super::ProductCard;
use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_shop_store();

    let cards = move || {
        store
            .controller()
            .read()
            .grid_items()
            .cloned()
            .collect::<Vec<Item>>()
    };

    view! {
        <div id="productsGrid" class="products-grid">
            <For
                each=cards
                key=|item| item.id
                children=move |item| view! { <ProductCard item=item /> }
            />
        </div>
    }
}
