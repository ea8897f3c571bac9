//! Search Bar Component
//!
//! Text search over product names and descriptions, with a clear button.

use leptos::prelude::*;

use crate::store::{store_clear_search, store_search_input, use_shop_store, ShopStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_shop_store();

    let search_term = move || store.controller().read().filters().search_term.clone();
    let clear_active = move || store.controller().read().clear_active();

    view! {
        <div class="search-box">
            <input
                id="searchInput"
                type="text"
                placeholder="Search products..."
                autocomplete="off"
                prop:value=search_term
                on:input=move |ev| store_search_input(&store, event_target_value(&ev))
            />
            <button
                id="clearSearch"
                type="button"
                class="clear-search"
                class:active=clear_active
                on:click=move |_| store_clear_search(&store)
            >
                "×"
            </button>
        </div>
    }
}
