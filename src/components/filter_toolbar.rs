//! Filter Toolbar Component
//!
//! Search bar, the three filter selects and the reset button.

use leptos::prelude::*;

use super::{FilterSelect, SearchBar, CATEGORY_OPTIONS, PRICE_OPTIONS, SORT_OPTIONS};
use crate::store::{
    store_category_change, store_price_change, store_reset, store_sort_change, use_shop_store,
    ShopStateStoreFields,
};

#[component]
pub fn FilterToolbar() -> impl IntoView {
    let store = use_shop_store();

    let category = Signal::derive(move || store.controller().read().filters().category.as_str());
    let price = Signal::derive(move || store.controller().read().filters().price_range.as_str());
    let sort = Signal::derive(move || store.controller().read().sort_mode().as_str());

    let category_active = Signal::derive(move || store.controller().read().indicators().category);
    let price_active = Signal::derive(move || store.controller().read().indicators().price);
    let sort_active = Signal::derive(move || store.controller().read().indicators().sort);

    view! {
        <div class="filter-toolbar">
            <SearchBar />
            <FilterSelect
                id="categoryFilter"
                options=CATEGORY_OPTIONS
                value=category
                active=category_active
                on_change=move |v: String| store_category_change(&store, v)
            />
            <FilterSelect
                id="priceFilter"
                options=PRICE_OPTIONS
                value=price
                active=price_active
                on_change=move |v: String| store_price_change(&store, v)
            />
            <FilterSelect
                id="sortFilter"
                options=SORT_OPTIONS
                value=sort
                active=sort_active
                on_change=move |v: String| store_sort_change(&store, v)
            />
            <button
                id="resetFilters"
                type="button"
                class="reset-btn"
                on:click=move |_| {
                    web_sys::console::log_1(&"[FILTER] Reset all filters".into());
                    store_reset(&store);
                }
            >
                "Reset"
            </button>
        </div>
    }
}
