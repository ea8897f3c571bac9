//! Results Counter Component

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn ResultsCounter() -> impl IntoView {
    let store = use_shop_store();
    let results = move || store.controller().read().results();

    view! {
        <p
            id="resultsCount"
            class=move || format!("results-count {}", results().tone().css_class())
        >
            {move || results().text()}
        </p>
    }
}
