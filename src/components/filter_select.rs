//! Filter Select Component
//!
//! Select control shared by the category, price and sort filters.

use leptos::prelude::*;

/// Category options
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("all", "All categories"),
    ("digital", "Digital"),
    ("physical", "Physical"),
];

/// Price bracket options
pub const PRICE_OPTIONS: &[(&str, &str)] = &[
    ("all", "All prices"),
    ("low", "Under $20"),
    ("medium", "$20 - $50"),
    ("high", "Over $50"),
];

/// Sort options
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("default", "Default order"),
    ("name-asc", "Name (A-Z)"),
    ("name-desc", "Name (Z-A)"),
    ("price-asc", "Price (low to high)"),
    ("price-desc", "Price (high to low)"),
];

/// Select bound to one filter value
///
/// `active` adds the `active` class when the value is not the neutral default.
#[component]
pub fn FilterSelect(
    id: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: Signal<&'static str>,
    active: Signal<bool>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="filter-select"
            class:active=move || active.get()
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {options.iter().map(|(option_value, label)| {
                view! {
                    <option value=*option_value selected=move || value.get() == *option_value>
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
