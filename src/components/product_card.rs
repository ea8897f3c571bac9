//! Product Card Component

use leptos::prelude::*;
use product_filter::Item;

use crate::store::{use_shop_store, ShopStateStoreFields};

/// One card; gets `hidden-filter` while filtered out
#[component]
pub fn ProductCard(item: Item) -> impl IntoView {
    let store = use_shop_store();
    let id = item.id;
    let hidden = move || !store.controller().read().is_visible(id);

    let price = item.price_label();
    let name = item.name;
    let alt = name.clone();

    view! {
        <div class="product-col">
            <div class="product-card" class:hidden-filter=hidden>
                {item.image.map(|src| view! {
                    <img class="thumbnail" src=format!("images/{}", src) alt=alt />
                })}
                <h6>{name}</h6>
                <p class="product-description">{item.description}</p>
                <div class="badges">
                    {item.badges.into_iter().map(|badge| view! {
                        <span class="badge">{badge}</span>
                    }).collect_view()}
                </div>
                <h4 class="product-price">{price}</h4>
            </div>
        </div>
    }
}
