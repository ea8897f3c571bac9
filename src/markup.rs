//! Server-Rendered Cards
//!
//! Reads product cards that the page already contains so the app can take
//! over the grid.

use product_filter::Item;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

const CARD_SELECTOR: &str = ".product-card";
const STATIC_GRID_ID: &str = "productsGrid";

fn text_of(card: &Element, selector: &str) -> String {
    card.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn badges_of(card: &Element) -> Vec<String> {
    let Ok(nodes) = card.query_selector_all(".badge") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn image_of(card: &Element) -> Option<String> {
    card.query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.get_attribute("src"))
}

/// Card elements the app takes over: those inside `#productsGrid` when the
/// page has that grid, otherwise every `.product-card` in the document
fn card_elements(document: &Document) -> Result<Vec<Element>, String> {
    let nodes = match document.get_element_by_id(STATIC_GRID_ID) {
        Some(grid) => grid.query_selector_all(CARD_SELECTOR),
        None => document.query_selector_all(CARD_SELECTOR),
    }
    .map_err(|e| format!("{:?}", e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Build items from the page's product cards, in page order
pub fn read_cards(document: &Document) -> Result<Vec<Item>, String> {
    let cards = card_elements(document)?;
    let items = cards
        .iter()
        .enumerate()
        .map(|(id, card)| {
            Item::from_card_text(
                id as u32,
                &text_of(card, "h6"),
                &text_of(card, ".product-description"),
                badges_of(card),
                &text_of(card, ".product-price"),
            )
            .with_image(image_of(card))
        })
        .collect();
    Ok(items)
}

/// Take the static cards out of the page once read; the app renders its own.
///
/// Removes the whole `#productsGrid` when present, otherwise each card that
/// `read_cards` picked up, so no card is shown twice.
pub fn remove_static_cards(document: &Document) -> Result<(), String> {
    if let Some(grid) = document.get_element_by_id(STATIC_GRID_ID) {
        grid.remove();
        return Ok(());
    }
    for card in card_elements(document)? {
        card.remove();
    }
    Ok(())
}
