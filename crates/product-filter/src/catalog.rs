//! Catalog Data
//!
//! JSON product list used when the page ships no rendered cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, Item};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("product '{0}' has an invalid price")]
    InvalidPrice(String),
}

/// One product as stored in catalog JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub price: f64,
    pub digital: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn into_item(self, id: u32) -> Result<Item, CatalogError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::InvalidPrice(self.name));
        }
        let category = if self.digital {
            Category::Digital
        } else {
            Category::Physical
        };
        Ok(Item::new(id, &self.name, &self.description, category, self.price).with_image(self.image))
    }
}

/// Parse catalog JSON into items, numbered in file order.
///
/// The document must be a JSON array. Entries that are malformed or carry an
/// invalid price are skipped with a warning; the rest keep consecutive ids.
pub fn parse_catalog(json: &str) -> Result<Vec<Item>, CatalogError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut items = Vec::with_capacity(entries.len());
    for (position, value) in entries.into_iter().enumerate() {
        let entry = match serde_json::from_value::<CatalogEntry>(value) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping catalog entry {}: {}", position, CatalogError::from(e));
                continue;
            }
        };
        match entry.into_item(items.len() as u32) {
            Ok(item) => items.push(item),
            Err(e) => log::warn!("skipping catalog entry {}: {}", position, e),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let json = r#"[
            {"name": "Magic Mouse", "price": 79.99, "digital": false, "image": "placeholder.png",
             "description": "Souris sans fil"},
            {"name": "Formation Python", "price": 89.99, "digital": true}
        ]"#;
        let items = parse_catalog(json).expect("catalog should parse");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[0].category(), Some(Category::Physical));
        assert_eq!(items[0].image.as_deref(), Some("placeholder.png"));
        assert_eq!(items[1].id, 1);
        assert_eq!(items[1].badges, vec!["Numérique".to_string()]);
        assert_eq!(items[1].description, "");
        assert_eq!(items[1].price_label(), "$89.99");
    }

    #[test]
    fn test_parse_catalog_rejects_bad_json() {
        assert!(matches!(parse_catalog("{not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(matches!(
            parse_catalog(r#"{"name": "Solo"}"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_negative_price_rejected_by_entry() {
        let entry = CatalogEntry {
            name: "Refund".to_string(),
            price: -5.0,
            digital: true,
            image: None,
            description: String::new(),
        };
        assert!(matches!(entry.into_item(0), Err(CatalogError::InvalidPrice(name)) if name == "Refund"));
    }

    #[test]
    fn test_parse_catalog_skips_bad_entries() {
        let json = r#"[
            {"name": "Refund", "price": -5.0, "digital": true},
            {"name": "Mug", "price": 12.0, "digital": false},
            {"name": "No price", "digital": false},
            {"name": "Ebook", "price": 9.5, "digital": true}
        ]"#;
        let items = parse_catalog(json).expect("catalog should parse");
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Mug", "Ebook"]);
        assert_eq!(items[0].id, 0);
        assert_eq!(items[1].id, 1);
    }
}
