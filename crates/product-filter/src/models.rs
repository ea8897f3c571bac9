//! Filter Models
//!
//! Products and the selections the filter controls can hold.

use serde::{Deserialize, Serialize};

use crate::price::{format_price, parse_price};

/// Badge label carried by digital products
pub const DIGITAL_LABEL: &str = "Numérique";
/// Badge label carried by physical products
pub const PHYSICAL_LABEL: &str = "Physique";

/// Upper bound (exclusive) of the low price bracket
pub const LOW_PRICE_CEILING: f64 = 20.0;
/// Lower bound (exclusive) of the high price bracket
pub const HIGH_PRICE_FLOOR: f64 = 50.0;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Digital,
    Physical,
}

impl Category {
    /// Badge text shown on a card of this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Digital => DIGITAL_LABEL,
            Category::Physical => PHYSICAL_LABEL,
        }
    }

    /// Category named by a badge, matching on the label substring
    pub fn from_badge(badge: &str) -> Option<Self> {
        if badge.contains(DIGITAL_LABEL) {
            Some(Category::Digital)
        } else if badge.contains(PHYSICAL_LABEL) {
            Some(Category::Physical)
        } else {
            None
        }
    }
}

/// One product card in the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Badge labels as shown on the card (zero or more)
    pub badges: Vec<String>,
    /// `None` when the price could not be read
    pub price: Option<f64>,
    pub image: Option<String>,
}

impl Item {
    pub fn new(id: u32, name: &str, description: &str, category: Category, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            badges: vec![category.label().to_string()],
            price: Some(price),
            image: None,
        }
    }

    /// Build an item from the text of an already rendered card.
    ///
    /// An unreadable price leaves the item unpriced instead of rejecting it.
    pub fn from_card_text(
        id: u32,
        name: &str,
        description: &str,
        badges: Vec<String>,
        price_text: &str,
    ) -> Self {
        let price = match parse_price(price_text) {
            Ok(price) => Some(price),
            Err(e) => {
                log::warn!("product '{}' has an unreadable price: {}", name.trim(), e);
                None
            }
        };
        Self {
            id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            badges: badges.into_iter().map(|b| b.trim().to_string()).collect(),
            price,
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// True if any badge carries the label of `category`
    pub fn has_category(&self, category: Category) -> bool {
        self.badges.iter().any(|badge| badge.contains(category.label()))
    }

    /// First category found among the badges
    pub fn category(&self) -> Option<Category> {
        self.badges.iter().find_map(|badge| Category::from_badge(badge))
    }

    /// Price as displayed on the card
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format_price(price),
            None => "N/A".to_string(),
        }
    }
}

/// Category select value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Digital,
    Physical,
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Digital => "digital",
            CategoryFilter::Physical => "physical",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(CategoryFilter::All),
            "digital" => Some(CategoryFilter::Digital),
            "physical" => Some(CategoryFilter::Physical),
            _ => None,
        }
    }

    /// Category to match, `None` for all
    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Digital => Some(Category::Digital),
            CategoryFilter::Physical => Some(Category::Physical),
        }
    }
}

/// Price bracket select value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    #[default]
    All,
    /// Below 20
    Low,
    /// 20 to 50, both included
    Medium,
    /// Above 50
    High,
}

impl PriceRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Low => "low",
            PriceRange::Medium => "medium",
            PriceRange::High => "high",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(PriceRange::All),
            "low" => Some(PriceRange::Low),
            "medium" => Some(PriceRange::Medium),
            "high" => Some(PriceRange::High),
            _ => None,
        }
    }

    /// Whether a price falls in this bracket. Unpriced items only pass `All`.
    pub fn contains(&self, price: Option<f64>) -> bool {
        match (self, price) {
            (PriceRange::All, _) => true,
            (_, None) => false,
            (PriceRange::Low, Some(p)) => p < LOW_PRICE_CEILING,
            (PriceRange::Medium, Some(p)) => (LOW_PRICE_CEILING..=HIGH_PRICE_FLOOR).contains(&p),
            (PriceRange::High, Some(p)) => p > HIGH_PRICE_FLOOR,
        }
    }
}

/// Sort select value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Keep the grid as it is
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "default" => Some(SortMode::Default),
            "name-asc" => Some(SortMode::NameAsc),
            "name-desc" => Some(SortMode::NameDesc),
            "price-asc" => Some(SortMode::PriceAsc),
            "price-desc" => Some(SortMode::PriceDesc),
            _ => None,
        }
    }
}

/// Current search text and select values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Raw text of the search field
    pub search_term: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_badge() {
        assert_eq!(Category::from_badge("Numérique"), Some(Category::Digital));
        assert_eq!(Category::from_badge(" Produit Physique "), Some(Category::Physical));
        assert_eq!(Category::from_badge("Promo"), None);
    }

    #[test]
    fn test_item_has_category_by_badge() {
        let item = Item::from_card_text(
            0,
            "Mug",
            "Ceramic",
            vec!["Nouveau".to_string(), "Physique".to_string()],
            "$12.00",
        );
        assert!(item.has_category(Category::Physical));
        assert!(!item.has_category(Category::Digital));
        assert_eq!(item.category(), Some(Category::Physical));
    }

    #[test]
    fn test_item_without_badges_has_no_category() {
        let item = Item::from_card_text(0, "Mystery", "", vec![], "$5");
        assert_eq!(item.category(), None);
        assert!(!item.has_category(Category::Digital));
    }

    #[test]
    fn test_unreadable_price_leaves_item_unpriced() {
        let item = Item::from_card_text(3, "  Sticker ", "", vec![], "free");
        assert_eq!(item.name, "Sticker");
        assert_eq!(item.price, None);
        assert_eq!(item.price_label(), "N/A");
    }

    #[test]
    fn test_select_values_round_trip_known_names() {
        for value in ["all", "digital", "physical"] {
            assert_eq!(CategoryFilter::from_value(value).map(|c| c.as_str()), Some(value));
        }
        for value in ["all", "low", "medium", "high"] {
            assert_eq!(PriceRange::from_value(value).map(|p| p.as_str()), Some(value));
        }
        for value in ["default", "name-asc", "name-desc", "price-asc", "price-desc"] {
            assert_eq!(SortMode::from_value(value).map(|s| s.as_str()), Some(value));
        }
        assert_eq!(SortMode::from_value("popularity"), None);
        assert_eq!(CategoryFilter::from_value("Digital"), None);
    }

    #[test]
    fn test_price_range_boundaries() {
        assert!(PriceRange::Low.contains(Some(19.99)));
        assert!(!PriceRange::Low.contains(Some(20.0)));
        assert!(PriceRange::Medium.contains(Some(20.0)));
        assert!(PriceRange::Medium.contains(Some(50.0)));
        assert!(!PriceRange::High.contains(Some(50.0)));
        assert!(PriceRange::High.contains(Some(50.01)));
    }

    #[test]
    fn test_unpriced_only_passes_all() {
        assert!(PriceRange::All.contains(None));
        assert!(!PriceRange::Low.contains(None));
        assert!(!PriceRange::Medium.contains(None));
        assert!(!PriceRange::High.contains(None));
    }
}
