//! Controller Scenario Tests
//!
//! Drives FilterController through sequences of UI events.

#[cfg(test)]
mod tests {
    use crate::controller::{FilterController, FilterIndicators};
    use crate::count::{ResultsCount, Tone};
    use crate::models::{Category, CategoryFilter, Item, PriceRange, SortMode};

    fn widgets() -> Vec<Item> {
        vec![
            Item::new(1, "Widget A", "Small blue widget", Category::Digital, 15.0),
            Item::new(2, "Widget B", "Large red widget", Category::Physical, 45.0),
            Item::new(3, "Gadget C", "Shiny gadget", Category::Digital, 75.0),
        ]
    }

    fn visible_names(controller: &FilterController) -> Vec<String> {
        controller.visible_items().map(|item| item.name.clone()).collect()
    }

    fn grid_names(controller: &FilterController) -> Vec<String> {
        controller.grid_items().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let controller = FilterController::new(widgets());
        assert_eq!(controller.visible_count(), 3);
        assert!(controller.items().iter().all(|item| controller.is_visible(item.id)));
        assert_eq!(controller.results().text(), "showing all products (3)");
        assert_eq!(controller.results().tone(), Tone::Neutral);
        assert!(!controller.clear_active());
        assert_eq!(controller.indicators(), FilterIndicators::default());
    }

    #[test]
    fn test_search_with_no_match() {
        let mut controller = FilterController::new(widgets());
        controller.on_search_input("zzz");
        assert_eq!(controller.visible_count(), 0);
        assert_eq!(controller.results(), ResultsCount::None);
        assert_eq!(controller.results().text(), "no products found");
        assert!(controller.clear_active());
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let mut controller = FilterController::new(widgets());
        controller.on_search_input("RED");
        assert_eq!(visible_names(&controller), vec!["Widget B"]);
        assert!(!controller.is_visible(1));
        assert!(controller.is_visible(2));
    }

    #[test]
    fn test_clear_search_restores_all() {
        let mut controller = FilterController::new(widgets());
        controller.on_search_input("gadget");
        assert_eq!(controller.visible_count(), 1);

        controller.on_clear_search();
        assert_eq!(controller.filters().search_term, "");
        assert!(!controller.clear_active());
        assert_eq!(controller.visible_count(), 3);
    }

    #[test]
    fn test_category_then_price_scenario() {
        let mut controller = FilterController::new(widgets());

        controller.on_category_change("digital");
        assert_eq!(visible_names(&controller), vec!["Widget A", "Gadget C"]);
        assert_eq!(controller.results().text(), "2 products found");
        assert_eq!(controller.results().tone(), Tone::Success);

        controller.on_price_change("high");
        assert_eq!(visible_names(&controller), vec!["Gadget C"]);
        assert_eq!(controller.results().text(), "1 product found");
        assert_eq!(
            controller.indicators(),
            FilterIndicators { category: true, price: true, sort: false }
        );
    }

    #[test]
    fn test_name_desc_without_filters() {
        let mut controller = FilterController::new(widgets());
        controller.on_sort_change("name-desc");
        assert_eq!(visible_names(&controller), vec!["Widget B", "Widget A", "Gadget C"]);
        assert_eq!(grid_names(&controller), vec!["Widget B", "Widget A", "Gadget C"]);
        assert!(controller.indicators().sort);
    }

    #[test]
    fn test_price_desc_reverses_price_asc() {
        let mut controller = FilterController::new(widgets());
        controller.on_sort_change("price-asc");
        let ascending = visible_names(&controller);
        assert_eq!(ascending, vec!["Widget A", "Widget B", "Gadget C"]);

        controller.on_sort_change("price-desc");
        let mut descending = visible_names(&controller);
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let mut controller = FilterController::new(widgets());
        controller.on_category_change("digital");
        controller.on_sort_change("price-desc");
        let visible = visible_names(&controller);
        let grid = grid_names(&controller);

        controller.on_sort_change("price-desc");
        assert_eq!(visible_names(&controller), visible);
        assert_eq!(grid_names(&controller), grid);
    }

    #[test]
    fn test_price_boundaries() {
        let items = vec![
            Item::new(1, "Twenty", "", Category::Physical, 20.0),
            Item::new(2, "Fifty", "", Category::Physical, 50.0),
        ];
        let mut controller = FilterController::new(items);

        controller.on_price_change("low");
        assert_eq!(controller.visible_count(), 0);

        controller.on_price_change("medium");
        assert_eq!(visible_names(&controller), vec!["Twenty", "Fifty"]);

        controller.on_price_change("high");
        assert_eq!(controller.visible_count(), 0);
    }

    #[test]
    fn test_hidden_items_stay_in_front_after_sort() {
        let mut controller = FilterController::new(widgets());
        controller.on_category_change("digital");
        controller.on_sort_change("name-asc");

        assert_eq!(visible_names(&controller), vec!["Gadget C", "Widget A"]);
        assert_eq!(grid_names(&controller), vec!["Widget B", "Gadget C", "Widget A"]);
        assert!(!controller.is_visible(2));
    }

    #[test]
    fn test_default_sort_keeps_previous_grid_order() {
        let mut controller = FilterController::new(widgets());
        controller.on_sort_change("name-asc");
        assert_eq!(grid_names(&controller), vec!["Gadget C", "Widget A", "Widget B"]);

        controller.on_sort_change("default");
        assert_eq!(visible_names(&controller), vec!["Widget A", "Widget B", "Gadget C"]);
        assert_eq!(grid_names(&controller), vec!["Gadget C", "Widget A", "Widget B"]);
        assert!(!controller.indicators().sort);
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let mut controller = FilterController::new(widgets());
        controller.on_category_change("furniture");
        controller.on_price_change("cheap");
        controller.on_sort_change("popularity");

        assert_eq!(controller.filters().category, CategoryFilter::All);
        assert_eq!(controller.filters().price_range, PriceRange::All);
        assert_eq!(controller.sort_mode(), SortMode::Default);
        assert_eq!(controller.visible_count(), 3);
        assert_eq!(controller.indicators(), FilterIndicators::default());
        assert_eq!(grid_names(&controller), vec!["Widget A", "Widget B", "Gadget C"]);
    }

    #[test]
    fn test_unpriced_item_excluded_from_brackets_and_sorted_last() {
        let mut items = widgets();
        items.push(Item::from_card_text(
            4,
            "Mystery Box",
            "",
            vec!["Physique".to_string()],
            "ask us",
        ));
        let mut controller = FilterController::new(items);
        assert!(controller.is_visible(4));

        controller.on_price_change("low");
        assert!(!controller.is_visible(4));
        controller.on_price_change("all");

        controller.on_sort_change("price-asc");
        assert_eq!(visible_names(&controller).last().map(String::as_str), Some("Mystery Box"));
        controller.on_sort_change("price-desc");
        assert_eq!(visible_names(&controller).last().map(String::as_str), Some("Mystery Box"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut controller = FilterController::new(widgets());
        controller.on_search_input("widget");
        controller.on_category_change("physical");
        controller.on_price_change("medium");
        controller.on_sort_change("price-desc");
        assert_eq!(controller.visible_count(), 1);

        controller.on_reset();
        assert_eq!(controller.filters().search_term, "");
        assert_eq!(controller.filters().category, CategoryFilter::All);
        assert_eq!(controller.filters().price_range, PriceRange::All);
        assert_eq!(controller.sort_mode(), SortMode::Default);
        assert!(!controller.clear_active());
        assert_eq!(controller.indicators(), FilterIndicators::default());
        assert_eq!(controller.results(), ResultsCount::All(3));
    }

    #[test]
    fn test_search_does_not_touch_select_indicators() {
        let mut controller = FilterController::new(widgets());
        controller.on_category_change("digital");
        controller.on_search_input("gadget");
        assert!(controller.indicators().category);
        assert!(!controller.indicators().price);
    }
}
