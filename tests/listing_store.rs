mod common;

use common::{restaurant, two_restaurant_catalog};
use tablescout::catalog::Catalog;
use tablescout::listing::{ListingError, ListingStore, SlideDirection};

fn make_store() -> ListingStore {
    ListingStore::new(two_restaurant_catalog())
}

// -- derived view -------------------------------------------------------------

#[test]
fn defaults_show_full_catalog_in_order() {
    let store = make_store();
    let visible = store.visible_listings();
    let ids: Vec<_> = visible.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(store.active_category(), "entire");
    assert_eq!(store.search_term(), "");
}

#[test]
fn category_filter_selects_matching_restaurants_only() {
    let mut store = make_store();
    store.set_active_category("Tempura");
    let visible = store.visible_listings();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
}

#[test]
fn category_matches_by_substring() {
    let catalog = Catalog {
        restaurants: vec![restaurant(1, "Sushi Sato", "Sushi & Seafood", 2)],
    };
    let mut store = ListingStore::new(catalog);
    store.set_active_category("Sushi");
    assert_eq!(store.visible_listings().len(), 1);
}

#[test]
fn category_matching_is_case_sensitive() {
    // Inherited behavior: category is matched case-sensitively even though
    // search is not.
    let mut store = make_store();
    store.set_active_category("tempura");
    assert!(store.visible_listings().is_empty());
}

#[test]
fn search_is_case_insensitive_over_name() {
    let mut store = make_store();
    store.set_search_term("sushi");
    let visible = store.visible_listings();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn search_matches_description_and_location() {
    let mut store = make_store();
    store.set_search_term("seafood");
    assert_eq!(store.visible_listings()[0].id, 2);

    store.set_search_term("yokohama");
    assert_eq!(store.visible_listings()[0].id, 1);
}

#[test]
fn filters_are_conjunctive() {
    let mut store = make_store();
    store.set_active_category("Tempura");
    store.set_search_term("sushi");
    // Restaurant 1 passes category but not search; restaurant 2 the
    // reverse. Nothing passes both.
    assert!(store.visible_listings().is_empty());
}

#[test]
fn filtering_preserves_catalog_order() {
    let catalog = Catalog {
        restaurants: vec![
            restaurant(10, "Ramen Alpha", "Ramen", 1),
            restaurant(20, "Sushi Beta", "Sushi", 1),
            restaurant(30, "Ramen Gamma", "Ramen", 1),
        ],
    };
    let mut store = ListingStore::new(catalog);
    store.set_active_category("Ramen");
    let ids: Vec<_> = store.visible_listings().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 30]);
}

// -- favorites ----------------------------------------------------------------

#[test]
fn favorite_toggle_scenario() {
    let mut store = make_store();
    store.toggle_favorite(1);
    store.toggle_favorite(2);
    store.toggle_favorite(1);
    assert!(!store.is_favorite(1));
    assert!(store.is_favorite(2));
    assert_eq!(store.state().favorites, vec![2]);
}

#[test]
fn favoriting_unknown_id_is_permitted() {
    let mut store = make_store();
    store.toggle_favorite(42);
    assert!(store.is_favorite(42));
}

// -- carousel -----------------------------------------------------------------

#[test]
fn carousel_index_defaults_to_zero_before_initialization() {
    let store = make_store();
    assert_eq!(store.carousel_index(1), 0);
    assert_eq!(store.carousel_index(999), 0);
}

#[test]
fn advance_rejects_zero_slide_count() {
    let mut store = make_store();
    let err = store
        .advance_carousel(1, SlideDirection::Next, 0)
        .unwrap_err();
    assert_eq!(err, ListingError::InvalidSlideCount { total_slides: 0 });
    // State untouched.
    assert_eq!(store.carousel_index(1), 0);
    assert!(store.state().current_slides.is_empty());
}

#[test]
fn advance_wraps_in_both_directions() {
    let mut store = make_store();
    store.advance_carousel(1, SlideDirection::Prev, 3).unwrap();
    assert_eq!(store.carousel_index(1), 2);
    store.advance_carousel(1, SlideDirection::Next, 3).unwrap();
    assert_eq!(store.carousel_index(1), 0);
}

#[test]
fn set_carousel_index_accepts_out_of_range_values() {
    // Documented permissive edge case: the store does not validate
    // against the restaurant's image count.
    let mut store = make_store();
    store.set_carousel_index(1, 99);
    assert_eq!(store.carousel_index(1), 99);
}

#[test]
fn advance_after_out_of_range_explicit_set_lands_in_range() {
    let mut store = make_store();
    store.set_carousel_index(1, usize::MAX);
    store.advance_carousel(1, SlideDirection::Next, 3).unwrap();
    assert_eq!(store.carousel_index(1), 1);

    store.set_carousel_index(1, 99);
    store.advance_carousel(1, SlideDirection::Prev, 3).unwrap();
    assert_eq!(store.carousel_index(1), 2);
}

#[test]
fn initialize_carousel_covers_catalog_and_keeps_explicit_sets() {
    let mut store = make_store();
    store.set_carousel_index(1, 2);
    store.initialize_carousel();
    assert_eq!(store.carousel_index(1), 2);
    assert_eq!(store.carousel_index(2), 0);
    assert_eq!(store.state().current_slides.len(), 2);
}

// -- isolation ----------------------------------------------------------------

#[test]
fn stores_are_isolated_instances() {
    let mut a = make_store();
    let b = make_store();
    a.toggle_favorite(1);
    a.set_search_term("tempura");
    assert!(!b.is_favorite(1));
    assert_eq!(b.search_term(), "");
}
