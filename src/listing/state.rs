//! State for the restaurant listing store.

use std::collections::HashMap;

use crate::catalog::{Catalog, Restaurant, RestaurantId};
use crate::mvi::StoreState;

/// Sentinel category meaning "no filtering".
///
/// By convention it is the first entry of the category vocabulary.
pub const CATEGORY_ALL: &str = "entire";

/// Complete listing state: catalog plus every user-mutable field.
///
/// The catalog is read-only after construction; favorites, carousel
/// positions, and filter state mutate through the reducer only.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    /// Seed catalog, in stable insertion order.
    pub restaurants: Vec<Restaurant>,
    /// Favorited ids in the order they were first marked.
    /// Membership is the only load-bearing semantics.
    pub favorites: Vec<RestaurantId>,
    /// Active category filter; `CATEGORY_ALL` disables category filtering.
    pub active_category: String,
    /// Currently displayed image index per restaurant.
    pub current_slides: HashMap<RestaurantId, usize>,
    /// Free-text search; empty string disables search filtering.
    pub search_term: String,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            restaurants: Vec::new(),
            favorites: Vec::new(),
            active_category: CATEGORY_ALL.to_string(),
            current_slides: HashMap::new(),
            search_term: String::new(),
        }
    }
}

impl StoreState for ListingState {}

impl ListingState {
    /// Build the initial state around a loaded catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            restaurants: catalog.restaurants,
            ..Self::default()
        }
    }

    /// Favorite membership test.
    pub fn is_favorite(&self, id: RestaurantId) -> bool {
        self.favorites.contains(&id)
    }

    /// Current slide for a restaurant. Total: an absent entry reads as 0,
    /// so the selector is safe even before `InitializeCarousel` runs.
    pub fn carousel_index(&self, id: RestaurantId) -> usize {
        self.current_slides.get(&id).copied().unwrap_or(0)
    }

    /// The derived view: catalog restaurants passing both the category and
    /// the search predicate, in catalog order (stable filter, no re-sort).
    ///
    /// Category matching is case-sensitive substring; search matching is
    /// case-insensitive substring over name, description, and location.
    /// The asymmetry is inherited listing behavior and is kept as-is.
    pub fn visible_listings(&self) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| self.category_matches(r) && self.search_matches(r))
            .collect()
    }

    fn category_matches(&self, restaurant: &Restaurant) -> bool {
        self.active_category == CATEGORY_ALL
            || restaurant.category.contains(&self.active_category)
    }

    fn search_matches(&self, restaurant: &Restaurant) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        restaurant.name.to_lowercase().contains(&term)
            || restaurant.description.to_lowercase().contains(&term)
            || restaurant.location.to_lowercase().contains(&term)
    }
}
