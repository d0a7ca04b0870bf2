//! The owning wrapper around listing state.
//!
//! `ListingStore` is the single writer of its state: the view binding only
//! reads selectors and issues intents. The store validates the one fallible
//! intent (`advance_carousel`) before dispatching to the pure reducer.

use thiserror::Error;

use crate::catalog::{Catalog, Restaurant, RestaurantId};
use crate::listing::intent::{ListingIntent, SlideDirection};
use crate::listing::reducer::ListingReducer;
use crate::listing::state::ListingState;
use crate::mvi::Reducer;

/// Domain errors for listing intents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// `advance_carousel` was given a non-positive slide count.
    /// This is a caller error: the view must pass the restaurant's
    /// actual image count, which is non-empty by catalog validation.
    #[error("Invalid slide count {total_slides}: must be positive")]
    InvalidSlideCount { total_slides: usize },
}

/// Single source of truth for the restaurant directory.
///
/// Explicitly owned and injectable — construct one per session (or per
/// test), there is no process-wide singleton.
pub struct ListingStore {
    state: ListingState,
}

impl ListingStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: ListingState::with_catalog(catalog),
        }
    }

    /// Dispatch an intent through the reducer.
    fn dispatch(&mut self, intent: ListingIntent) {
        tracing::debug!(?intent, "listing: dispatch");
        self.state = ListingReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    // ------------------------------------------------------------------
    // Intents
    // ------------------------------------------------------------------

    /// Flip favorite membership for `id`.
    pub fn toggle_favorite(&mut self, id: RestaurantId) {
        self.dispatch(ListingIntent::ToggleFavorite { id });
    }

    /// Replace the active category filter.
    pub fn set_active_category(&mut self, category: impl Into<String>) {
        self.dispatch(ListingIntent::SetActiveCategory {
            category: category.into(),
        });
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(ListingIntent::SetSearchTerm { term: term.into() });
    }

    /// Jump a carousel directly to `index`. No bounds validation: the view
    /// supplies indices from the restaurant's own image sequence.
    pub fn set_carousel_index(&mut self, id: RestaurantId, index: usize) {
        self.dispatch(ListingIntent::SetCarouselIndex { id, index });
    }

    /// Move a carousel one slide in `direction`, wrapping circularly.
    ///
    /// Fails with [`ListingError::InvalidSlideCount`] when `total_slides`
    /// is zero; state is untouched in that case.
    pub fn advance_carousel(
        &mut self,
        id: RestaurantId,
        direction: SlideDirection,
        total_slides: usize,
    ) -> Result<(), ListingError> {
        if total_slides == 0 {
            return Err(ListingError::InvalidSlideCount { total_slides });
        }
        self.dispatch(ListingIntent::AdvanceCarousel {
            id,
            direction,
            total_slides,
        });
        Ok(())
    }

    /// Materialize an explicit carousel index of 0 for every catalog
    /// restaurant lacking one. Called once by the runtime after catalog
    /// load; safe to call again (already-initialized entries are kept).
    pub fn initialize_carousel(&mut self) {
        self.dispatch(ListingIntent::InitializeCarousel);
    }

    // ------------------------------------------------------------------
    // Selectors
    // ------------------------------------------------------------------

    /// The filtered, ordered subset of the catalog.
    pub fn visible_listings(&self) -> Vec<&Restaurant> {
        self.state.visible_listings()
    }

    pub fn is_favorite(&self, id: RestaurantId) -> bool {
        self.state.is_favorite(id)
    }

    /// Current slide for `id`; defaults to 0 when unset.
    pub fn carousel_index(&self, id: RestaurantId) -> usize {
        self.state.carousel_index(id)
    }

    pub fn active_category(&self) -> &str {
        &self.state.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    /// The full catalog, unfiltered.
    pub fn catalog(&self) -> &[Restaurant] {
        &self.state.restaurants
    }

    /// Read access to the raw state (used by tests and diagnostics).
    pub fn state(&self) -> &ListingState {
        &self.state
    }
}
