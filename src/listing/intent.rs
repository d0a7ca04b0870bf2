//! Intents for the restaurant listing store.

use crate::catalog::RestaurantId;
use crate::mvi::Intent;

/// Direction to advance a carousel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Move one slide forward, wrapping from the last slide to the first.
    Next,
    /// Move one slide backward, wrapping from the first slide to the last.
    Prev,
}

/// Intents that can be dispatched to the listing reducer.
#[derive(Debug)]
pub enum ListingIntent {
    /// Strictly flip favorite membership for an id.
    /// Unknown ids are recorded without error (permissive by design).
    ToggleFavorite { id: RestaurantId },

    /// Replace the active category unconditionally, including values
    /// outside the known vocabulary (those simply match nothing).
    SetActiveCategory { category: String },

    /// Replace the search term unconditionally; empty means "no filter".
    SetSearchTerm { term: String },

    /// Set a carousel position directly, without bounds validation.
    /// The view is responsible for supplying an in-range index.
    SetCarouselIndex { id: RestaurantId, index: usize },

    /// Move a carousel one slide, wrapping circularly in both directions.
    /// Validated at the store seam; a zero `total_slides` is a no-op here.
    AdvanceCarousel {
        id: RestaurantId,
        direction: SlideDirection,
        total_slides: usize,
    },

    /// Give every catalog restaurant without a carousel entry an explicit
    /// index of 0. Idempotent; existing entries are preserved.
    InitializeCarousel,
}

impl Intent for ListingIntent {}
