use crate::listing::intent::{ListingIntent, SlideDirection};
use crate::listing::state::ListingState;
use crate::mvi::Reducer;

pub struct ListingReducer;

impl Reducer for ListingReducer {
    type State = ListingState;
    type Intent = ListingIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListingIntent::ToggleFavorite { id } => {
                if state.favorites.contains(&id) {
                    state.favorites.retain(|fav| *fav != id);
                } else {
                    state.favorites.push(id);
                }
                state
            }
            ListingIntent::SetActiveCategory { category } => {
                state.active_category = category;
                state
            }
            ListingIntent::SetSearchTerm { term } => {
                state.search_term = term;
                state
            }
            ListingIntent::SetCarouselIndex { id, index } => {
                state.current_slides.insert(id, index);
                state
            }
            ListingIntent::AdvanceCarousel {
                id,
                direction,
                total_slides,
            } => {
                // The store rejects total_slides == 0 before dispatch; the
                // guard keeps the reducer total if dispatched directly.
                if total_slides == 0 {
                    return state;
                }
                // Normalize first: a permissive explicit set may have left
                // an out-of-range index behind, and the wrap arithmetic
                // must not overflow on it.
                let current =
                    state.current_slides.get(&id).copied().unwrap_or(0) % total_slides;
                let next = match direction {
                    SlideDirection::Next => (current + 1) % total_slides,
                    SlideDirection::Prev => (current + total_slides - 1) % total_slides,
                };
                state.current_slides.insert(id, next);
                state
            }
            ListingIntent::InitializeCarousel => {
                let ids: Vec<_> = state.restaurants.iter().map(|r| r.id).collect();
                for id in ids {
                    state.current_slides.entry(id).or_insert(0);
                }
                state
            }
        }
    }
}
