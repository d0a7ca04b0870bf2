//! The listing store: single source of truth for the restaurant directory.
//!
//! Owns the catalog, the favorites set, the active category filter, the
//! search term, and per-restaurant carousel positions. State transitions
//! follow the MVI pattern: the view binding dispatches [`ListingIntent`]s,
//! the pure [`ListingReducer`] produces the next state, and selectors on
//! [`ListingStore`] derive the visible view.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{ListingIntent, SlideDirection};
pub use reducer::ListingReducer;
pub use state::{ListingState, CATEGORY_ALL};
pub use store::{ListingError, ListingStore};
