//! Unidirectional data flow primitives.
//!
//! The view layer never mutates listing state directly. It dispatches an
//! intent, the reducer folds it into a fresh state snapshot, and selectors
//! derive what the view draws from that snapshot. Each trait here is a
//! seam in that loop.

/// A discrete user action the view binding forwards for dispatch.
///
/// Carries everything the reducer needs to apply it; nothing is looked
/// up from the outside world during reduction.
pub trait Intent: Send + 'static {}

/// A store's state snapshot.
///
/// `Clone` produces the candidate for the next snapshot, `PartialEq`
/// lets callers tell whether a dispatch changed anything, and `Default`
/// gives the dispatch path a placeholder to swap against.
pub trait StoreState: Clone + PartialEq + Default + Send + 'static {}

/// Folds intents into state.
///
/// `reduce` is the only place transitions happen and must stay a pure
/// function of its two arguments. Validation and side effects (logging,
/// rejection of bad inputs) belong to the store seam around it, so the
/// reducer itself is total: every intent maps to some next state.
pub trait Reducer {
    type State: StoreState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
