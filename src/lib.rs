//! tablescout — a browsable, filterable restaurant directory for the
//! terminal.
//!
//! The core is [`listing::ListingStore`], a single-writer state manager in
//! the MVI style: the view dispatches intents, a pure reducer produces the
//! next state, and selectors derive the visible listing set. The ratatui
//! view binding in [`ui`] only reads selectors and forwards intents.

pub mod catalog;
pub mod config;
pub mod listing;
pub mod logging;
pub mod mvi;
pub mod ui;
