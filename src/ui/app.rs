//! Presentation state and intent forwarding.
//!
//! `App` owns the injectable [`ListingStore`] plus the purely presentational
//! state the store doesn't care about: the selected row, the category tab
//! cursor, the search input mode, and the quit flag. It never mutates
//! listing state directly — every change goes through a store intent.

use crate::catalog::RestaurantId;
use crate::config::Config;
use crate::listing::{ListingStore, SlideDirection};

/// Where keyboard input is routed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    /// Keys navigate the listing.
    Browse,
    /// Keys edit the search term.
    Search,
}

pub struct App {
    store: ListingStore,
    config: Config,
    input_mode: InputMode,
    /// Cursor over the visible (filtered) rows.
    selection: usize,
    /// Cursor over the category vocabulary tabs.
    category_cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: ListingStore) -> Self {
        let category_cursor = config
            .categories
            .iter()
            .position(|c| c == store.active_category())
            .unwrap_or(0);
        Self {
            store,
            config,
            input_mode: InputMode::Browse,
            selection: 0,
            category_cursor,
            should_quit: false,
        }
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn categories(&self) -> &[String] {
        &self.config.categories
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn category_cursor(&self) -> usize {
        self.category_cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {}

    /// Materialize carousel entries for the catalog. The runtime calls this
    /// exactly once, after the catalog is loaded and before the first draw.
    pub fn initialize_carousel(&mut self) {
        self.store.initialize_carousel();
    }

    // ------------------------------------------------------------------
    // Row selection
    // ------------------------------------------------------------------

    /// Id of the restaurant under the cursor, if any rows are visible.
    pub fn selected_id(&self) -> Option<RestaurantId> {
        let visible = self.store.visible_listings();
        visible.get(self.selection).map(|r| r.id)
    }

    /// Move the row cursor, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.store.visible_listings().len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Keep the cursor in range after the visible set shrinks.
    fn clamp_selection(&mut self) {
        let len = self.store.visible_listings().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        if self.selection >= len {
            self.selection = len - 1;
        }
    }

    // ------------------------------------------------------------------
    // Intent forwarding
    // ------------------------------------------------------------------

    pub fn toggle_selected_favorite(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_favorite(id);
        }
    }

    /// Advance the selected row's carousel one slide.
    pub fn advance_selected_carousel(&mut self, direction: SlideDirection) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(total) = self
            .store
            .catalog()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.images.len())
        else {
            return;
        };
        // Catalog validation guarantees a positive image count.
        if let Err(err) = self.store.advance_carousel(id, direction, total) {
            tracing::error!(%err, id, "carousel advance rejected");
        }
    }

    /// Jump the selected row's carousel directly to `index`.
    /// The store accepts any index; the view only sends in-range ones.
    pub fn go_to_slide(&mut self, index: usize) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let in_range = self
            .store
            .catalog()
            .iter()
            .find(|r| r.id == id)
            .is_some_and(|r| index < r.images.len());
        if in_range {
            self.store.set_carousel_index(id, index);
        }
    }

    /// Move the category tab cursor and apply the filter.
    pub fn cycle_category(&mut self, direction: i32) {
        let len = self.config.categories.len();
        if len == 0 {
            return;
        }

        self.category_cursor = if direction.is_negative() {
            if self.category_cursor == 0 {
                len - 1
            } else {
                self.category_cursor - 1
            }
        } else if self.category_cursor + 1 >= len {
            0
        } else {
            self.category_cursor + 1
        };

        let category = self.config.categories[self.category_cursor].clone();
        self.store.set_active_category(category);
        self.clamp_selection();
    }

    /// Apply a category by name (initial CLI filter; may be outside the
    /// vocabulary, in which case no tab is highlighted).
    pub fn set_category(&mut self, category: &str) {
        self.category_cursor = self
            .config
            .categories
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.category_cursor);
        self.store.set_active_category(category.to_string());
        self.clamp_selection();
    }

    // ------------------------------------------------------------------
    // Search input
    // ------------------------------------------------------------------

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    /// Leave search mode keeping the current term.
    pub fn commit_search(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    /// Leave search mode and clear the term.
    pub fn cancel_search(&mut self) {
        self.input_mode = InputMode::Browse;
        self.store.set_search_term(String::new());
        self.clamp_selection();
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.store.search_term().to_string();
        term.push(ch);
        self.store.set_search_term(term);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.store.search_term().to_string();
        term.pop();
        self.store.set_search_term(term);
        self.clamp_selection();
    }

    /// Set the search term wholesale (initial CLI term).
    pub fn set_search(&mut self, term: &str) {
        self.store.set_search_term(term.to_string());
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::listing::ListingStore;

    fn make_app() -> App {
        let store = ListingStore::new(Catalog::seed());
        App::new(Config::default(), store)
    }

    // -- selection ---------------------------------------------------------

    #[test]
    fn selection_wraps_both_directions() {
        let mut app = make_app();
        let len = app.store().visible_listings().len();
        app.move_selection(-1);
        assert_eq!(app.selection(), len - 1);
        app.move_selection(1);
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_visible_set() {
        let mut app = make_app();
        let len = app.store().visible_listings().len();
        for _ in 0..len - 1 {
            app.move_selection(1);
        }
        assert_eq!(app.selection(), len - 1);
        app.set_category("Tempura");
        assert!(app.selection() < app.store().visible_listings().len());
    }

    #[test]
    fn selected_id_none_when_nothing_visible() {
        let mut app = make_app();
        app.set_category("No Such Category");
        assert!(app.store().visible_listings().is_empty());
        assert_eq!(app.selected_id(), None);
    }

    // -- intent forwarding -------------------------------------------------

    #[test]
    fn toggle_selected_favorite_marks_row_under_cursor() {
        let mut app = make_app();
        let id = app.selected_id().unwrap();
        app.toggle_selected_favorite();
        assert!(app.store().is_favorite(id));
        app.toggle_selected_favorite();
        assert!(!app.store().is_favorite(id));
    }

    #[test]
    fn advance_selected_carousel_moves_slide() {
        let mut app = make_app();
        app.initialize_carousel();
        let id = app.selected_id().unwrap();
        app.advance_selected_carousel(SlideDirection::Next);
        assert_eq!(app.store().carousel_index(id), 1);
        app.advance_selected_carousel(SlideDirection::Prev);
        assert_eq!(app.store().carousel_index(id), 0);
    }

    #[test]
    fn go_to_slide_ignores_out_of_range_index() {
        let mut app = make_app();
        let id = app.selected_id().unwrap();
        app.go_to_slide(99);
        assert_eq!(app.store().carousel_index(id), 0);
        app.go_to_slide(2);
        assert_eq!(app.store().carousel_index(id), 2);
    }

    // -- category tabs -----------------------------------------------------

    #[test]
    fn cycle_category_wraps_and_applies_filter() {
        let mut app = make_app();
        let len = app.categories().len();
        app.cycle_category(-1);
        assert_eq!(app.category_cursor(), len - 1);
        assert_eq!(
            app.store().active_category(),
            app.categories()[len - 1].as_str()
        );
        app.cycle_category(1);
        assert_eq!(app.category_cursor(), 0);
    }

    // -- search mode -------------------------------------------------------

    #[test]
    fn search_chars_update_term_live() {
        let mut app = make_app();
        app.enter_search();
        app.push_search_char('s');
        app.push_search_char('u');
        assert_eq!(app.store().search_term(), "su");
        app.pop_search_char();
        assert_eq!(app.store().search_term(), "s");
    }

    #[test]
    fn cancel_search_clears_term_and_mode() {
        let mut app = make_app();
        app.enter_search();
        app.push_search_char('x');
        app.cancel_search();
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert_eq!(app.store().search_term(), "");
    }

    #[test]
    fn commit_search_keeps_term() {
        let mut app = make_app();
        app.enter_search();
        app.push_search_char('e');
        app.commit_search();
        assert_eq!(app.input_mode(), InputMode::Browse);
        assert_eq!(app.store().search_term(), "e");
    }
}
