use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into search bar, category tabs, listing body, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (regions[0], regions[1], regions[2], regions[3])
}
