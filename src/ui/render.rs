use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

use crate::catalog::Restaurant;
use crate::ui::app::{App, InputMode};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FAVORITE_ACTIVE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING_STAR,
    RECOMMENDED_TAG, SLIDE_DOT, SLIDE_DOT_ACTIVE, TAB_ACTIVE,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (search_area, tabs_area, body_area, footer_area) = layout_regions(area);

    draw_search_bar(frame, app, search_area);
    draw_category_tabs(frame, app, tabs_area);
    draw_listings(frame, app, body_area);
    draw_footer(frame, app, footer_area);
}

fn draw_search_bar(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let term = app.store().search_term();
    let (text, style) = if term.is_empty() && app.input_mode() == InputMode::Browse {
        (
            "Search for the name of the restaurant".to_string(),
            Style::default().fg(MUTED_TEXT),
        )
    } else {
        (term.to_string(), Style::default().fg(HEADER_TEXT))
    };

    let block = Block::default()
        .title("Search")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);

    if app.input_mode() == InputMode::Search && area.width > 2 && area.height > 1 {
        let x = area.x + 1 + (term.chars().count() as u16).min(area.width.saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_category_tabs(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let titles: Vec<Line> = app
        .categories()
        .iter()
        .map(|c| Line::from(capitalized(c)))
        .collect();

    let block = Block::default()
        .title("Categories")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let tabs = Tabs::new(titles)
        .block(block)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(
            Style::default()
                .fg(TAB_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.category_cursor());
    frame.render_widget(tabs, area);
}

fn draw_listings(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    frame.render_widget(Clear, area);
    let visible = app.store().visible_listings();
    let total = app.store().catalog().len();

    let block = Block::default()
        .title(format!("Restaurants ({}/{})", visible.len(), total))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if visible.is_empty() {
        let empty = Paragraph::new("No restaurants match the current filters")
            .style(Style::default().fg(MUTED_TEXT))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|restaurant| listing_item(app, restaurant))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    let mut list_state = ListState::default();
    list_state.select(Some(app.selection().min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn listing_item<'a>(app: &App, restaurant: &'a Restaurant) -> ListItem<'a> {
    let favorite = app.store().is_favorite(restaurant.id);
    let heart = if favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE_ACTIVE))
    } else {
        Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
    };

    let mut lines = vec![Line::from(vec![
        heart,
        Span::styled(
            restaurant.name.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("★ ", Style::default().fg(RATING_STAR)),
        Span::styled(
            format!("{:.1}", restaurant.rating),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!(" ({})", restaurant.review_count),
            Style::default().fg(MUTED_TEXT),
        ),
    ])];

    if let Some(tag) = &restaurant.recommended_tag {
        lines.push(Line::from(vec![
            Span::styled("  ★ ", Style::default().fg(RATING_STAR)),
            Span::styled(tag.as_str(), Style::default().fg(RECOMMENDED_TAG)),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", restaurant.description),
        Style::default().fg(MUTED_TEXT),
    )));

    lines.push(Line::from(Span::styled(
        format!(
            "  {} · {} · {}",
            restaurant.location, restaurant.category, restaurant.price
        ),
        Style::default().fg(MUTED_TEXT),
    )));

    lines.push(slide_indicator(app, restaurant));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

/// Dot indicator for the carousel, one dot per image. An out-of-range
/// explicit index leaves every dot inactive ("no visible slide").
fn slide_indicator<'a>(app: &App, restaurant: &Restaurant) -> Line<'a> {
    let current = app.store().carousel_index(restaurant.id);
    let mut spans = vec![Span::raw("  ")];
    for index in 0..restaurant.images.len() {
        let style = if index == current {
            Style::default().fg(SLIDE_DOT_ACTIVE)
        } else {
            Style::default().fg(SLIDE_DOT)
        };
        spans.push(Span::styled(if index == current { "● " } else { "○ " }, style));
    }
    if current < restaurant.images.len() {
        spans.push(Span::styled(
            format!(" {}/{}", current + 1, restaurant.images.len()),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let hints = match app.input_mode() {
        InputMode::Search => "Enter apply · Esc clear · type to search",
        InputMode::Browse => {
            "↑/↓ select · ←/→ slides · 1-9 jump · Tab category · / search · f favorite · q quit"
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(MUTED_TEXT))
            .block(block),
        area,
    );
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
