use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::listing::SlideDirection;
use crate::ui::app::{App, InputMode};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.input_mode() {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Browse => handle_browse_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.commit_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) => {
            if is_ctrl_char(key, 'q') {
                app.request_quit();
            } else {
                app.push_search_char(ch);
            }
        }
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('f') | KeyCode::Enter => app.toggle_selected_favorite(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('h') => {
            app.advance_selected_carousel(SlideDirection::Prev)
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.advance_selected_carousel(SlideDirection::Next)
        }
        KeyCode::Tab => app.cycle_category(1),
        KeyCode::BackTab => app.cycle_category(-1),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Digit keys mirror the slide indicator dots: jump straight
            // to that slide of the selected restaurant.
            if let Some(slide) = ch.to_digit(10).filter(|d| *d > 0) {
                app.go_to_slide(slide as usize - 1);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
