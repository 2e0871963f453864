use crate::ui::app::{App, PopupKind};
use crate::ui::filter::FilterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One entry of the key legend: the keys as shown, and what they do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: &'static str,
    pub action: &'static str,
}

const fn hint(keys: &'static str, action: &'static str) -> KeyHint {
    KeyHint { keys, action }
}

const LIST_HINTS: &[KeyHint] = &[
    hint("↑↓", "Move"),
    hint("f", "Favorite"),
    hint("h", "Favorites only"),
    hint("/", "Filter"),
    hint("Enter", "Details"),
    hint("q", "Quit"),
];

const FAILED_HINTS: &[KeyHint] = &[hint("r", "Retry"), hint("q", "Quit")];

const LOADING_HINTS: &[KeyHint] = &[hint("q", "Quit")];

const FILTER_HINTS: &[KeyHint] = &[
    hint("Tab", "Section"),
    hint("↑↓", "Move"),
    hint("Space", "Toggle"),
    hint("r", "Reset"),
    hint("Enter", "Apply"),
    hint("Esc", "Cancel"),
];

const DETAILS_HINTS: &[KeyHint] = &[hint("Esc", "Close")];

/// Legend for the keys `handle_key` accepts in the app's current context.
pub fn key_hints(app: &App) -> &'static [KeyHint] {
    match app.popup_kind() {
        Some(PopupKind::Filter) => FILTER_HINTS,
        Some(PopupKind::Details) => DETAILS_HINTS,
        None if app.catalog().is_failed() => FAILED_HINTS,
        None if app.catalog().is_loading() => LOADING_HINTS,
        None => LIST_HINTS,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.popup_kind() {
        Some(PopupKind::Filter) => handle_filter_key(app, key),
        Some(PopupKind::Details) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.close_details();
            }
        }
        None => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Home | KeyCode::Char('g') => app.move_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.move_to_bottom(),
        KeyCode::Char('f') | KeyCode::Char(' ') => app.toggle_favorite_selected(),
        KeyCode::Char('h') => app.toggle_show_only_favorites(),
        KeyCode::Char('/') | KeyCode::Char('F') => app.open_filter_dialog(),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Enter => app.open_details(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => FilterIntent::Close,
        KeyCode::Enter => {
            app.apply_filter_dialog();
            return;
        }
        KeyCode::Tab | KeyCode::Right => FilterIntent::NextSection,
        KeyCode::BackTab | KeyCode::Left => FilterIntent::PrevSection,
        KeyCode::Up | KeyCode::Char('k') => FilterIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => FilterIntent::MoveDown,
        KeyCode::Char(' ') => FilterIntent::Toggle,
        KeyCode::Char('r') => FilterIntent::Reset,
        _ => return,
    };
    app.dispatch_filter(intent);
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
