use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // first 'g' of "gg"
    /// Tap the highlighted post's link
    OpenLink,
    Close,
    /// Reload the page; retries after a load error
    Reload,
    More,
    ShowMore,
    Comment,
    Repost,
    Like,
    Bookmark,
    Share,
    Help,
    MenuUp,
    MenuDown,
    Confirm,
    ExitMode,
    None,
}

/// Map a key press to an action for the current mode
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match app.mode {
        Mode::Help => return Action::ExitMode,
        Mode::MoreMenu { .. } => return handle_menu_mode(key),
        Mode::Normal => {}
    }

    let binding = KeyBinding::from(key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.double_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.lookup(&binding).copied().unwrap_or(Action::None)
}

fn handle_menu_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::MenuUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => Action::ExitMode,
        _ => Action::None,
    }
}
