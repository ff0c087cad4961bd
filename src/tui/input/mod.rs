mod common;
mod confirm;
mod edit;
mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The duplicate-task alert is modal: it swallows everything until
    // dismissed, then input resumes in whatever mode raised it.
    if app.duplicate_alert.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.duplicate_alert = None;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input => insert::handle_input(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}
