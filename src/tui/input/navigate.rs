use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.list.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.list.len().saturating_sub(1);
        }

        // Toggle done
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            app.toggle_at_cursor();
        }

        // Inline rename
        (KeyModifiers::NONE, KeyCode::Char('e')) | (KeyModifiers::NONE, KeyCode::Enter) => {
            app.start_edit();
        }

        // Delete (asks for confirmation first)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            app.request_delete();
        }

        // Focus the new-task bar
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Input;
        }

        // Help
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}
