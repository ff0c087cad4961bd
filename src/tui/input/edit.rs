use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::common;

/// EDIT mode: inline rename of the cursor row. Enter commits, Esc
/// abandons the draft. Delete is unreachable here, but the done marker
/// stays live via Ctrl+T.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.submit_edit();
        }
        (_, KeyCode::Esc) => {
            app.cancel_edit();
        }
        // Toggle the edited task's done flag without leaving the draft
        (m, KeyCode::Char('t')) if m.contains(KeyModifiers::CONTROL) => {
            if let Some(id) = app.edit_target.as_ref().map(|t| t.task_id) {
                app.toggle_task(id);
            }
        }
        // Jump to start/end of line
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            common::kill_to_start(&mut app.edit_buffer, &mut app.edit_cursor);
        }
        // Word movement (Alt+arrow, or readline Alt+B/F)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            common::move_word_left(&app.edit_buffer, &mut app.edit_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            common::move_word_right(&app.edit_buffer, &mut app.edit_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            common::move_word_left(&app.edit_buffer, &mut app.edit_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            common::move_word_right(&app.edit_buffer, &mut app.edit_cursor);
        }
        // Single-cell movement
        (KeyModifiers::NONE, KeyCode::Left) => {
            common::move_left(&app.edit_buffer, &mut app.edit_cursor);
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            common::move_right(&app.edit_buffer, &mut app.edit_cursor);
        }
        // Deletion
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            common::backspace_word(&mut app.edit_buffer, &mut app.edit_cursor);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            common::backspace(&mut app.edit_buffer, &mut app.edit_cursor);
        }
        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            common::insert_char(&mut app.edit_buffer, &mut app.edit_cursor, c);
        }
        _ => {}
    }
}
