use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

use super::common;

/// INPUT mode: the new-task bar owns keystrokes. Enter submits and stays
/// in the bar for rapid entry; Esc returns to the list.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.submit_new_task();
        }
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        // Jump to start/end of line
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input_buffer.len();
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input_buffer.len();
        }
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            common::kill_to_start(&mut app.input_buffer, &mut app.input_cursor);
        }
        // Word movement (Alt+arrow, or readline Alt+B/F)
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            common::move_word_left(&app.input_buffer, &mut app.input_cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            common::move_word_right(&app.input_buffer, &mut app.input_cursor);
        }
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            common::move_word_left(&app.input_buffer, &mut app.input_cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            common::move_word_right(&app.input_buffer, &mut app.input_cursor);
        }
        // Single-cell movement
        (KeyModifiers::NONE, KeyCode::Left) => {
            common::move_left(&app.input_buffer, &mut app.input_cursor);
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            common::move_right(&app.input_buffer, &mut app.input_cursor);
        }
        // Deletion
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            common::backspace_word(&mut app.input_buffer, &mut app.input_cursor);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            common::backspace(&mut app.input_buffer, &mut app.input_cursor);
        }
        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            common::insert_char(&mut app.input_buffer, &mut app.input_cursor, c);
        }
        _ => {}
    }
}
