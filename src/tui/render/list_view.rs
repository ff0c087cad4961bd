use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::util::unicode;

/// Columns taken by the ordinal and marker, with slack for wide ordinals
const PREFIX_WIDTH: usize = 10;

fn marker(task: &Task) -> &'static str {
    if task.done { "[x]" } else { "[ ]" }
}

/// Render the task list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.list.is_empty() {
        let empty = Paragraph::new(" No tasks \u{2014} press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and keep it inside the visible window
    let visible_height = area.height as usize;
    app.cursor = app.cursor.min(app.list.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let scroll = app.scroll_offset;
    let end = app.list.len().min(scroll + visible_height);
    let width = area.width as usize;
    let editing_id = app.edit_target.as_ref().map(|t| t.task_id);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (row, task) in app.list.tasks[scroll..end].iter().enumerate() {
        let row = row + scroll;
        let is_cursor = row == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();

        // Ordinal: the stable per-row identifier for driving the UI
        // from scripts and tests
        spans.push(Span::styled(
            format!(" {:>2}  ", row + 1),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        // Done marker
        let marker_style = if task.done {
            Style::default().fg(app.theme.done).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        spans.push(Span::styled(marker(task), marker_style));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        if editing_id == Some(task.id) {
            // Inline rename: draft buffer with a cursor block
            let text_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            let before = &app.edit_buffer[..app.edit_cursor];
            let after = &app.edit_buffer[app.edit_cursor..];
            spans.push(Span::styled(before.to_string(), text_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
            spans.push(Span::styled(after.to_string(), text_style));
        } else {
            // Done tasks render muted and struck through, independent of
            // cursor or edit state
            let title_style = if task.done {
                Style::default()
                    .fg(app.theme.done)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            let title = unicode::truncate_to_width(&task.title, width.saturating_sub(PREFIX_WIDTH));
            spans.push(Span::styled(title, title_style));
        }

        // Pad cursor line so the highlight spans the full row
        if is_cursor {
            let content_width: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn list_empty_placeholder() {
        let mut app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn list_rows_are_numbered_with_markers() {
        let mut app = app_with_tasks(&["Water the plants", "Pay rent"]);
        mark_done(&mut app, "Pay rent");

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("1  [ ] Water the plants"));
        assert!(output.contains("2  [x] Pay rent"));
    }

    #[test]
    fn list_editing_row_shows_draft_not_title() {
        let mut app = app_with_tasks(&["Pay rent"]);
        app.start_edit();
        app.edit_buffer = "Pay the rent".into();
        app.edit_cursor = app.edit_buffer.len();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("Pay the rent\u{258C}"));
        assert!(!output.contains("[ ] Pay rent"));
    }

    #[test]
    fn list_long_titles_are_truncated() {
        let long = "x".repeat(200);
        let mut app = app_with_tasks(&[long.as_str()]);

        let output = render_to_string(40, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains('\u{2026}'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn list_scrolls_to_keep_cursor_visible() {
        let titles: Vec<String> = (1..=20).map(|i| format!("task {}", i)).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let mut app = app_with_tasks(&refs);
        app.cursor = 19;

        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });

        assert!(output.contains("task 20"));
        assert!(!output.contains("task 1 "));
        assert_eq!(app.scroll_offset, 15);
    }
}
