use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the new-task bar. Focused (INPUT mode) it shows the buffer
/// with a cursor block; unfocused it shows the buffer dimmed, or a
/// placeholder when empty.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;

    let prompt_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let mut spans: Vec<Span> = vec![Span::styled(" \u{203A} ", prompt_style)];

    if focused {
        let before = &app.input_buffer[..app.input_cursor];
        let after = &app.input_buffer[app.input_cursor..];
        let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
        spans.push(Span::styled(before.to_string(), text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), text_style));
    } else if app.input_buffer.is_empty() {
        spans.push(Span::styled(
            "Add a task\u{2026}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // An unsubmitted draft stays visible while the list has focus
        spans.push(Span::styled(
            app.input_buffer.clone(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
