use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): last action feedback on the
/// left, key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let message = match app.mode {
        Mode::Navigate => app.status_message.as_deref().unwrap_or(""),
        _ => "",
    };

    let hint = if app.show_key_hints {
        match app.mode {
            Mode::Navigate => "a add  Space toggle  e rename  d delete  ? help  q quit",
            Mode::Input => "Enter add  Esc list",
            Mode::Edit => "Enter save  Esc cancel  ^T toggle",
            Mode::Confirm => "y remove  n keep",
        }
    } else {
        ""
    };

    let mut spans: Vec<Span> = vec![Span::styled(
        format!(" {}", message),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if !hint.is_empty() && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
