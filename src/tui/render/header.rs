use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app title on the left, task counters on the
/// right, separator line below.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled("\u{2713}", Style::default().fg(app.theme.done).bg(bg)),
        Span::styled(
            " tick",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let total = app.list.len();
    let done = app.list.done_count();
    let counter = match (total, done) {
        (0, _) => "no tasks ".to_string(),
        (n, 0) => format!("{} tasks ", n),
        (n, d) => format!("{} tasks \u{00B7} {} done ", n, d),
    };

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counter_width = counter.chars().count();
    if content_width + counter_width < width {
        let padding = width - content_width - counter_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        counter,
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_empty_list() {
        let app = test_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("tick"));
        assert!(output.contains("no tasks"));
    }

    #[test]
    fn header_counts_done_tasks() {
        let mut app = app_with_tasks(&["one", "two", "three"]);
        mark_done(&mut app, "two");
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("3 tasks"));
        assert!(output.contains("1 done"));
    }
}
