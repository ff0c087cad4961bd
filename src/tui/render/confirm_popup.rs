use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::{centered_rect_fixed, wrap_text};

/// Render the delete confirmation prompt
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let title = app
        .confirm
        .as_ref()
        .map(|c| c.title.as_str())
        .unwrap_or("");

    let mut styled_lines: Vec<(String, Style)> = Vec::new();
    styled_lines.push((" Remove Task".into(), header_style));
    styled_lines.push(("".into(), text_style));

    let body = format!("Remove \u{201c}{}\u{201d}?", title);
    for s in wrap_text(" ", &body, inner_w) {
        styled_lines.push((s, text_style));
    }
    styled_lines.push(("".into(), text_style));
    styled_lines.push((" y remove  \u{00B7}  n keep".into(), dim_style));

    let popup_h = ((styled_lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let lines: Vec<Line> = styled_lines
        .into_iter()
        .map(|(text, style)| Line::from(Span::styled(text, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn confirm_names_the_task() {
        let mut app = app_with_tasks(&["Pay rent"]);
        app.request_delete();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });

        assert!(output.contains("Remove Task"));
        assert!(output.contains("\u{201c}Pay rent\u{201d}"));
        assert!(output.contains("y remove"));
    }
}
