use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::list_ops;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app with default config and an empty list.
pub fn test_app() -> App {
    App::new(&Config::default())
}

/// An app seeded with the given task titles.
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut app = test_app();
    for title in titles {
        list_ops::add_task(&mut app.list, title).unwrap();
    }
    app
}

/// Mark the task with the given title as done.
pub fn mark_done(app: &mut App, title: &str) {
    let id = app
        .list
        .iter()
        .find(|t| t.title == title)
        .map(|t| t.id)
        .unwrap();
    list_ops::toggle_done(&mut app.list, id).unwrap();
}
