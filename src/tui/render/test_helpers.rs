use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::task_ops;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// The fixed "today" used by rendering tests
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 19).unwrap()
}

/// Render into an in-memory buffer
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
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
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
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

/// An App with no tasks, pinned to [`today`].
pub fn empty_app() -> App {
    let mut app = App::new(&Config::default(), None);
    app.today = today();
    app
}

/// An App holding the given `(text, due, completed)` tasks, in order.
pub fn app_with_tasks(tasks: &[(&str, Option<NaiveDate>, bool)]) -> App {
    let mut app = empty_app();
    for (text, due, completed) in tasks {
        let index = task_ops::add_task(&mut app.tasks, &app.filter, text, *due).unwrap();
        if *completed {
            task_ops::toggle_task(&mut app.tasks, &app.filter, index).unwrap();
        }
    }
    app
}
