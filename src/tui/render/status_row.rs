use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if app.show_key_hints {
        spans.push(Span::styled(
            format!(" {}", key_hint(app.mode)),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    // Remaining count, right-aligned
    let left = app.tasks.len() - app.tasks.completed_count();
    let count = format!("{} of {} left ", left, app.tasks.len());
    let content_width = spans_width(&spans);
    if content_width + count.chars().count() < width {
        let padding = width - content_width - count.chars().count();
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            count,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space done  e edit  d delete  1/2/3 filter  ? help",
        Mode::Form => "Enter add  Tab next field  Esc back",
        Mode::Edit => "Enter save  Tab next field  Esc leave open",
    }
}
