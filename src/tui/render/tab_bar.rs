use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterCategory;
use crate::ops::filter_ops::filter_controls;
use crate::tui::app::App;

/// Render the filter tabs with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{2713}",
        Style::default().fg(app.theme.highlight).bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    for control in filter_controls(&app.filter) {
        let count = category_count(app, control.category);
        spans.push(Span::styled(
            format!(" {} {} ", control.category.label(), count),
            tab_style(app, control.active),
        ));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(paragraph, area);
    sep_cols
}

/// Number of tasks a category admits
fn category_count(app: &App, category: FilterCategory) -> usize {
    app.tasks
        .iter()
        .filter(|v| category.admits(v.is_completed()))
        .count()
}

fn tab_style(app: &App, active: bool) -> Style {
    if active {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}

/// Separator line with ┴ joints under each tab separator
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let line: String = (0..area.width as usize)
        .map(|col| {
            if sep_cols.contains(&col) {
                '\u{2534}'
            } else {
                '\u{2500}'
            }
        })
        .collect();
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
