use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{DueEmphasis, EditDraft, EditField, EditState, TaskView, parse_due_date};
use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{checkbox, input_spans, pad_to_width, spans_width};

/// Width of the " [x] " prefix before task text
const PREFIX_W: usize = 5;

/// Render the task list, keeping the cursor task scrolled into view
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.visible_indices();

    if visible.is_empty() {
        let message = if app.tasks.is_empty() {
            " No tasks yet. Press a to add one.".to_string()
        } else {
            format!(" Nothing under \"{}\"", app.filter.current().label())
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;

    // Display lines tagged with the visible position they belong to
    let mut display_lines: Vec<(usize, Line<'static>)> = Vec::new();
    for (pos, &index) in visible.iter().enumerate() {
        let Some(view) = app.tasks.get(index) else {
            continue;
        };
        let is_cursor = pos == app.cursor;
        match view.edit_state() {
            EditState::Display => {
                display_lines.push((pos, task_line(app, view, is_cursor, width)));
            }
            EditState::Editing(draft) => {
                let focused = is_cursor && app.mode == Mode::Edit;
                for line in draft_lines(app, view, draft, is_cursor, focused, width) {
                    display_lines.push((pos, line));
                }
            }
        }
    }

    // Scroll so every line of the cursor task is on screen
    let first = display_lines
        .iter()
        .position(|(p, _)| *p == app.cursor)
        .unwrap_or(0);
    let last = display_lines
        .iter()
        .rposition(|(p, _)| *p == app.cursor)
        .unwrap_or(first);
    if first < app.scroll {
        app.scroll = first;
    } else if height > 0 && last >= app.scroll + height {
        app.scroll = last + 1 - height;
    }
    // Never leave rows empty at the bottom while tasks sit above the top
    app.scroll = app.scroll.min(display_lines.len().saturating_sub(height));

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll)
        .take(height)
        .map(|(_, line)| line)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// One task in display state: checkbox, text, due date, controls
fn task_line(app: &App, view: &TaskView, is_cursor: bool, width: usize) -> Line<'static> {
    let row_bg = row_bg(app, is_cursor);
    let completed = view.is_completed();

    let label = view.due_label(app.today);
    let mut date_style = Style::default()
        .fg(app.theme.due_color(label.emphasis))
        .bg(row_bg)
        .add_modifier(Modifier::ITALIC);
    match label.emphasis {
        DueEmphasis::Overdue => date_style = date_style.add_modifier(Modifier::BOLD),
        DueEmphasis::Faded => date_style = date_style.add_modifier(Modifier::DIM),
        DueEmphasis::Normal => {}
    }

    let controls = control_spans(app, view, is_cursor);
    let right_w = unicode::display_width(&label.text) + spans_width(&controls);
    let text_budget = width.saturating_sub(PREFIX_W + right_w + 1);

    let mut text_style = if completed {
        Style::default()
            .fg(app.theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(app.theme.text_bright).bg(row_bg)
    };
    if is_cursor {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = checkbox_spans(app, completed, row_bg);
    spans.push(Span::styled(
        unicode::truncate_to_width(view.text(), text_budget),
        text_style,
    ));

    let used = spans_width(&spans) + right_w;
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    spans.push(Span::styled(label.text, date_style));
    spans.extend(controls);
    Line::from(spans)
}

/// A task in edit state: text field line, then due-date field line
fn draft_lines(
    app: &App,
    view: &TaskView,
    draft: &EditDraft,
    is_cursor: bool,
    focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let row_bg = row_bg(app, is_cursor);
    let field_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
    let marker_style = Style::default().fg(app.theme.highlight).bg(row_bg);

    // Text field + controls
    let controls = control_spans(app, view, is_cursor);
    let mut first = checkbox_spans(app, view.is_completed(), row_bg);
    first.push(Span::styled("\u{25B8} ", marker_style));
    first.extend(input_spans(
        &draft.text,
        focused && draft.focus == EditField::Text,
        field_style,
    ));
    let used = spans_width(&first) + spans_width(&controls);
    if used < width {
        first.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(row_bg),
        ));
    }
    first.extend(controls);

    // Date field
    let date_focused = focused && draft.focus == EditField::Date;
    let date_invalid = !draft.date.is_empty() && parse_due_date(draft.date.text()).is_none();
    let date_style = if date_invalid {
        Style::default().fg(app.theme.red).bg(row_bg)
    } else {
        field_style
    };
    let mut second = vec![
        Span::styled(" ".repeat(PREFIX_W), Style::default().bg(row_bg)),
        Span::styled("due ", Style::default().fg(app.theme.dim).bg(row_bg)),
    ];
    if draft.date.is_empty() && !date_focused {
        second.push(Span::styled(
            "YYYY-MM-DD",
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));
    } else {
        second.extend(input_spans(&draft.date, date_focused, date_style));
    }
    pad_to_width(&mut second, width, Style::default().bg(row_bg));

    vec![Line::from(first), Line::from(second)]
}

fn checkbox_spans(app: &App, completed: bool, row_bg: ratatui::style::Color) -> Vec<Span<'static>> {
    let box_color = if completed {
        app.theme.green
    } else {
        app.theme.text
    };
    vec![
        Span::styled(" ", Style::default().bg(row_bg)),
        Span::styled(checkbox(completed), Style::default().fg(box_color).bg(row_bg)),
        Span::styled(" ", Style::default().bg(row_bg)),
    ]
}

/// " [Edit] [Del] " (or "[Save]" while editing); colored on the cursor row
fn control_spans(app: &App, view: &TaskView, is_cursor: bool) -> Vec<Span<'static>> {
    let row_bg = row_bg(app, is_cursor);
    let (edit_color, del_color) = if is_cursor {
        let edit_color = match view.edit_state() {
            EditState::Display => app.theme.yellow,
            EditState::Editing(_) => app.theme.green,
        };
        (edit_color, app.theme.red)
    } else {
        (app.theme.dim, app.theme.dim)
    };
    let gap = Style::default().bg(row_bg);
    vec![
        Span::styled(" ", gap),
        Span::styled(
            format!("[{}]", view.edit_state().control_label()),
            Style::default().fg(edit_color).bg(row_bg),
        ),
        Span::styled(" ", gap),
        Span::styled("[Del]", Style::default().fg(del_color).bg(row_bg)),
        Span::styled(" ", gap),
    ]
}

fn row_bg(app: &App, is_cursor: bool) -> ratatui::style::Color {
    if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    }
}
