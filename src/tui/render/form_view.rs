use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{EditField, parse_due_date};
use crate::tui::app::{App, Mode};
use crate::util::line_input::LineInput;

use super::helpers::input_spans;

const TEXT_PLACEHOLDER: &str = "What needs doing?";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD (optional)";

/// Render the add form: task field, due-date field, separator
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let in_form = app.mode == Mode::Form;
    let form = &app.form;

    let date_invalid = !form.date.is_empty() && parse_due_date(form.date.text()).is_none();
    let date_style = if date_invalid {
        Style::default().fg(app.theme.red).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let mut lines = vec![
        field_line(
            app,
            " Task \u{25B8} ",
            &form.text,
            in_form && form.focus == EditField::Text,
            Style::default().fg(app.theme.text_bright).bg(bg),
            TEXT_PLACEHOLDER,
        ),
        field_line(
            app,
            " Due  \u{25B8} ",
            &form.date,
            in_form && form.focus == EditField::Date,
            date_style,
            DATE_PLACEHOLDER,
        ),
    ];
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn field_line(
    app: &App,
    label: &'static str,
    input: &LineInput,
    focused: bool,
    style: Style,
    placeholder: &'static str,
) -> Line<'static> {
    let bg = app.theme.background;
    let label_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let mut spans = vec![Span::styled(label, label_style)];
    if input.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(input_spans(input, focused, style));
    }
    Line::from(spans)
}
