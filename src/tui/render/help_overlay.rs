use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" List", header_style)));
    for (keys, desc) in [
        (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
        (" g/G", "Jump to top/bottom"),
        (" Space/x", "Mark done / not done"),
        (" e", "Edit task, or save an open edit"),
        (" Enter", "Resume typing into an open edit"),
        (" d/Del", "Delete task"),
        (" a/i", "Add a task"),
        (" q", "Quit"),
    ] {
        add_binding(&mut lines, keys, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Filters", header_style)));
    for (keys, desc) in [
        (" 1", "All tasks"),
        (" 2", "Active tasks"),
        (" 3", "Completed tasks"),
        (" f/F", "Next/previous filter"),
    ] {
        add_binding(&mut lines, keys, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Typing", header_style)));
    for (keys, desc) in [
        (" Enter", "Add task / save edit"),
        (" Tab", "Switch between text and due date"),
        (" Esc", "Stop typing (edits stay open)"),
        (" Ctrl-U", "Clear field"),
    ] {
        add_binding(&mut lines, keys, desc, key_style, desc_style);
    }

    let height = (lines.len() as u16 + 2).min(area.height);
    let overlay_area = centered_rect(60, height, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(" Key Bindings ", header_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding(
    lines: &mut Vec<Line<'static>>,
    keys: &'static str,
    desc: &'static str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", keys), key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Rect centered in `area`, `percent_x` of its width and `height` rows tall
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
