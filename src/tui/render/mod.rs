pub mod alert_popup;
pub mod form_view;
pub mod help_overlay;
mod helpers;
pub mod list_view;
pub mod status_row;
pub mod tab_bar;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | add form (3 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // filter tabs + separator
            Constraint::Length(3), // task + due fields + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    form_view::render_form(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, area);
    }
}
