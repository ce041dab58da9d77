pub mod detail_panel;
pub mod sidebar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: lays out the panes and dispatches to the
/// per-region renderers.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    // Content: sidebar | task list | details panel (only while open)
    let columns = if app.detail.is_open() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Min(20),
                Constraint::Length(38),
            ])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(20)])
            .split(rows[0])
    };

    sidebar::render_sidebar(frame, app, columns[0]);
    task_list::render_task_list(frame, app, columns[1]);
    if app.detail.is_open() {
        detail_panel::render_detail_panel(frame, app, columns[2]);
    }

    status_row::render_status_row(frame, app, rows[1]);
}
