use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Render the details panel for the open session: steps, reminder, due date.
/// Everything shown here is session state, discarded when the panel closes.
pub fn render_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.detail.session() else {
        return;
    };

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));

    let title_budget = (area.width as usize).saturating_sub(2);
    lines.push(Line::from(Span::styled(
        format!(" {}", truncate_to_width(&session.task_title, title_budget)),
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    // --- Steps ---
    lines.push(Line::from(Span::styled(" Steps", text_style)));
    if session.steps.is_empty() {
        lines.push(Line::from(Span::styled("   (none)", dim_style)));
    } else {
        let step_budget = (area.width as usize).saturating_sub(5);
        for (i, step) in session.steps.iter().enumerate() {
            let is_selected = app.focus == Focus::Detail && i == app.step_cursor;
            let row_bg = if is_selected { app.theme.selection_bg } else { bg };
            lines.push(Line::from(vec![
                Span::styled("   \u{2022} ", dim_style.bg(row_bg)),
                Span::styled(
                    truncate_to_width(step, step_budget),
                    bright_style.bg(row_bg),
                ),
            ]));
        }
    }
    lines.push(Line::from(""));

    // --- Reminder ---
    if let Some(reminder) = session.reminder {
        lines.push(Line::from(vec![
            Span::styled(" Reminder set for: ", dim_style),
            Span::styled(reminder.format("%Y-%m-%d %H:%M").to_string(), text_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" Reminder: ", dim_style),
            Span::styled("(none)", dim_style),
        ]));
    }

    // --- Due date ---
    if let Some(due) = session.due_date {
        lines.push(Line::from(vec![
            Span::styled(" Due date: ", dim_style),
            Span::styled(due.format("%Y-%m-%d").to_string(), text_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" Due date: ", dim_style),
            Span::styled("(none)", dim_style),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
