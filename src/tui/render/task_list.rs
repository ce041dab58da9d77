use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::ops::stats;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Render the task list: open tasks first, then a `Completed` header and the
/// completed tasks. The whole list is re-derived from the store snapshot on
/// every draw.
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let visible = app.visible_tasks();
    let (open, completed) = stats::partition(&visible);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {}", app.category.label()),
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if open.is_empty() && completed.is_empty() {
        lines.push(Line::from(Span::styled(" No tasks yet. Press a to add one", dim_style)));
    }

    // The cursor indexes open tasks then completed tasks, matching
    // App::display_order.
    let mut row = 0usize;
    let has_completed = !completed.is_empty();
    for task in open {
        lines.push(task_line(app, task, row, area.width));
        row += 1;
    }

    if has_completed {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Completed", dim_style)));
        for task in completed {
            lines.push(task_line(app, task, row, area.width));
            row += 1;
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line(app: &App, task: &Task, row: usize, width: u16) -> Line<'static> {
    let is_selected = app.focus == Focus::Tasks && row == app.task_cursor;
    let bg = if is_selected {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let star = if task.important { "\u{2605} " } else { "  " };

    let mut title_style = if task.completed {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(app.theme.text_bright).bg(bg)
    };
    if is_selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    // " [x] ★ " prefix is 8 cells
    let title_budget = (width as usize).saturating_sub(8);
    let title = truncate_to_width(&task.title, title_budget);

    Line::from(vec![
        Span::styled(
            format!(" {} ", checkbox),
            Style::default()
                .fg(if task.completed {
                    app.theme.green
                } else {
                    app.theme.text
                })
                .bg(bg),
        ),
        Span::styled(
            star,
            Style::default()
                .fg(if task.important {
                    app.theme.yellow
                } else {
                    app.theme.dim
                })
                .bg(bg),
        ),
        Span::styled(title, title_style),
    ])
}
