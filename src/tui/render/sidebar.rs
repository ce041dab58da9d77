use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Render the sidebar: greeting, categories, user lists, and the summary
/// block. The summary is always computed over the unfiltered collection.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    // Nav list on top, summary pinned to the bottom.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" Hey, {}", app.greeting),
        bright_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let label_width = (area.width as usize).saturating_sub(4);
    for (i, item) in app.nav_items.iter().enumerate() {
        let is_active = *item == app.category;
        let is_selected = app.focus == Focus::Sidebar && i == app.sidebar_cursor;

        let marker = if is_active { "\u{258E} " } else { "  " };
        let mut style = if is_active { bright_style } else { text_style };
        if is_selected {
            style = style.bg(app.theme.selection_bg);
        }

        let label = truncate_to_width(item.label(), label_width);
        lines.push(Line::from(vec![
            Span::styled(
                marker,
                Style::default().fg(app.theme.highlight).bg(if is_selected {
                    app.theme.selection_bg
                } else {
                    bg
                }),
            ),
            Span::styled(format!("{:<width$}", label, width = label_width), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  + add list (n)", dim_style)));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, chunks[0]);

    render_summary(frame, app, chunks[1]);
}

/// Completed count, total, and a progress gauge over the full collection.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let summary = app.summary();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            " Tasks ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            format!("{} done / {}", summary.completed, summary.total),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(header).style(Style::default().bg(bg)), rows[0]);

    let gauge = Gauge::default()
        .ratio(summary.percent / 100.0)
        .label(format!("{:.0}%", summary.percent))
        .gauge_style(Style::default().fg(app.theme.green).bg(app.theme.selection_bg));
    frame.render_widget(gauge, rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_sidebar_lists_categories_and_greeting() {
        let app = sample_app(&["one"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("Hey, there"));
        for label in ["All Tasks", "Today", "Important", "Planned", "Assigned to me"] {
            assert!(output.contains(label), "missing {label} in:\n{output}");
        }
    }

    #[test]
    fn test_sidebar_summary_uses_full_collection() {
        let mut app = sample_app(&["a", "b"]);
        let id = app.store.tasks()[0].id.clone();
        app.store.toggle_complete(&id);
        // An active filter that hides everything must not change the counts.
        app.category = Category::Important;

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("1 done / 2"), "summary missing in:\n{output}");
        assert!(output.contains("50%"));
    }

    #[test]
    fn test_sidebar_shows_user_lists() {
        let mut app = sample_app(&[]);
        app.add_list("Groceries");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("Groceries"));
    }

    #[test]
    fn test_sidebar_empty_store_is_zero_percent() {
        let app = sample_app(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_sidebar(frame, &app, area);
        });
        assert!(output.contains("0 done / 0"));
        assert!(output.contains("0%"));
    }
}
