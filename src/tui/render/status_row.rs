use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, InputTarget, Mode};

/// Render the status row: key hints in navigate mode, the active prompt
/// while entering text.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = match app.mode {
        Mode::Navigate => {
            let hint = match app.focus {
                Focus::Sidebar => " j/k move  Enter select  n new list  Tab pane  m theme  q quit",
                Focus::Tasks => {
                    " a add  x done  s star  d delete  Enter details  Tab pane  m theme  q quit"
                }
                Focus::Detail => {
                    " j/k move  a step  x remove  r reminder  u due date  Esc close  q quit"
                }
            };
            Line::from(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)))
        }
        Mode::Input(target) => {
            let prompt = match target {
                InputTarget::NewTask => " Add a task: ",
                InputTarget::NewStep => " Enter a step: ",
                InputTarget::NewList => " Enter list name: ",
                InputTarget::DueDate => " Due date (YYYY-MM-DD): ",
            };
            Line::from(vec![
                Span::styled(prompt, Style::default().fg(app.theme.dim).bg(bg)),
                Span::styled(
                    app.input_buffer.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ])
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
