use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, InputTarget, Mode};

/// Handle a key while a text-entry prompt is active. Enter commits the
/// buffer to its target, Esc cancels. Invalid commits (blank text, bad
/// dates) are dropped silently, matching the core's no-op policy.
pub(super) fn handle_input(app: &mut App, target: InputTarget, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            commit(app, target);
            app.input_buffer.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => {
            app.input_buffer.push(c);
        }
        _ => {}
    }
}

fn commit(app: &mut App, target: InputTarget) {
    let text = app.input_buffer.clone();
    match target {
        InputTarget::NewTask => {
            if app.store.add(&text).is_some() {
                // The new task lands at the top of the open list.
                app.task_cursor = 0;
            }
        }
        InputTarget::NewStep => {
            if let Some(session) = app.detail.session_mut() {
                session.add_step(&text);
            }
        }
        InputTarget::NewList => {
            app.add_list(&text);
        }
        InputTarget::DueDate => {
            if let Some(session) = app.detail.session_mut()
                && let Ok(date) = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            {
                session.set_due_date(date);
            }
        }
    }
}
