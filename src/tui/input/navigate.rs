use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus, InputTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('m') => {
            app.toggle_night_mode();
            return;
        }
        KeyCode::Tab => {
            app.focus = next_focus(app);
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Sidebar => handle_sidebar(app, key),
        Focus::Tasks => handle_tasks(app, key),
        Focus::Detail => handle_detail(app, key),
    }
}

fn next_focus(app: &App) -> Focus {
    match app.focus {
        Focus::Sidebar => Focus::Tasks,
        Focus::Tasks if app.detail.is_open() => Focus::Detail,
        Focus::Tasks => Focus::Sidebar,
        Focus::Detail => Focus::Sidebar,
    }
}

fn handle_sidebar(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.sidebar_cursor + 1 < app.nav_items.len() {
                app.sidebar_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sidebar_cursor = app.sidebar_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.select_category();
        }
        KeyCode::Char('n') => {
            app.input_buffer.clear();
            app.mode = Mode::Input(InputTarget::NewList);
        }
        _ => {}
    }
}

fn handle_tasks(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.task_cursor + 1 < app.display_order().len() {
                app.task_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        KeyCode::Char('a') => {
            app.input_buffer.clear();
            app.mode = Mode::Input(InputTarget::NewTask);
        }
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            if let Some(task) = app.task_at_cursor() {
                app.store.toggle_complete(&task.id);
            }
        }
        KeyCode::Char('s') => {
            if let Some(task) = app.task_at_cursor() {
                app.store.toggle_important(&task.id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(task) = app.task_at_cursor() {
                app.store.soft_delete(&task.id);
            }
        }
        KeyCode::Enter => {
            app.open_detail_for_cursor();
        }
        _ => {}
    }
}

fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_detail();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let steps = app.detail.session().map_or(0, |s| s.steps.len());
            if app.step_cursor + 1 < steps {
                app.step_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.step_cursor = app.step_cursor.saturating_sub(1);
        }
        KeyCode::Char('a') => {
            app.input_buffer.clear();
            app.mode = Mode::Input(InputTarget::NewStep);
        }
        KeyCode::Char('x') | KeyCode::Char('d') => {
            let cursor = app.step_cursor;
            if let Some(session) = app.detail.session_mut() {
                session.remove_step(cursor);
            }
        }
        KeyCode::Char('r') => {
            if let Some(session) = app.detail.session_mut() {
                session.set_reminder(chrono::Local::now());
            }
        }
        KeyCode::Char('u') => {
            app.input_buffer.clear();
            app.mode = Mode::Input(InputTarget::DueDate);
        }
        _ => {}
    }
}
