mod editing;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input(target) => editing::handle_input(app, target, key),
    }

    app.clamp_cursors();
}
