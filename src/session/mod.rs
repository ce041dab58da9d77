use chrono::{DateTime, Local, NaiveDate};

/// Scratch state for one open details panel.
///
/// The session has no durable link back to the task store: it carries the
/// task title for display only, and everything in it is discarded when the
/// panel closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailSession {
    pub task_title: String,
    pub steps: Vec<String>,
    pub reminder: Option<DateTime<Local>>,
    pub due_date: Option<NaiveDate>,
}

impl DetailSession {
    fn new(task_title: impl Into<String>) -> Self {
        DetailSession {
            task_title: task_title.into(),
            ..DetailSession::default()
        }
    }

    /// Append a step. The text is trimmed first; blank input is ignored.
    pub fn add_step(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.steps.push(text.to_string());
    }

    /// Remove the step at `index`; out-of-range indices are ignored.
    pub fn remove_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    /// Capture a reminder timestamp for display. No scheduling happens.
    pub fn set_reminder(&mut self, now: DateTime<Local>) {
        self.reminder = Some(now);
    }

    /// Store a due date for display.
    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.due_date = Some(date);
    }
}

/// The details panel: closed, or open on one task's session.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailEditor {
    #[default]
    Closed,
    Open(DetailSession),
}

impl DetailEditor {
    /// Open the panel on a task, starting a fresh session. Opening while
    /// already open replaces the session (the old one is discarded).
    pub fn open(&mut self, task_title: impl Into<String>) {
        *self = DetailEditor::Open(DetailSession::new(task_title));
    }

    /// Close the panel, discarding the session.
    pub fn close(&mut self) {
        *self = DetailEditor::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailEditor::Open(_))
    }

    pub fn session(&self) -> Option<&DetailSession> {
        match self {
            DetailEditor::Open(session) => Some(session),
            DetailEditor::Closed => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DetailSession> {
        match self {
            DetailEditor::Open(session) => Some(session),
            DetailEditor::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut editor = DetailEditor::default();
        assert!(!editor.is_open());

        editor.open("Buy groceries");
        assert!(editor.is_open());
        assert_eq!(editor.session().unwrap().task_title, "Buy groceries");

        editor.close();
        assert!(!editor.is_open());
        assert!(editor.session().is_none());
    }

    #[test]
    fn test_add_step_trims_and_ignores_blank() {
        let mut editor = DetailEditor::default();
        editor.open("T");
        let session = editor.session_mut().unwrap();
        session.add_step("  milk  ");
        session.add_step("");
        session.add_step("   ");
        session.add_step("eggs");
        assert_eq!(session.steps, vec!["milk", "eggs"]);
    }

    #[test]
    fn test_remove_step_out_of_range_is_noop() {
        let mut editor = DetailEditor::default();
        editor.open("T");
        let session = editor.session_mut().unwrap();
        session.add_step("one");
        session.remove_step(5);
        assert_eq!(session.steps, vec!["one"]);
        session.remove_step(0);
        assert!(session.steps.is_empty());
    }

    #[test]
    fn test_reminder_and_due_date() {
        let mut editor = DetailEditor::default();
        editor.open("T");
        let session = editor.session_mut().unwrap();
        let now = Local::now();
        session.set_reminder(now);
        assert_eq!(session.reminder, Some(now));

        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        session.set_due_date(date);
        assert_eq!(session.due_date, Some(date));
    }

    #[test]
    fn test_close_discards_state_and_reopen_is_fresh() {
        let mut editor = DetailEditor::default();
        editor.open("T");
        {
            let session = editor.session_mut().unwrap();
            session.add_step("step");
            session.set_reminder(Local::now());
        }
        editor.close();
        editor.open("T");
        let session = editor.session().unwrap();
        assert!(session.steps.is_empty());
        assert!(session.reminder.is_none());
        assert!(session.due_date.is_none());
    }
}
