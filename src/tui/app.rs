use std::io;

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Category, Config, Task, UiConfig};
use crate::ops::filter::filter_tasks;
use crate::ops::stats::{self, Summary};
use crate::ops::store::TaskStore;
use crate::session::DetailEditor;

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Tasks,
    Detail,
}

/// What an active text-entry prompt will do with its buffer on Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    /// Add a task to the store.
    NewTask,
    /// Add a step to the open detail session.
    NewStep,
    /// Add a user list to the sidebar.
    NewList,
    /// Set the detail session's due date (YYYY-MM-DD).
    DueDate,
}

/// Current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input(InputTarget),
}

/// Main application state. Everything the UI shows is re-derived from the
/// store snapshot on each draw; there is no cached filtered list.
pub struct App {
    pub store: TaskStore,
    /// Active category; explicit session state, never global.
    pub category: Category,
    /// Sidebar entries: the five built-ins followed by user lists.
    pub nav_items: Vec<Category>,
    pub detail: DetailEditor,
    pub focus: Focus,
    pub mode: Mode,
    pub input_buffer: String,
    pub sidebar_cursor: usize,
    pub task_cursor: usize,
    pub step_cursor: usize,
    pub theme: Theme,
    pub night_mode: bool,
    pub greeting: String,
    pub should_quit: bool,
    ui_config: UiConfig,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut nav_items: Vec<Category> = Category::builtin().to_vec();
        for label in &config.lists {
            let label = label.trim();
            if !label.is_empty() {
                nav_items.push(Category::List(label.to_string()));
            }
        }

        let category = config
            .default_category
            .as_deref()
            .map(Category::from_label)
            .unwrap_or(Category::AllTasks);
        let sidebar_cursor = nav_items.iter().position(|c| *c == category).unwrap_or(0);

        let night_mode = config.ui.theme != "light";
        let theme = Theme::from_config(&config.ui, night_mode);

        App {
            store: TaskStore::new(),
            category,
            nav_items,
            detail: DetailEditor::Closed,
            focus: Focus::Tasks,
            mode: Mode::Navigate,
            input_buffer: String::new(),
            sidebar_cursor,
            task_cursor: 0,
            step_cursor: 0,
            theme,
            night_mode,
            greeting: config.name.clone().unwrap_or_else(|| "there".to_string()),
            should_quit: false,
            ui_config: config.ui.clone(),
        }
    }

    /// The tasks visible under the active category, in collection order.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let today = Local::now().date_naive();
        filter_tasks(self.store.tasks(), &self.category, today)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Visible tasks in display order: open first, then completed.
    /// This is the list the task cursor indexes into.
    pub fn display_order(&self) -> Vec<Task> {
        let visible = self.visible_tasks();
        let (open, completed) = stats::partition(&visible);
        open.into_iter()
            .chain(completed)
            .cloned()
            .collect()
    }

    pub fn task_at_cursor(&self) -> Option<Task> {
        self.display_order().get(self.task_cursor).cloned()
    }

    /// Sidebar summary, always over the unfiltered collection regardless of
    /// the active filter.
    pub fn summary(&self) -> Summary {
        Summary::of(self.store.tasks())
    }

    /// Keep cursors inside the lists they index after any mutation.
    pub fn clamp_cursors(&mut self) {
        let task_count = self.display_order().len();
        self.task_cursor = self.task_cursor.min(task_count.saturating_sub(1));

        self.sidebar_cursor = self
            .sidebar_cursor
            .min(self.nav_items.len().saturating_sub(1));

        let step_count = self.detail.session().map_or(0, |s| s.steps.len());
        self.step_cursor = self.step_cursor.min(step_count.saturating_sub(1));
    }

    /// Activate the sidebar entry under the cursor.
    pub fn select_category(&mut self) {
        if let Some(cat) = self.nav_items.get(self.sidebar_cursor) {
            self.category = cat.clone();
            self.task_cursor = 0;
        }
    }

    /// Add a user list to the sidebar. Blank labels and duplicates are
    /// ignored.
    pub fn add_list(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        let list = Category::List(label.to_string());
        if !self.nav_items.contains(&list) {
            self.nav_items.push(list);
        }
    }

    /// Open the details panel for the task under the cursor.
    pub fn open_detail_for_cursor(&mut self) {
        if let Some(task) = self.task_at_cursor() {
            self.detail.open(task.title);
            self.step_cursor = 0;
            self.focus = Focus::Detail;
        }
    }

    /// Close the details panel, discarding the session.
    pub fn close_detail(&mut self) {
        self.detail.close();
        self.step_cursor = 0;
        if self.focus == Focus::Detail {
            self.focus = Focus::Tasks;
        }
    }

    pub fn toggle_night_mode(&mut self) {
        self.night_mode = !self.night_mode;
        self.theme = Theme::from_config(&self.ui_config, self.night_mode);
    }
}

/// Run the TUI application.
pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::handle_key(app, key);
            }
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_from_config() {
        let mut config = Config::default();
        config.name = Some("Sam".into());
        config.default_category = Some("Important".into());
        config.lists = vec!["Groceries".into(), "  ".into()];

        let app = App::new(&config);
        assert_eq!(app.greeting, "Sam");
        assert_eq!(app.category, Category::Important);
        assert_eq!(app.sidebar_cursor, 2); // Important is third built-in
        // Blank seeded list is dropped.
        assert_eq!(app.nav_items.len(), 6);
        assert_eq!(
            app.nav_items.last(),
            Some(&Category::List("Groceries".into()))
        );
    }

    #[test]
    fn test_display_order_open_then_completed() {
        let mut app = App::new(&Config::default());
        let a = app.store.add("a").unwrap();
        app.store.add("b");
        app.store.add("c");
        app.store.toggle_complete(&a.id);

        // Collection order is c, b, a; a is completed so it sorts last.
        let titles: Vec<String> = app.display_order().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_summary_ignores_active_filter() {
        let mut app = App::new(&Config::default());
        let a = app.store.add("a").unwrap();
        app.store.add("b");
        app.store.toggle_complete(&a.id);
        app.category = Category::Important; // filters everything out

        assert!(app.visible_tasks().is_empty());
        let summary = app.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = App::new(&Config::default());
        app.store.add("pick this");
        app.task_cursor = 0;
        app.open_detail_for_cursor();
        assert!(app.detail.is_open());
        assert_eq!(app.focus, Focus::Detail);
        assert_eq!(app.detail.session().unwrap().task_title, "pick this");

        app.close_detail();
        assert!(!app.detail.is_open());
        assert_eq!(app.focus, Focus::Tasks);
    }

    #[test]
    fn test_open_detail_with_no_tasks_is_noop() {
        let mut app = App::new(&Config::default());
        app.open_detail_for_cursor();
        assert!(!app.detail.is_open());
        assert_eq!(app.focus, Focus::Tasks);
    }

    #[test]
    fn test_add_list_ignores_blank_and_duplicates() {
        let mut app = App::new(&Config::default());
        let before = app.nav_items.len();
        app.add_list("   ");
        assert_eq!(app.nav_items.len(), before);
        app.add_list("Errands");
        app.add_list("Errands");
        assert_eq!(app.nav_items.len(), before + 1);
    }

    #[test]
    fn test_clamp_cursors_after_filter_change() {
        let mut app = App::new(&Config::default());
        app.store.add("a");
        app.store.add("b");
        app.task_cursor = 1;
        app.category = Category::Important;
        app.clamp_cursors();
        assert_eq!(app.task_cursor, 0);
    }

    #[test]
    fn test_toggle_night_mode_switches_theme() {
        let mut app = App::new(&Config::default());
        assert!(app.night_mode);
        let dark_bg = app.theme.background;
        app.toggle_night_mode();
        assert!(!app.night_mode);
        assert_ne!(app.theme.background, dark_bg);
    }
}
