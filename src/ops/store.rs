use std::sync::Arc;

use chrono::Local;

use crate::model::Task;

/// An immutable view of the task collection at one point in time.
///
/// Holders of a snapshot never observe later mutations; `Arc::ptr_eq` on two
/// snapshots tells whether the store changed in between.
pub type Snapshot = Arc<Vec<Task>>;

/// Owns the canonical ordered task collection.
///
/// Every effective mutation builds a new `Vec` and swaps the snapshot whole,
/// so each user action is atomic. Invalid input (blank title, unknown id) is
/// a silent no-op and leaves the current snapshot in place.
///
/// New tasks prepend, so collection order is newest-first. Deletion is soft:
/// `soft_delete` marks the task complete and the collection never shrinks.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Snapshot,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Arc::new(Vec::new()),
            next_id: 1,
        }
    }

    /// Seed a store with existing tasks (collection order preserved).
    /// Id assignment continues above the highest numeric id present.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let max_id = tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        TaskStore {
            tasks: Arc::new(tasks),
            next_id: max_id + 1,
        }
    }

    /// The current snapshot. Cheap to clone and hold across mutations.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task with a fresh id and `created_at = now`, prepended to the
    /// collection. Returns a copy of the new task, or `None` (collection
    /// untouched) if the title is empty or whitespace.
    pub fn add(&mut self, title: &str) -> Option<Task> {
        if title.trim().is_empty() {
            return None;
        }
        let task = Task::new(self.next_id.to_string(), title, Local::now());
        self.next_id += 1;

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task.clone());
        next.extend(self.tasks.iter().cloned());
        self.tasks = Arc::new(next);
        Some(task)
    }

    /// Flip `completed` for the task with the given id. Unknown id is a no-op.
    pub fn toggle_complete(&mut self, id: &str) {
        self.update(id, |task| task.completed = !task.completed);
    }

    /// Flip `important` for the task with the given id. Unknown id is a no-op.
    pub fn toggle_important(&mut self, id: &str) {
        self.update(id, |task| task.important = !task.important);
    }

    /// Soft delete: mark the task complete, keeping it in the collection.
    /// No-op for an unknown id or a task that is already complete, so the
    /// snapshot only changes when the task state does.
    pub fn soft_delete(&mut self, id: &str) {
        let already_complete = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .is_none_or(|t| t.completed);
        if already_complete {
            return;
        }
        self.update(id, |task| task.completed = true);
    }

    /// Apply `f` to the matching task in a fresh snapshot. Unknown ids
    /// leave the current snapshot untouched.
    fn update<F: FnOnce(&mut Task)>(&mut self, id: &str, f: F) {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        let mut next: Vec<Task> = self.tasks.iter().cloned().collect();
        f(&mut next[idx]);
        self.tasks = Arc::new(next);
    }
}
