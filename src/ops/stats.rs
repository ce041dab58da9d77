use crate::model::Task;

/// Split tasks into (open, completed), both in collection order.
pub fn partition(tasks: &[Task]) -> (Vec<&Task>, Vec<&Task>) {
    tasks.iter().partition(|t| !t.completed)
}

/// Sidebar summary over the **unfiltered** collection.
///
/// Always derived from the full store snapshot, independent of the active
/// category filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    /// `completed / total * 100`; 0 for an empty collection, never NaN.
    pub percent: f64,
}

impl Summary {
    pub fn of(tasks: &[Task]) -> Summary {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        Summary {
            total,
            completed,
            percent,
        }
    }
}
