use chrono::NaiveDate;

use crate::model::{Category, Task};

/// Select the tasks visible under a category, preserving collection order.
///
/// - `AllTasks` passes everything through.
/// - `Today` keeps open tasks created on `reference_date` (date-only
///   comparison in local time; completed tasks are excluded even if created
///   today).
/// - `Important` keeps starred tasks regardless of completion.
/// - `Planned` and `AssignedToMe` have no filter semantics yet and pass
///   everything through, as do user lists and anything else: unknown
///   categories degrade to the `AllTasks` behavior.
///
/// The function is total: no category is an error.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    category: &Category,
    reference_date: NaiveDate,
) -> Vec<&'a Task> {
    match category {
        Category::Today => tasks
            .iter()
            .filter(|t| !t.completed && t.created_at.date_naive() == reference_date)
            .collect(),
        Category::Important => tasks.iter().filter(|t| t.important).collect(),
        Category::AllTasks
        | Category::Planned
        | Category::AssignedToMe
        | Category::List(_) => tasks.iter().collect(),
    }
}
