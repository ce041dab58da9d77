/// A sidebar entry: a named filter over the task collection.
///
/// Only `AllTasks`, `Today`, and `Important` have filter semantics.
/// `Planned` and `AssignedToMe` are placeholders that pass tasks through
/// unchanged, as do user-added lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    AllTasks,
    Today,
    Important,
    Planned,
    AssignedToMe,
    /// A user-added list, identified by its label.
    List(String),
}

impl Category {
    /// The five built-in categories, in sidebar order.
    pub fn builtin() -> [Category; 5] {
        [
            Category::AllTasks,
            Category::Today,
            Category::Important,
            Category::Planned,
            Category::AssignedToMe,
        ]
    }

    /// Display label, also used as the config-file spelling.
    pub fn label(&self) -> &str {
        match self {
            Category::AllTasks => "All Tasks",
            Category::Today => "Today",
            Category::Important => "Important",
            Category::Planned => "Planned",
            Category::AssignedToMe => "Assigned to me",
            Category::List(name) => name,
        }
    }

    /// Parse a label back into a category. Anything that is not a built-in
    /// label becomes a user list.
    pub fn from_label(label: &str) -> Category {
        match label {
            "All Tasks" => Category::AllTasks,
            "Today" => Category::Today,
            "Important" => Category::Important,
            "Planned" => Category::Planned,
            "Assigned to me" => Category::AssignedToMe,
            other => Category::List(other.to_string()),
        }
    }
}
