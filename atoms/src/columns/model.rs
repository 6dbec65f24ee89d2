use serde::{Deserialize, Serialize};

/// Sentinel column that marks a task as completed when it lands there.
pub const DONE_COLUMN_ID: &str = "done";

/// A board lane. Columns are a static ordered set; tasks reference them
/// by `column_id` and columns never own tasks.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Column {
    pub column_id: String,
    pub title: String,
}

impl Column {
    pub fn new(column_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
        }
    }
}

/// The default lane set every board starts with.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do"),
        Column::new("inprogress", "In Progress"),
        Column::new("review", "In Review"),
        Column::new(DONE_COLUMN_ID, "Done"),
    ]
}
