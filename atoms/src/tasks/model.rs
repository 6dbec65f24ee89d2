use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    Urgent,
    Medium,
    Low,
    OnTrack,
}

/// Named filter applied to a project's tasks before display. Selecting one
/// replaces the previous selection, filters never stack.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    #[default]
    All,
    Mine,
    Overdue,
    Critical,
}

/// Task domain model. `completed` and `column_id` are linked: completing a
/// task moves it to the done column, and dropping a task into the done
/// column completes it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    pub task_id: String,
    pub project_id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    /// Member id of the assignee, if any.
    pub assignee: Option<String>,
    pub column_id: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub cost: Option<f64>,
    #[serde(default)]
    pub is_template: bool,
    pub created_at: String,
}

/// Checklist entry owned by exactly one task. Completion percent over the
/// checklist is always derived, never stored.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChecklistItem {
    pub item_id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub comment_id: String,
    pub user_id: String,
    pub text: String,
    pub created_at: String,
}
