use chrono::{DateTime, Utc};

use super::model::{Priority, Task, TaskFilter};
use crate::columns::DONE_COLUMN_ID;

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Progress of a project, as the rounded percent of its tasks sitting in
/// the done column. A project with no tasks reads as 0.
pub fn project_progress(tasks: &[Task], project_id: &str) -> u8 {
    let project_tasks: Vec<&Task> = tasks.iter().filter(|t| t.project_id == project_id).collect();
    let done = project_tasks
        .iter()
        .filter(|t| t.column_id == DONE_COLUMN_ID)
        .count();
    percent(done, project_tasks.len())
}

/// Rounded percent of checked items on a task's checklist, 0 when empty.
pub fn checklist_progress(task: &Task) -> u8 {
    let done = task.checklist.iter().filter(|i| i.completed).count();
    percent(done, task.checklist.len())
}

/// Whether a task counts as overdue: it has a due date in the past and has
/// not been completed.
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    match task.due_date {
        Some(due) => due < now && !task.completed,
        None => false,
    }
}

/// Apply a single named filter to a project's tasks, preserving insertion
/// order (pure domain logic, no view state).
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    project_id: &str,
    filter: TaskFilter,
    current_member_id: &str,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.project_id == project_id)
        .filter(|t| match filter {
            TaskFilter::All => true,
            TaskFilter::Mine => t.assignee.as_deref() == Some(current_member_id),
            TaskFilter::Overdue => is_overdue(t, now),
            TaskFilter::Critical => t.priority == Priority::Critical,
        })
        .collect()
}

/// Count of overdue tasks in a project, used for gallery badges.
pub fn overdue_count(tasks: &[Task], project_id: &str, now: DateTime<Utc>) -> usize {
    tasks
        .iter()
        .filter(|t| t.project_id == project_id && is_overdue(t, now))
        .count()
}
