use std::collections::HashMap;

use chrono::Utc;

use zen_atoms::columns::{default_columns, Column, DONE_COLUMN_ID};
use zen_atoms::docs::ProjectDoc;
use zen_atoms::members::Member;
use zen_atoms::projects::{
    Background, CreateProjectPayload, Project, ProjectCategory, ProjectStatus,
};
use zen_atoms::tasks::{self, Priority, Task, TaskFilter};

use crate::error::BoardError;
use crate::view::{Panel, ViewState};

/// The whole dashboard session: entity collections, the member driving the
/// session, and the view selection. All mutation flows through these
/// methods; entities are replaced whole (never patched in place through an
/// external reference), so readers only ever see complete snapshots.
#[derive(Debug)]
pub struct Dashboard {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    columns: Vec<Column>,
    members: Vec<Member>,
    docs: HashMap<String, ProjectDoc>,
    current_member_id: String,
    view: ViewState,
}

impl Dashboard {
    /// Fresh session for a member, starting in the gallery with the default
    /// lane set and an empty store.
    pub fn new(current_member_id: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            columns: default_columns(),
            members,
            docs: HashMap::new(),
            current_member_id: current_member_id.into(),
            view: ViewState::default(),
        }
    }

    // ===== READ SIDE =====

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn current_member_id(&self) -> &str {
        &self.current_member_id
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active_project(&self) -> Option<&Project> {
        let id = self.view.active_project_id()?;
        self.projects.iter().find(|p| p.project_id == id)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.view.selected_task_id.as_deref()?;
        self.tasks.iter().find(|t| t.task_id == id)
    }

    /// Documentation note for a project. Projects with no stored doc read
    /// as the empty doc; this never fails.
    pub fn document(&self, project_id: &str) -> ProjectDoc {
        self.docs.get(project_id).cloned().unwrap_or_default()
    }

    fn column(&self, column_id: &str) -> Result<&Column, BoardError> {
        self.columns
            .iter()
            .find(|c| c.column_id == column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.to_string()))
    }

    fn project(&self, project_id: &str) -> Result<&Project, BoardError> {
        self.projects
            .iter()
            .find(|p| p.project_id == project_id)
            .ok_or_else(|| BoardError::UnknownProject(project_id.to_string()))
    }

    // ===== DERIVED VIEWS =====

    /// Percent of a project's tasks sitting in the done column.
    pub fn progress_of(&self, project_id: &str) -> u8 {
        tasks::project_progress(&self.tasks, project_id)
    }

    /// A project's tasks under a named filter, in insertion order.
    pub fn filtered_tasks(&self, project_id: &str, filter: TaskFilter) -> Vec<&Task> {
        tasks::filter_tasks(
            &self.tasks,
            project_id,
            filter,
            &self.current_member_id,
            Utc::now(),
        )
    }

    /// The active project's tasks under the currently selected filter.
    /// Empty in the gallery.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.view.active_project_id() {
            Some(project_id) => self.filtered_tasks(project_id, self.view.filter),
            None => Vec::new(),
        }
    }

    /// Overdue-task badge count for a project card in the gallery.
    pub fn overdue_count(&self, project_id: &str) -> usize {
        tasks::overdue_count(&self.tasks, project_id, Utc::now())
    }

    // ===== MUTATIONS: PROJECTS =====

    /// Create a project, filling unset fields with the house defaults. The
    /// new project becomes active and the workspace opens. Never fails.
    pub fn create_project(&mut self, payload: CreateProjectPayload) -> Project {
        let project = Project {
            project_id: uuid::Uuid::new_v4().to_string(),
            name: payload.name.unwrap_or_else(|| "New Project".to_string()),
            description: payload.description.unwrap_or_default(),
            emoji: payload.emoji.unwrap_or_else(|| "📁".to_string()),
            background: payload.background.unwrap_or_default(),
            category: payload.category.unwrap_or(ProjectCategory::Marketing),
            members: vec![self.current_member_id.clone()],
            is_favorite: false,
            status: ProjectStatus::Active,
            created_at: Utc::now().to_rfc3339(),
            drive_url: None,
        };
        tracing::info!("Created project {} ({})", project.name, project.project_id);

        self.view.open_project(project.project_id.clone());
        self.view.close_create_modal();
        self.projects.push(project.clone());
        project
    }

    pub fn toggle_project_favorite(&mut self, project_id: &str) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.project_id == project_id) {
            project.is_favorite = !project.is_favorite;
        }
    }

    /// Replace a project's background. The raw value is interpreted once at
    /// this boundary; no-op when the project is unknown.
    pub fn change_project_background(&mut self, project_id: &str, value: &str) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.project_id == project_id) {
            project.background = Background::parse(value);
        }
    }

    /// Delete a project together with its tasks and doc. The workspace
    /// falls back to the gallery when the deleted project was active.
    pub fn delete_project(&mut self, project_id: &str) {
        let before = self.projects.len();
        self.projects.retain(|p| p.project_id != project_id);
        if self.projects.len() == before {
            return;
        }

        self.tasks.retain(|t| t.project_id != project_id);
        self.docs.remove(project_id);

        if self.view.active_project_id() == Some(project_id) {
            self.view.go_home();
        }
        if let Some(selected) = self.view.selected_task_id.clone() {
            if !self.tasks.iter().any(|t| t.task_id == selected) {
                self.view.clear_selection();
            }
        }
        tracing::info!("Deleted project {} and its tasks", project_id);
    }

    // ===== MUTATIONS: TASKS =====

    /// Append a task to a column of the active project. Fails in the
    /// gallery and for unknown columns.
    pub fn create_task(&mut self, column_id: &str, title: &str) -> Result<Task, BoardError> {
        let project_id = self
            .view
            .active_project_id()
            .ok_or(BoardError::NoActiveProject)?
            .to_string();
        self.column(column_id)?;

        let task = Task {
            task_id: uuid::Uuid::new_v4().to_string(),
            project_id,
            title: title.to_string(),
            completed: column_id == DONE_COLUMN_ID,
            priority: Priority::Low,
            due_date: None,
            assignee: None,
            column_id: column_id.to_string(),
            description: None,
            tags: vec![],
            checklist: vec![],
            comments: vec![],
            cost: None,
            is_template: false,
            created_at: Utc::now().to_rfc3339(),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Full-entity upsert: replace the stored task with the same id, or
    /// append when the id is new. Callers supply the complete entity.
    pub fn update_task(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.task_id == task.task_id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Remove a task. Unknown ids are a no-op; deleting the selected task
    /// clears the selection.
    pub fn delete_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.task_id != task_id);
        if self.view.selected_task_id.as_deref() == Some(task_id) {
            self.view.clear_selection();
        }
    }

    /// Flip a task's completion. Completing always moves the task to the
    /// done column; un-completing leaves the column alone, since the prior
    /// column is not tracked. Unknown ids are a no-op.
    pub fn toggle_task_completion(&mut self, task_id: &str) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.task_id == task_id) {
            task.completed = !task.completed;
            if task.completed {
                task.column_id = DONE_COLUMN_ID.to_string();
            }
        }
    }

    /// Drop a task into a column, recomputing completion from the target.
    /// Unknown columns are rejected; a task deleted mid-drag is a no-op.
    pub fn move_task(&mut self, task_id: &str, target_column_id: &str) -> Result<(), BoardError> {
        self.column(target_column_id)?;
        if let Some(task) = self.tasks.iter_mut().find(|t| t.task_id == task_id) {
            task.column_id = target_column_id.to_string();
            task.completed = target_column_id == DONE_COLUMN_ID;
        } else {
            tracing::warn!("Move target task {} no longer exists", task_id);
        }
        Ok(())
    }

    /// Clone the active project's template task into a fresh editable task
    /// in the todo lane and select it.
    pub fn instantiate_template(&mut self) -> Result<Task, BoardError> {
        let project_id = self
            .view
            .active_project_id()
            .ok_or(BoardError::NoActiveProject)?
            .to_string();
        let template = self
            .tasks
            .iter()
            .find(|t| t.is_template && t.project_id == project_id)
            .ok_or(BoardError::NoTemplate)?
            .clone();

        let task = Task {
            task_id: uuid::Uuid::new_v4().to_string(),
            title: format!("New: {}", template.title),
            completed: false,
            column_id: "todo".to_string(),
            is_template: false,
            created_at: Utc::now().to_rfc3339(),
            ..template
        };
        self.update_task(task.clone());
        self.view.select_task(task.task_id.clone());
        Ok(task)
    }

    // ===== MUTATIONS: DOCS =====

    /// Full replace of a project's documentation note.
    pub fn update_document(&mut self, project_id: &str, doc: ProjectDoc) -> Result<(), BoardError> {
        self.project(project_id)?;
        self.docs.insert(project_id.to_string(), doc);
        Ok(())
    }

    /// Replace the doc of the active project; errors in the gallery.
    pub fn update_active_document(&mut self, doc: ProjectDoc) -> Result<(), BoardError> {
        let project_id = self
            .view
            .active_project_id()
            .ok_or(BoardError::NoActiveProject)?
            .to_string();
        self.docs.insert(project_id, doc);
        Ok(())
    }

    // ===== VIEW TRANSITIONS =====

    /// Gallery to workspace. Unknown projects are rejected so the view can
    /// never point at a project the store does not hold.
    pub fn open_project(&mut self, project_id: &str) -> Result<(), BoardError> {
        self.project(project_id)?;
        self.view.open_project(project_id.to_string());
        Ok(())
    }

    /// Workspace back to the gallery.
    pub fn go_home(&mut self) {
        self.view.go_home();
    }

    /// Open the task detail for an existing task; unknown ids are a no-op.
    pub fn select_task(&mut self, task_id: &str) {
        if self.tasks.iter().any(|t| t.task_id == task_id) {
            self.view.select_task(task_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.view.clear_selection();
    }

    pub fn set_panel(&mut self, panel: Panel) {
        self.view.set_panel(panel);
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.view.set_filter(filter);
    }

    pub fn toggle_doc_sidebar(&mut self) {
        self.view.toggle_doc_sidebar();
    }

    pub fn open_create_modal(&mut self) {
        self.view.open_create_modal();
    }

    pub fn close_create_modal(&mut self) {
        self.view.close_create_modal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Screen;
    use chrono::{Duration, Utc};
    use zen_atoms::docs::DocFile;

    fn member(id: &str, name: &str) -> Member {
        Member {
            member_id: id.to_string(),
            name: name.to_string(),
            avatar: format!("https://i.pravatar.cc/150?u={}", id),
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new("m1", vec![member("m1", "Ana"), member("m2", "Bruno")])
    }

    fn dashboard_with_project() -> Dashboard {
        let mut dash = dashboard();
        dash.create_project(CreateProjectPayload::default());
        dash
    }

    #[test]
    fn create_project_fills_defaults_and_opens_workspace() {
        let mut dash = dashboard();
        dash.open_create_modal();
        let project = dash.create_project(CreateProjectPayload::default());

        assert_eq!(project.name, "New Project");
        assert_eq!(project.emoji, "📁");
        assert_eq!(project.category, ProjectCategory::Marketing);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.members, vec!["m1".to_string()]);
        assert!(!project.is_favorite);
        assert_eq!(project.background, Background::default());

        assert_eq!(
            dash.view().active_project_id(),
            Some(project.project_id.as_str())
        );
        assert!(!dash.view().create_modal_open);
    }

    #[test]
    fn create_task_requires_an_active_project() {
        let mut dash = dashboard();
        let err = dash.create_task("todo", "orphan").unwrap_err();
        assert_eq!(err, BoardError::NoActiveProject);
    }

    #[test]
    fn create_task_appends_with_defaults() {
        let mut dash = dashboard_with_project();
        let first = dash.create_task("todo", "first").unwrap();
        let second = dash.create_task("todo", "second").unwrap();

        assert_eq!(first.priority, Priority::Low);
        assert!(!first.completed);
        assert!(first.checklist.is_empty());
        assert!(first.comments.is_empty());

        let ids: Vec<&str> = dash.tasks().iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec![first.task_id.as_str(), second.task_id.as_str()]);
    }

    #[test]
    fn create_task_rejects_unknown_columns() {
        let mut dash = dashboard_with_project();
        let err = dash.create_task("backlog", "nope").unwrap_err();
        assert_eq!(err, BoardError::UnknownColumn("backlog".to_string()));
    }

    #[test]
    fn toggle_completion_is_asymmetric() {
        let mut dash = dashboard_with_project();
        let task = dash.create_task("todo", "ship it").unwrap();

        dash.toggle_task_completion(&task.task_id);
        let stored = &dash.tasks()[0];
        assert!(stored.completed);
        assert_eq!(stored.column_id, DONE_COLUMN_ID);

        // Un-completing does not restore the original column.
        dash.toggle_task_completion(&task.task_id);
        let stored = &dash.tasks()[0];
        assert!(!stored.completed);
        assert_eq!(stored.column_id, DONE_COLUMN_ID);
    }

    #[test]
    fn move_task_round_trip_recomputes_completion() {
        let mut dash = dashboard_with_project();
        let task = dash.create_task("todo", "drag me").unwrap();

        dash.move_task(&task.task_id, "done").unwrap();
        assert!(dash.tasks()[0].completed);

        dash.move_task(&task.task_id, "todo").unwrap();
        let stored = &dash.tasks()[0];
        assert!(!stored.completed);
        assert_eq!(stored.column_id, "todo");
    }

    #[test]
    fn move_task_rejects_unknown_columns() {
        let mut dash = dashboard_with_project();
        let task = dash.create_task("todo", "stay put").unwrap();
        let err = dash.move_task(&task.task_id, "limbo").unwrap_err();
        assert_eq!(err, BoardError::UnknownColumn("limbo".to_string()));
        assert_eq!(dash.tasks()[0].column_id, "todo");
    }

    #[test]
    fn move_of_a_deleted_task_is_a_noop() {
        let mut dash = dashboard_with_project();
        let task = dash.create_task("todo", "gone").unwrap();
        dash.delete_task(&task.task_id);
        // Drop lands after a concurrent delete of the dragged task.
        dash.move_task(&task.task_id, "done").unwrap();
        assert!(dash.tasks().is_empty());
    }

    #[test]
    fn completed_tasks_always_sit_in_the_done_column() {
        let mut dash = dashboard_with_project();
        let a = dash.create_task("todo", "a").unwrap();
        let b = dash.create_task("inprogress", "b").unwrap();
        let c = dash.create_task("review", "c").unwrap();

        dash.toggle_task_completion(&a.task_id);
        dash.move_task(&b.task_id, "done").unwrap();
        dash.move_task(&c.task_id, "inprogress").unwrap();
        dash.toggle_task_completion(&c.task_id);
        dash.move_task(&b.task_id, "review").unwrap();

        for task in dash.tasks() {
            if task.completed {
                assert_eq!(task.column_id, DONE_COLUMN_ID);
            }
        }
    }

    #[test]
    fn update_task_replaces_by_id_or_inserts() {
        let mut dash = dashboard_with_project();
        let mut task = dash.create_task("todo", "draft").unwrap();

        task.title = "final".to_string();
        task.priority = Priority::Urgent;
        dash.update_task(task.clone());
        assert_eq!(dash.tasks().len(), 1);
        assert_eq!(dash.tasks()[0].title, "final");
        assert_eq!(dash.tasks()[0].priority, Priority::Urgent);

        task.task_id = "brand-new".to_string();
        dash.update_task(task);
        assert_eq!(dash.tasks().len(), 2);
    }

    #[test]
    fn delete_task_clears_only_the_matching_selection() {
        let mut dash = dashboard_with_project();
        let kept = dash.create_task("todo", "kept").unwrap();
        let removed = dash.create_task("todo", "removed").unwrap();

        dash.select_task(&kept.task_id);
        dash.delete_task(&removed.task_id);
        assert_eq!(
            dash.view().selected_task_id.as_deref(),
            Some(kept.task_id.as_str())
        );

        dash.delete_task(&kept.task_id);
        assert_eq!(dash.view().selected_task_id, None);

        // Unknown ids are a no-op.
        dash.delete_task("missing");
        assert!(dash.tasks().is_empty());
    }

    #[test]
    fn toggle_favorite_flips_and_ignores_unknown_ids() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();

        dash.toggle_project_favorite(&id);
        assert!(dash.projects()[0].is_favorite);
        dash.toggle_project_favorite("missing");
        assert!(dash.projects()[0].is_favorite);
    }

    #[test]
    fn documents_default_to_empty_and_replace_whole() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();
        assert_eq!(dash.document(&id), ProjectDoc::default());

        let doc = ProjectDoc {
            content: "Goal: 500 qualified leads.".to_string(),
            files: vec![DocFile {
                name: "briefing.pdf".to_string(),
                url: "#".to_string(),
            }],
        };
        dash.update_document(&id, doc.clone()).unwrap();
        assert_eq!(dash.document(&id), doc);

        let err = dash
            .update_document("missing", ProjectDoc::default())
            .unwrap_err();
        assert_eq!(err, BoardError::UnknownProject("missing".to_string()));
    }

    #[test]
    fn active_document_update_needs_a_workspace() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();
        let doc = ProjectDoc {
            content: "channels: instagram, ads".to_string(),
            files: vec![],
        };
        dash.update_active_document(doc.clone()).unwrap();
        assert_eq!(dash.document(&id), doc);

        dash.go_home();
        assert_eq!(
            dash.update_active_document(ProjectDoc::default()).unwrap_err(),
            BoardError::NoActiveProject
        );
    }

    #[test]
    fn change_background_interprets_the_raw_value() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();

        dash.change_project_background(&id, "https://images.unsplash.com/photo-1");
        assert_eq!(
            dash.projects()[0].background,
            Background::Image {
                url: "https://images.unsplash.com/photo-1".to_string()
            }
        );

        dash.change_project_background(&id, "linear-gradient(to right, #000, #fff)");
        assert_eq!(
            dash.projects()[0].background,
            Background::Gradient {
                css: "linear-gradient(to right, #000, #fff)".to_string()
            }
        );
    }

    #[test]
    fn delete_project_cascades_to_tasks_and_doc() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();
        let task = dash.create_task("todo", "will vanish").unwrap();
        dash.select_task(&task.task_id);
        dash.update_document(
            &id,
            ProjectDoc {
                content: "notes".to_string(),
                files: vec![],
            },
        )
        .unwrap();

        dash.delete_project(&id);

        assert!(dash.projects().is_empty());
        assert!(dash.tasks().is_empty());
        assert_eq!(dash.document(&id), ProjectDoc::default());
        assert_eq!(dash.view().screen, Screen::Gallery);
        assert_eq!(dash.view().selected_task_id, None);
    }

    #[test]
    fn instantiate_template_clones_into_todo() {
        let mut dash = dashboard_with_project();
        let mut template = dash.create_task("review", "API setup").unwrap();
        template.is_template = true;
        template.priority = Priority::Medium;
        dash.update_task(template.clone());

        let clone = dash.instantiate_template().unwrap();
        assert_eq!(clone.title, "New: API setup");
        assert_eq!(clone.column_id, "todo");
        assert!(!clone.is_template);
        assert!(!clone.completed);
        assert_eq!(clone.priority, Priority::Medium);
        assert_ne!(clone.task_id, template.task_id);
        assert_eq!(
            dash.view().selected_task_id.as_deref(),
            Some(clone.task_id.as_str())
        );
        assert_eq!(dash.tasks().len(), 2);
    }

    #[test]
    fn instantiate_template_without_one_fails() {
        let mut dash = dashboard_with_project();
        assert_eq!(dash.instantiate_template().unwrap_err(), BoardError::NoTemplate);

        dash.go_home();
        assert_eq!(
            dash.instantiate_template().unwrap_err(),
            BoardError::NoActiveProject
        );
    }

    #[test]
    fn progress_counts_done_column_occupancy() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();
        assert_eq!(dash.progress_of(&id), 0);

        let a = dash.create_task("todo", "a").unwrap();
        dash.create_task("todo", "b").unwrap();
        dash.create_task("todo", "c").unwrap();
        dash.move_task(&a.task_id, "done").unwrap();

        assert_eq!(dash.progress_of(&id), 33);
    }

    #[test]
    fn visible_tasks_follow_the_selected_filter() {
        let mut dash = dashboard_with_project();
        let mut mine = dash.create_task("todo", "mine").unwrap();
        mine.assignee = Some("m1".to_string());
        dash.update_task(mine);
        dash.create_task("todo", "unassigned").unwrap();

        assert_eq!(dash.visible_tasks().len(), 2);
        dash.set_filter(TaskFilter::Mine);
        let visible = dash.visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "mine");

        dash.go_home();
        assert!(dash.visible_tasks().is_empty());
    }

    #[test]
    fn overdue_badge_ignores_completed_tasks() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();
        let yesterday = Utc::now() - Duration::days(1);

        let mut late = dash.create_task("todo", "late").unwrap();
        late.due_date = Some(yesterday);
        dash.update_task(late);

        let mut shipped = dash.create_task("todo", "shipped").unwrap();
        shipped.due_date = Some(yesterday);
        dash.update_task(shipped.clone());
        dash.move_task(&shipped.task_id, "done").unwrap();

        assert_eq!(dash.overdue_count(&id), 1);
    }

    #[test]
    fn open_project_validates_and_go_home_clears() {
        let mut dash = dashboard_with_project();
        let id = dash.projects()[0].project_id.clone();

        dash.go_home();
        assert!(dash.active_project().is_none());

        assert_eq!(
            dash.open_project("missing").unwrap_err(),
            BoardError::UnknownProject("missing".to_string())
        );
        dash.open_project(&id).unwrap();
        assert_eq!(
            dash.active_project().map(|p| p.project_id.as_str()),
            Some(id.as_str())
        );
    }
}
