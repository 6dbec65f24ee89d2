use zen_atoms::tasks::TaskFilter;

/// Top-level navigation. The active project id exists exactly when the
/// workspace is open, so a dangling "active project in gallery" state is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Workspace { project_id: String },
}

/// Panel shown inside the workspace. Orthogonal to the screen; the choice
/// survives switching projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Board,
    List,
    Finance,
    Traffic,
    Onboarding,
}

/// Presentational state layered over the entity store. Never persisted and
/// never the authority for entity data.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub screen: Screen,
    pub panel: Panel,
    pub filter: TaskFilter,
    pub selected_task_id: Option<String>,
    pub doc_sidebar_open: bool,
    pub create_modal_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Gallery,
            panel: Panel::default(),
            filter: TaskFilter::default(),
            selected_task_id: None,
            doc_sidebar_open: false,
            create_modal_open: false,
        }
    }
}

impl ViewState {
    pub fn active_project_id(&self) -> Option<&str> {
        match &self.screen {
            Screen::Workspace { project_id } => Some(project_id),
            Screen::Gallery => None,
        }
    }

    pub fn open_project(&mut self, project_id: String) {
        self.screen = Screen::Workspace { project_id };
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Gallery;
    }

    pub fn select_task(&mut self, task_id: String) {
        self.selected_task_id = Some(task_id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_task_id = None;
    }

    pub fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    /// Filters are mutually exclusive; setting one replaces the previous.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn toggle_doc_sidebar(&mut self) {
        self.doc_sidebar_open = !self.doc_sidebar_open;
    }

    pub fn open_create_modal(&mut self) {
        self.create_modal_open = true;
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_gallery_with_no_selection() {
        let view = ViewState::default();
        assert_eq!(view.screen, Screen::Gallery);
        assert_eq!(view.active_project_id(), None);
        assert_eq!(view.panel, Panel::Board);
        assert!(!view.doc_sidebar_open);
    }

    #[test]
    fn open_and_close_round_trip() {
        let mut view = ViewState::default();
        view.open_project("p1".to_string());
        assert_eq!(view.active_project_id(), Some("p1"));

        view.go_home();
        assert_eq!(view.screen, Screen::Gallery);
        assert_eq!(view.active_project_id(), None);
    }

    #[test]
    fn panel_survives_project_switches() {
        let mut view = ViewState::default();
        view.open_project("p1".to_string());
        view.set_panel(Panel::Traffic);
        view.go_home();
        view.open_project("p2".to_string());
        assert_eq!(view.panel, Panel::Traffic);
    }

    #[test]
    fn setting_a_filter_replaces_the_previous_one() {
        let mut view = ViewState::default();
        view.set_filter(TaskFilter::Mine);
        view.set_filter(TaskFilter::Overdue);
        assert_eq!(view.filter, TaskFilter::Overdue);
    }
}
