// ========== PROJECT ==========
pub use zen_atoms::projects::{
    Background, CreateProjectPayload, Project, ProjectCategory, ProjectStatus,
};

// ========== TASK ==========
pub use zen_atoms::tasks::{ChecklistItem, Comment, Priority, Task, TaskFilter};

// ========== BOARD ==========
pub use zen_atoms::columns::{Column, DONE_COLUMN_ID};
pub use zen_atoms::members::Member;

// ========== DOCUMENTATION ==========
pub use zen_atoms::docs::{DocFile, ProjectDoc};

// ========== SESSION ==========
pub use kanban_board::{BoardError, Dashboard, Panel, Screen, ViewState};

// ========== REMOTE RECORDS ==========
pub use zen_atoms::finance::{FinanceRecord, FinanceSummary, MemberCost};
pub use zen_atoms::moodboard::{MoodboardItem, MoodboardKind};
pub use zen_atoms::onboarding::{OnboardingStep, ServiceKind, StepStatus};
pub use zen_atoms::traffic::{Scenario, TrafficForecast, TrafficRecord};
