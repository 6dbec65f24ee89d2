use serde::{Deserialize, Serialize};

/// Contracted service a client is being onboarded onto.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    MediaManagement,
    VisualIdentity,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Pending,
    Waiting,
}

/// One milestone on the delivery timeline, `day` counted from kickoff.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OnboardingStep {
    pub name: String,
    pub day: u32,
    pub status: StepStatus,
}

fn step(name: &str, day: u32, status: StepStatus) -> OnboardingStep {
    OnboardingStep {
        name: name.to_string(),
        day,
        status,
    }
}

/// Fixed delivery workflow for a contracted service.
pub fn workflow_for(kind: ServiceKind) -> Vec<OnboardingStep> {
    match kind {
        ServiceKind::MediaManagement => vec![
            step("Kickoff Meeting", 1, StepStatus::Completed),
            step("Briefing Form", 2, StepStatus::Pending),
            step("Editorial Line", 7, StepStatus::Waiting),
            step("Creative Approval", 10, StepStatus::Waiting),
            step("Post Scheduling", 12, StepStatus::Waiting),
        ],
        ServiceKind::VisualIdentity => vec![
            step("Creative Briefing", 1, StepStatus::Completed),
            step("Research and Moodboard", 5, StepStatus::Pending),
            step("Concept Presentation", 12, StepStatus::Waiting),
            step("Refinement", 15, StepStatus::Waiting),
            step("Asset Delivery", 20, StepStatus::Waiting),
        ],
    }
}
