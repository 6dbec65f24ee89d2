pub mod model;

pub use model::{workflow_for, OnboardingStep, ServiceKind, StepStatus};
