pub mod columns;
pub mod docs;
pub mod finance;
pub mod members;
pub mod moodboard;
pub mod onboarding;
pub mod projects;
pub mod tasks;
pub mod traffic;
