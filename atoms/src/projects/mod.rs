pub mod model;

pub use model::{
    Background, CreateProjectPayload, Project, ProjectCategory, ProjectStatus, DEFAULT_GRADIENT,
};
