use thiserror::Error;

/// Mutation failures. All are local and recoverable; deletes and toggles
/// against unknown ids are defined as no-ops rather than errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A task-level operation was attempted while the gallery is open.
    #[error("no active project")]
    NoActiveProject,

    /// The referenced column does not exist on the board.
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// The referenced project does not exist in the store.
    #[error("unknown project: {0}")]
    UnknownProject(String),

    /// Template instantiation found no template task in the active project.
    #[error("active project has no template task")]
    NoTemplate,
}
