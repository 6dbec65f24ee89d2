use serde::{Deserialize, Serialize};

/// Free-text documentation note attached to a project, one per project.
/// A project with no stored doc reads as the empty doc.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProjectDoc {
    pub content: String,
    #[serde(default)]
    pub files: Vec<DocFile>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DocFile {
    pub name: String,
    pub url: String,
}
