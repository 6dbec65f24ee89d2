use serde::{Deserialize, Serialize};

/// Gradient applied to projects created without an explicit background.
pub const DEFAULT_GRADIENT: &str = "linear-gradient(to bottom right, #6366f1, #a855f7)";

/// Project card background. Either a CSS gradient expression or an image
/// URL; the legacy string form is only interpreted in [`Background::parse`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Background {
    #[serde(rename = "gradient")]
    Gradient { css: String },
    #[serde(rename = "image")]
    Image { url: String },
}

impl Background {
    /// Interpret an untyped background value. Anything that starts with
    /// "http" is an image URL, everything else is treated as CSS.
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http") {
            Background::Image {
                url: value.to_string(),
            }
        } else {
            Background::Gradient {
                css: value.to_string(),
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Gradient {
            css: DEFAULT_GRADIENT.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Paused,
    Done,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Marketing,
    Design,
    Development,
    Planning,
    Operations,
}

/// Root aggregate. Tasks point back at a project via `project_id`; the
/// project itself never embeds them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub background: Background,
    pub category: ProjectCategory,
    /// Member ids. Always contains at least the creating member.
    pub members: Vec<String>,
    pub is_favorite: bool,
    pub status: ProjectStatus,
    pub created_at: String,
    pub drive_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CreateProjectPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
    pub background: Option<Background>,
    pub category: Option<ProjectCategory>,
}
