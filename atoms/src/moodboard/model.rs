use serde::{Deserialize, Serialize};

/// Visual reference pinned to a project's moodboard.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MoodboardItem {
    pub item_id: String,
    pub project_id: String,
    pub url: String,
    pub kind: MoodboardKind,
    pub title: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodboardKind {
    Image,
    Link,
}

impl MoodboardKind {
    pub fn as_label(&self) -> &'static str {
        match self {
            MoodboardKind::Image => "image",
            MoodboardKind::Link => "link",
        }
    }

    /// Stored label back to the enum; unknown labels read as plain links.
    pub fn from_label(label: &str) -> Self {
        match label {
            "image" => MoodboardKind::Image,
            _ => MoodboardKind::Link,
        }
    }
}

const IMAGE_EXTENSIONS: [&str; 4] = [".jpeg", ".jpg", ".gif", ".png"];
const IMAGE_HOSTS: [&str; 2] = ["unsplash", "images.pexels.com"];

/// Decide whether a pinned URL renders as an image or a plain link. Applied
/// once when the item is created; the stored kind is authoritative after.
pub fn classify_url(url: &str) -> MoodboardKind {
    let lowered = url.to_lowercase();
    let looks_like_image = IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
        || IMAGE_HOSTS.iter().any(|host| lowered.contains(host));
    if looks_like_image {
        MoodboardKind::Image
    } else {
        MoodboardKind::Link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extensions_classify_as_image() {
        assert_eq!(classify_url("https://cdn.site/ref.PNG"), MoodboardKind::Image);
        assert_eq!(classify_url("https://cdn.site/ref.jpg"), MoodboardKind::Image);
    }

    #[test]
    fn known_image_hosts_classify_as_image() {
        assert_eq!(
            classify_url("https://images.unsplash.com/photo-1557683316"),
            MoodboardKind::Image
        );
        assert_eq!(
            classify_url("https://images.pexels.com/photos/12345"),
            MoodboardKind::Image
        );
    }

    #[test]
    fn everything_else_is_a_link() {
        assert_eq!(
            classify_url("https://pinterest.com/board/xyz"),
            MoodboardKind::Link
        );
    }
}
