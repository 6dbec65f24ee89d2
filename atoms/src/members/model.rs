use serde::{Deserialize, Serialize};

/// Roster entry. Projects and tasks reference members by id only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}
