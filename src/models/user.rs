//! User model matching the frontend User interface.

use serde::{Deserialize, Serialize};

/// A player shown on the leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub completed_quests: u32,
    pub total_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
