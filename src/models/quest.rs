//! Quest model matching the frontend Quest interface.

use serde::{Deserialize, Serialize};

/// A task with a location and a point reward, completable once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub points: u32,
    /// ISO-8601 date the quest is scheduled for
    pub date: String,
    pub completed: bool,
}

/// Lifecycle of a single quest. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuestState {
    Open,
    Completed,
}

impl Quest {
    pub fn state(&self) -> QuestState {
        if self.completed {
            QuestState::Completed
        } else {
            QuestState::Open
        }
    }
}

/// Request body for completing a quest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuestRequest {
    #[serde(default)]
    pub image_uri: Option<String>,
}
