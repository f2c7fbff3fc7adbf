//! Snapshot of the whole store.

use serde::{Deserialize, Serialize};

use super::{Photo, Quest, User};

/// Everything the store holds, as served by the datastore endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub schema_version: i32,
    pub generated_at: String,
    pub revision_id: i64,
    pub quests: Vec<Quest>,
    pub photos: Vec<Photo>,
    pub users: Vec<User>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}
