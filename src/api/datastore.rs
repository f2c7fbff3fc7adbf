//! Datastore API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{RevisionInfo, StoreSnapshot};
use crate::AppState;

/// GET /api/datastore - Get the full store contents.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<StoreSnapshot> {
    let snapshot = state.store.read().await.snapshot();
    let revision_id = snapshot.revision_id;
    success(snapshot, revision_id)
}

/// GET /api/datastore/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state.store.read().await.revision_info();
    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}
