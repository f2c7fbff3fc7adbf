//! User and leaderboard API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::User;
use crate::views::{build_leaderboard, LeaderboardEntry};
use crate::AppState;

/// GET /api/users - List users in fixture order.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let store = state.store.read().await;
    success(store.users().to_vec(), store.revision_id())
}

/// GET /api/leaderboard - Users ranked by completed quests.
pub async fn get_leaderboard(State(state): State<AppState>) -> ApiResult<Vec<LeaderboardEntry>> {
    let store = state.store.read().await;
    success(build_leaderboard(&store), store.revision_id())
}
