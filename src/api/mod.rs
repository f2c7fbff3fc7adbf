//! REST API module.
//!
//! Serves the feed, quest and leaderboard views as JSON.

mod datastore;
mod leaderboard;
mod photos;
mod quests;

pub use datastore::*;
pub use leaderboard::*;
pub use photos::*;
pub use quests::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: crate::errors::AppError, revision_id: i64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// Unwrap a JSON request body, answering malformed input with the error envelope.
pub async fn json_body<T>(
    state: &crate::AppState,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, crate::errors::AppErrorWithRevision> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(crate::errors::AppErrorWithRevision {
            error: rejection.into(),
            revision_id: state.store.read().await.revision_id(),
        }),
    }
}
