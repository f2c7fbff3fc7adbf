//! Quest API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{error, json_body, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CompleteQuestRequest, Quest};
use crate::picker::{ClientImage, ImageSource};
use crate::views::{quest_cards, LogNotifier, QuestCard, QuestCompletion};
use crate::AppState;

/// GET /api/quests - List all quests.
pub async fn list_quests(State(state): State<AppState>) -> ApiResult<Vec<QuestCard>> {
    let store = state.store.read().await;
    success(quest_cards(&store), store.revision_id())
}

/// GET /api/quests/{id} - Get a single quest.
pub async fn get_quest(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Quest> {
    let store = state.store.read().await;
    let revision_id = store.revision_id();

    match store.quest(&id) {
        Some(quest) => success(quest.clone(), revision_id),
        None => error(
            AppError::NotFound(format!("Quest {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/quests/{id}/complete - Complete a quest with an evidence image.
pub async fn complete_quest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CompleteQuestRequest>, JsonRejection>,
) -> ApiResult<Quest> {
    let request = json_body(&state, payload).await?;
    let mut notifier = LogNotifier;
    let mut workflow = QuestCompletion::new();

    let mut picker = ClientImage::new(request.image_uri);
    let attached = workflow
        .attach_image(&mut picker, ImageSource::Gallery, &mut notifier)
        .await;

    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    if let Err(e) = attached.and_then(|_| workflow.select(&store, &id)) {
        return error(e, revision_id);
    }

    match workflow.confirm(&mut store, &mut notifier) {
        Ok(quest) => success(quest, store.revision_id()),
        Err(e) => error(e, revision_id),
    }
}
