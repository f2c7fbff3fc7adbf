//! Photo and feed API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;

use super::{error, json_body, success, ApiResult};
use crate::models::{CreatePhotoRequest, Photo, PhotoFilterQuery, Quest};
use crate::picker::{ClientImage, ImageSource};
use crate::views::{build_feed, CreatePhotoForm, FeedView, LogNotifier};
use crate::AppState;

/// An empty `questId=` means no filter.
fn quest_filter(query: &PhotoFilterQuery) -> Option<&str> {
    query.quest_id.as_deref().filter(|id| !id.trim().is_empty())
}

/// GET /api/photos - List photos, newest first, optionally for one quest.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoFilterQuery>,
) -> ApiResult<Vec<Photo>> {
    let store = state.store.read().await;
    success(
        store.filter_photos_by_quest(quest_filter(&query)),
        store.revision_id(),
    )
}

/// POST /api/photos - Post a photo to the feed.
pub async fn create_photo(
    State(state): State<AppState>,
    payload: Result<Json<CreatePhotoRequest>, JsonRejection>,
) -> ApiResult<Photo> {
    let request = json_body(&state, payload).await?;
    let mut notifier = LogNotifier;
    let mut form = CreatePhotoForm::new();
    form.open();

    let mut picker = ClientImage::new(request.image_uri);
    let attached = form
        .attach_image(&mut picker, ImageSource::Gallery, &mut notifier)
        .await;
    if let Some(location) = request.location {
        form.set_location(location);
    }

    let mut store = state.store.write().await;
    let revision_id = store.revision_id();

    let selected = match request.quest_id.as_deref().map(str::trim) {
        Some(quest_id) if !quest_id.is_empty() => form.select_quest(&store, quest_id),
        _ => Ok(()),
    };
    if let Err(e) = attached.and(selected) {
        return error(e, revision_id);
    }

    match form.submit(&mut store, &mut notifier) {
        Ok(photo) => success(photo, store.revision_id()),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/feed - The feed view with relative times and filter chips.
pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<PhotoFilterQuery>,
) -> ApiResult<FeedView> {
    let store = state.store.read().await;
    success(
        build_feed(&store, quest_filter(&query), Utc::now()),
        store.revision_id(),
    )
}

/// GET /api/feed/quests - Quests that have photos, for the filter row.
pub async fn list_feed_quests(State(state): State<AppState>) -> ApiResult<Vec<Quest>> {
    let store = state.store.read().await;
    success(store.unique_quests_with_photos(), store.revision_id())
}
