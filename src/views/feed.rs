//! Photo feed: relative times, quest filter chips and the create-photo form.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use super::{initial, report, Alert, Notifier};
use crate::errors::AppError;
use crate::models::Photo;
use crate::picker::{self, ImagePicker, ImageSource};
use crate::store::DomainStore;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 86_400_000;

pub const SELECT_QUEST_MESSAGE: &str = "Пожалуйста, выберите квест";
pub const UPLOAD_PHOTO_MESSAGE: &str = "Пожалуйста, загрузите фотографию";
pub const PHOTO_POSTED_MESSAGE: &str = "Фотография добавлена в ленту";
pub const EMPTY_FEED_MESSAGE: &str = "Нет фотографий для выбранного квеста";
pub const ALL_QUESTS_LABEL: &str = "Все";

/// Time since a photo was posted, at the granularity the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    Days(i64),
    Hours(i64),
    JustNow,
}

impl Elapsed {
    /// Future and unparseable timestamps count as just now.
    pub fn between(timestamp: &str, now: DateTime<Utc>) -> Self {
        let Some(posted) = parse_timestamp(timestamp) else {
            return Elapsed::JustNow;
        };

        let diff_ms = now.timestamp_millis() - posted.timestamp_millis();
        let days = diff_ms.div_euclid(MILLIS_PER_DAY);
        let hours = diff_ms.div_euclid(MILLIS_PER_HOUR);

        if days > 0 {
            Elapsed::Days(days)
        } else if hours > 0 {
            Elapsed::Hours(hours)
        } else {
            Elapsed::JustNow
        }
    }
}

/// Parse an ISO-8601 timestamp. Values without an offset are read as UTC, bare dates as midnight.
fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elapsed::Days(days) => write!(f, "{} дн. назад", days),
            Elapsed::Hours(hours) => write!(f, "{} ч. назад", hours),
            Elapsed::JustNow => f.write_str("Только что"),
        }
    }
}

/// Relative label for a photo timestamp, e.g. `3 ч. назад`.
pub fn format_elapsed(timestamp: &str, now: DateTime<Utc>) -> String {
    Elapsed::between(timestamp, now).to_string()
}

/// One photo as rendered in the feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCard {
    #[serde(flatten)]
    pub photo: Photo,
    pub elapsed: String,
    pub author_initial: String,
}

/// A chip in the quest filter row. The first chip clears the filter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestFilter {
    pub quest_id: Option<String>,
    pub title: String,
    pub active: bool,
}

/// Everything the feed screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    pub photos: Vec<FeedCard>,
    pub filter_quest_id: Option<String>,
    pub filters: Vec<QuestFilter>,
    pub shown: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

/// Derive the feed, optionally narrowed to one quest.
pub fn build_feed(store: &DomainStore, filter: Option<&str>, now: DateTime<Utc>) -> FeedView {
    let photos = store.filter_photos_by_quest(filter);
    let total = store.photos().len();
    let shown = photos.len();

    let mut filters = vec![QuestFilter {
        quest_id: None,
        title: ALL_QUESTS_LABEL.to_string(),
        active: filter.is_none(),
    }];
    filters.extend(
        store
            .unique_quests_with_photos()
            .into_iter()
            .map(|quest| QuestFilter {
                active: filter == Some(quest.id.as_str()),
                quest_id: Some(quest.id),
                title: quest.title,
            }),
    );

    let cards = photos
        .into_iter()
        .map(|photo| FeedCard {
            elapsed: format_elapsed(&photo.timestamp, now),
            author_initial: initial(&photo.user_name),
            photo,
        })
        .collect();

    FeedView {
        photos: cards,
        filter_quest_id: filter.map(str::to_string),
        filters,
        shown,
        total,
        caption: filter.map(|_| format!("Показано: {} из {}", shown, total)),
        empty_message: (shown == 0).then(|| EMPTY_FEED_MESSAGE.to_string()),
    }
}

/// The "create photo" modal.
///
/// Holds the selected quest, the attached image and an optional location until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePhotoForm {
    visible: bool,
    selected_quest: Option<String>,
    selected_image: Option<String>,
    location: String,
}

impl CreatePhotoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn selected_quest(&self) -> Option<&str> {
        self.selected_quest.as_deref()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// Pick the quest the photo is for.
    pub fn select_quest(&mut self, store: &DomainStore, quest_id: &str) -> Result<(), AppError> {
        if store.quest(quest_id).is_none() {
            return Err(AppError::Validation(format!("Quest {} does not exist", quest_id)));
        }
        self.selected_quest = Some(quest_id.to_string());
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Attach an image from the camera or the gallery.
    ///
    /// A cancelled selection keeps whatever image was attached before.
    pub async fn attach_image<P, N>(
        &mut self,
        picker: &mut P,
        source: ImageSource,
        notifier: &mut N,
    ) -> Result<(), AppError>
    where
        P: ImagePicker,
        N: Notifier,
    {
        if let Some(uri) = report(picker::acquire(picker, source).await, notifier)? {
            self.selected_image = Some(uri);
        }
        Ok(())
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.selected_quest.is_some() && self.selected_image.is_some()
    }

    /// Post the photo, then clear and close the form.
    ///
    /// On failure the user is alerted and the form keeps its contents.
    pub fn submit<N: Notifier>(
        &mut self,
        store: &mut DomainStore,
        notifier: &mut N,
    ) -> Result<Photo, AppError> {
        let photo = report(self.post(store), notifier)?;
        self.reset();
        notifier.notify(Alert::success(PHOTO_POSTED_MESSAGE));
        Ok(photo)
    }

    fn post(&self, store: &mut DomainStore) -> Result<Photo, AppError> {
        let Some(quest_id) = self.selected_quest.as_deref() else {
            return Err(AppError::Validation(SELECT_QUEST_MESSAGE.to_string()));
        };
        let Some(image_uri) = self.selected_image.as_deref() else {
            return Err(AppError::Validation(UPLOAD_PHOTO_MESSAGE.to_string()));
        };

        store.add_photo(quest_id, image_uri, Some(self.location.as_str()))
    }

    /// Clear every field and close.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
