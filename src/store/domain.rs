//! Domain store holding the quest, photo and user collections.
//!
//! Mutations validate their input, update the collections and bump the revision counter.

use chrono::{DateTime, SecondsFormat, Utc};

use super::SCHEMA_VERSION;
use crate::errors::AppError;
use crate::fixtures;
use crate::models::{Photo, PhotoAuthor, Quest, RevisionInfo, StoreSnapshot, User};

/// Owner of all application data.
#[derive(Debug, Clone)]
pub struct DomainStore {
    quests: Vec<Quest>,
    /// Newest first.
    photos: Vec<Photo>,
    users: Vec<User>,
    author: PhotoAuthor,
    revision_id: i64,
    generated_at: String,
    last_photo_millis: i64,
}

impl DomainStore {
    /// Create a store seeded with the compiled-in fixtures.
    pub fn with_fixtures(author: PhotoAuthor) -> Self {
        Self::from_parts(fixtures::quests(), fixtures::photos(), fixtures::users(), author)
    }

    /// Create a store with no data at all.
    pub fn empty(author: PhotoAuthor) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), author)
    }

    /// Create a store from explicit collections. Photos must already be newest first.
    pub fn from_parts(
        quests: Vec<Quest>,
        photos: Vec<Photo>,
        users: Vec<User>,
        author: PhotoAuthor,
    ) -> Self {
        Self {
            quests,
            photos,
            users,
            author,
            revision_id: 0,
            generated_at: iso_timestamp(Utc::now()),
            last_photo_millis: i64::MIN,
        }
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Get a quest by ID.
    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn revision_id(&self) -> i64 {
        self.revision_id
    }

    /// Get revision info.
    pub fn revision_info(&self) -> RevisionInfo {
        RevisionInfo {
            revision_id: self.revision_id,
            generated_at: self.generated_at.clone(),
        }
    }

    /// Get the full store contents.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            schema_version: SCHEMA_VERSION,
            generated_at: self.generated_at.clone(),
            revision_id: self.revision_id,
            quests: self.quests.clone(),
            photos: self.photos.clone(),
            users: self.users.clone(),
        }
    }

    // ==================== PHOTO OPERATIONS ====================

    /// Post a photo against a quest, timestamped now.
    pub fn add_photo(
        &mut self,
        quest_id: &str,
        image_uri: &str,
        location_override: Option<&str>,
    ) -> Result<Photo, AppError> {
        self.add_photo_at(quest_id, image_uri, location_override, Utc::now())
    }

    /// Post a photo against a quest with an explicit creation time.
    ///
    /// The new photo is prepended so the collection stays newest first. A blank location
    /// override falls back to the quest's location.
    pub fn add_photo_at(
        &mut self,
        quest_id: &str,
        image_uri: &str,
        location_override: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Photo, AppError> {
        if quest_id.trim().is_empty() {
            return Err(AppError::Validation("Quest is required".to_string()));
        }
        if image_uri.trim().is_empty() {
            return Err(AppError::Validation("Image is required".to_string()));
        }

        let quest = self
            .quest(quest_id)
            .cloned()
            .ok_or_else(|| AppError::Validation(format!("Quest {} does not exist", quest_id)))?;

        let location = location_override
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or(quest.location);

        let photo = Photo {
            id: self.next_photo_id(now),
            quest_id: quest.id,
            quest_title: quest.title,
            user_id: self.author.user_id.clone(),
            user_name: self.author.user_name.clone(),
            image_url: image_uri.to_string(),
            location,
            timestamp: iso_timestamp(now),
            likes: 0,
        };

        self.photos.insert(0, photo.clone());
        self.bump_revision(now);

        tracing::info!(photo_id = %photo.id, quest_id = %photo.quest_id, "Photo added");
        Ok(photo)
    }

    /// Photos of one quest, or all photos when `quest_id` is `None`. Store order is kept.
    pub fn filter_photos_by_quest(&self, quest_id: Option<&str>) -> Vec<Photo> {
        match quest_id {
            None => self.photos.clone(),
            Some(id) => self
                .photos
                .iter()
                .filter(|p| p.quest_id == id)
                .cloned()
                .collect(),
        }
    }

    /// Quests that have at least one photo, in quest order.
    pub fn unique_quests_with_photos(&self) -> Vec<Quest> {
        self.quests
            .iter()
            .filter(|q| self.photos.iter().any(|p| p.quest_id == q.id))
            .cloned()
            .collect()
    }

    // ==================== QUEST OPERATIONS ====================

    /// Mark an open quest as completed.
    pub fn complete_quest(&mut self, quest_id: &str, image_uri: &str) -> Result<Quest, AppError> {
        if image_uri.trim().is_empty() {
            return Err(AppError::Validation("Image is required".to_string()));
        }

        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == quest_id)
            .ok_or_else(|| AppError::InvalidState(format!("Quest {} does not exist", quest_id)))?;

        if quest.completed {
            return Err(AppError::InvalidState(format!(
                "Quest {} is already completed",
                quest_id
            )));
        }

        quest.completed = true;
        let quest = quest.clone();
        self.bump_revision(Utc::now());

        tracing::info!(quest_id = %quest.id, "Quest completed");
        Ok(quest)
    }

    // ==================== USER OPERATIONS ====================

    /// Users by completed quest count, highest first. Ties keep fixture order.
    pub fn ranked_users(&self) -> Vec<User> {
        let mut users = self.users.clone();
        users.sort_by(|a, b| b.completed_quests.cmp(&a.completed_quests));
        users
    }

    fn next_photo_id(&mut self, now: DateTime<Utc>) -> String {
        let mut millis = now.timestamp_millis().max(self.last_photo_millis.saturating_add(1));
        while self.photos.iter().any(|p| p.id == millis.to_string()) {
            millis += 1;
        }
        self.last_photo_millis = millis;
        millis.to_string()
    }

    fn bump_revision(&mut self, now: DateTime<Utc>) {
        self.revision_id += 1;
        self.generated_at = iso_timestamp(now);
    }
}

/// Millisecond-precision UTC timestamp, e.g. `2025-06-01T05:30:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
