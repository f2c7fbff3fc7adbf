//! Photo model matching the frontend Photo interface.

use serde::{Deserialize, Serialize};

/// A submission evidencing quest completion, tied to a quest and a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub quest_id: String,
    /// Title of the quest at the moment the photo was posted
    pub quest_title: String,
    pub user_id: String,
    pub user_name: String,
    /// Opaque URI, either on the device or remote
    pub image_url: String,
    pub location: String,
    pub timestamp: String,
    pub likes: u32,
}

/// Author stamped onto newly posted photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAuthor {
    pub user_id: String,
    pub user_name: String,
}

impl PhotoAuthor {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

/// Request body for posting a new photo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoRequest {
    #[serde(default)]
    pub quest_id: Option<String>,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Query string for photo and feed listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoFilterQuery {
    #[serde(default)]
    pub quest_id: Option<String>,
}
