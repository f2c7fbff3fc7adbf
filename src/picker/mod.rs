//! Image acquisition contract.
//!
//! Images come from the device camera or gallery behind a runtime permission. The workflows
//! only see the outcome: a selected URI, a cancellation, or a refused permission.

use std::future::Future;

use crate::errors::AppError;

/// Where the image is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Gallery,
}

impl ImageSource {
    /// Permission the source needs before it can be opened.
    pub fn permission_kind(&self) -> PermissionKind {
        match self {
            ImageSource::Camera => PermissionKind::Camera,
            ImageSource::Gallery => PermissionKind::MediaLibrary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    Camera,
    MediaLibrary,
}

impl PermissionKind {
    /// Message shown when the user refuses this permission.
    pub fn denied_message(&self) -> &'static str {
        match self {
            PermissionKind::Camera => "Нужно разрешение на доступ к камере",
            PermissionKind::MediaLibrary => "Нужно разрешение на доступ к галерее",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Result of a picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(String),
    Cancelled,
}

/// Device capability that produces image URIs.
pub trait ImagePicker {
    fn request_permission(
        &mut self,
        kind: PermissionKind,
    ) -> impl Future<Output = PermissionStatus> + Send;

    fn acquire_image(&mut self, source: ImageSource) -> impl Future<Output = PickerOutcome> + Send;
}

/// Ask for permission, then run the picker.
///
/// Returns `Ok(None)` when the user cancels or the picker hands back an empty URI.
pub async fn acquire<P: ImagePicker>(
    picker: &mut P,
    source: ImageSource,
) -> Result<Option<String>, AppError> {
    let kind = source.permission_kind();
    if picker.request_permission(kind).await == PermissionStatus::Denied {
        tracing::warn!(?kind, "Image permission denied");
        return Err(AppError::PermissionDenied(kind.denied_message().to_string()));
    }

    match picker.acquire_image(source).await {
        PickerOutcome::Selected(uri) if !uri.trim().is_empty() => Ok(Some(uri)),
        _ => {
            tracing::debug!(?source, "Image selection cancelled");
            Ok(None)
        }
    }
}

/// An image the client already picked on its own device.
///
/// Used by the HTTP API: the device has granted access by the time the request arrives, and a
/// request without an image URI counts as a cancelled selection.
#[derive(Debug, Clone, Default)]
pub struct ClientImage {
    uri: Option<String>,
}

impl ClientImage {
    pub fn new(uri: Option<String>) -> Self {
        Self { uri }
    }
}

impl ImagePicker for ClientImage {
    async fn request_permission(&mut self, _kind: PermissionKind) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn acquire_image(&mut self, _source: ImageSource) -> PickerOutcome {
        match self.uri.take() {
            Some(uri) if !uri.trim().is_empty() => PickerOutcome::Selected(uri),
            _ => PickerOutcome::Cancelled,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedPicker;
    use super::*;

    #[tokio::test]
    async fn test_acquire_selected() {
        let mut picker = ScriptedPicker::selecting("file:///photo.jpg");

        let uri = acquire(&mut picker, ImageSource::Camera).await.unwrap();

        assert_eq!(uri.as_deref(), Some("file:///photo.jpg"));
        assert_eq!(picker.requested, vec![PermissionKind::Camera]);
        assert_eq!(picker.opened, vec![ImageSource::Camera]);
    }

    #[tokio::test]
    async fn test_acquire_gallery_needs_media_library() {
        let mut picker = ScriptedPicker::selecting("file:///photo.jpg");
        acquire(&mut picker, ImageSource::Gallery).await.unwrap();
        assert_eq!(picker.requested, vec![PermissionKind::MediaLibrary]);
    }

    #[tokio::test]
    async fn test_acquire_denied_does_not_open_picker() {
        let mut picker = ScriptedPicker::denied();

        let err = acquire(&mut picker, ImageSource::Gallery).await.unwrap_err();

        assert_eq!(
            err,
            AppError::PermissionDenied("Нужно разрешение на доступ к галерее".to_string())
        );
        assert!(picker.opened.is_empty());
    }

    #[tokio::test]
    async fn test_acquire_cancelled() {
        let mut picker = ScriptedPicker::cancelling();
        assert_eq!(acquire(&mut picker, ImageSource::Camera).await.unwrap(), None);

        let mut empty = ScriptedPicker::selecting("");
        assert_eq!(acquire(&mut empty, ImageSource::Camera).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_client_image() {
        let mut provided = ClientImage::new(Some("https://cdn/x.jpg".to_string()));
        assert_eq!(
            acquire(&mut provided, ImageSource::Gallery).await.unwrap(),
            Some("https://cdn/x.jpg".to_string())
        );

        let mut missing = ClientImage::new(None);
        assert_eq!(acquire(&mut missing, ImageSource::Gallery).await.unwrap(), None);
    }
}
