//! Quest list and the quest completion workflow.

use serde::Serialize;

use super::{report, Alert, Notifier};
use crate::errors::AppError;
use crate::models::{Quest, QuestState};
use crate::picker::{self, ImagePicker, ImageSource};
use crate::store::DomainStore;

pub const NO_QUEST_SELECTED_MESSAGE: &str = "Квест не выбран";
pub const ATTACH_PHOTO_MESSAGE: &str = "Пожалуйста, загрузите фотографию!";
pub const QUEST_COMPLETED_MESSAGE: &str = "Квест выполнен!";
pub const COMPLETED_BADGE: &str = "✓ Выполнено";

/// One quest as rendered in the list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCard {
    #[serde(flatten)]
    pub quest: Quest,
    pub state: QuestState,
    pub points_badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_badge: Option<String>,
}

/// All quests in list order.
pub fn quest_cards(store: &DomainStore) -> Vec<QuestCard> {
    store
        .quests()
        .iter()
        .map(|quest| {
            let state = quest.state();
            QuestCard {
                points_badge: format!("+{}", quest.points),
                completed_badge: (state == QuestState::Completed)
                    .then(|| COMPLETED_BADGE.to_string()),
                state,
                quest: quest.clone(),
            }
        })
        .collect()
}

/// The quest detail modal, from selection to confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestCompletion {
    selected_quest: Option<String>,
    uploaded_image: Option<String>,
}

impl QuestCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view of an open quest. Completed quests can't be selected.
    pub fn select(&mut self, store: &DomainStore, quest_id: &str) -> Result<(), AppError> {
        let quest = store
            .quest(quest_id)
            .ok_or_else(|| AppError::NotFound(format!("Quest {} not found", quest_id)))?;

        if quest.state() == QuestState::Completed {
            return Err(AppError::InvalidState(format!(
                "Quest {} is already completed",
                quest_id
            )));
        }

        if self.selected_quest.is_some() && self.selected_quest.as_deref() != Some(quest_id) {
            self.uploaded_image = None;
        }
        self.selected_quest = Some(quest_id.to_string());
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.selected_quest.is_some()
    }

    pub fn selected_quest(&self) -> Option<&str> {
        self.selected_quest.as_deref()
    }

    pub fn uploaded_image(&self) -> Option<&str> {
        self.uploaded_image.as_deref()
    }

    /// Attach the evidence image. A cancelled selection changes nothing.
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
            self.uploaded_image = Some(uri);
        }
        Ok(())
    }

    /// Whether the confirm button is enabled.
    pub fn can_confirm(&self) -> bool {
        self.selected_quest.is_some() && self.uploaded_image.is_some()
    }

    /// Complete the selected quest and close the detail view.
    ///
    /// On failure the user is alerted and the view stays open as it was.
    pub fn confirm<N: Notifier>(
        &mut self,
        store: &mut DomainStore,
        notifier: &mut N,
    ) -> Result<Quest, AppError> {
        let quest = report(self.complete(store), notifier)?;
        self.close();
        notifier.notify(Alert::success(QUEST_COMPLETED_MESSAGE));
        Ok(quest)
    }

    fn complete(&self, store: &mut DomainStore) -> Result<Quest, AppError> {
        let Some(quest_id) = self.selected_quest.as_deref() else {
            return Err(AppError::Validation(NO_QUEST_SELECTED_MESSAGE.to_string()));
        };
        let Some(image_uri) = self.uploaded_image.as_deref() else {
            return Err(AppError::Validation(ATTACH_PHOTO_MESSAGE.to_string()));
        };

        store.complete_quest(quest_id, image_uri)
    }

    /// Dismiss the detail view, dropping the attached image.
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoAuthor;
    use crate::picker::testing::ScriptedPicker;

    fn store() -> DomainStore {
        DomainStore::with_fixtures(PhotoAuthor::new("currentUser", "Вы"))
    }

    async fn attach(workflow: &mut QuestCompletion, uri: &str) {
        workflow
            .attach_image(
                &mut ScriptedPicker::selecting(uri),
                ImageSource::Camera,
                &mut Vec::<Alert>::new(),
            )
            .await
            .unwrap();
    }

    #[test]
    fn test_quest_cards() {
        let mut store = store();
        store.complete_quest("1", "file:///x.jpg").unwrap();

        let cards = quest_cards(&store);

        assert_eq!(cards.len(), store.quests().len());
        assert_eq!(cards[0].state, QuestState::Completed);
        assert_eq!(cards[0].completed_badge.as_deref(), Some(COMPLETED_BADGE));
        assert_eq!(cards[0].points_badge, format!("+{}", cards[0].quest.points));
        assert_eq!(cards[1].state, QuestState::Open);
        assert!(cards[1].completed_badge.is_none());
    }

    #[tokio::test]
    async fn test_complete_quest_workflow() {
        let mut store = store();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut workflow = QuestCompletion::new();

        workflow.select(&store, "4").unwrap();
        assert!(workflow.is_open());
        assert!(!workflow.can_confirm());

        attach(&mut workflow, "file:///bridge.jpg").await;
        assert!(workflow.can_confirm());

        let quest = workflow.confirm(&mut store, &mut alerts).unwrap();

        assert!(quest.completed);
        assert_eq!(store.quest("4").unwrap().state(), QuestState::Completed);
        assert!(!workflow.is_open());
        assert_eq!(workflow.uploaded_image(), None);
        assert_eq!(alerts, vec![Alert::success(QUEST_COMPLETED_MESSAGE)]);
    }

    #[test]
    fn test_confirm_without_image_stays_open() {
        let mut store = store();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut workflow = QuestCompletion::new();
        workflow.select(&store, "2").unwrap();

        let err = workflow.confirm(&mut store, &mut alerts).unwrap_err();

        assert_eq!(err, AppError::Validation(ATTACH_PHOTO_MESSAGE.to_string()));
        assert!(workflow.is_open());
        assert_eq!(store.quest("2").unwrap().state(), QuestState::Open);
        assert_eq!(alerts.len(), 1);
    }

    #[test]
    fn test_confirm_without_selection() {
        let mut store = store();
        let err = QuestCompletion::new()
            .confirm(&mut store, &mut Vec::<Alert>::new())
            .unwrap_err();
        assert_eq!(err, AppError::Validation(NO_QUEST_SELECTED_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_confirm_already_completed_elsewhere() {
        let mut store = store();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut workflow = QuestCompletion::new();
        workflow.select(&store, "5").unwrap();
        attach(&mut workflow, "file:///night.jpg").await;

        store.complete_quest("5", "file:///other.jpg").unwrap();
        let err = workflow.confirm(&mut store, &mut alerts).unwrap_err();

        assert!(matches!(err, AppError::InvalidState(_)));
        assert!(workflow.is_open());
        assert_eq!(workflow.uploaded_image(), Some("file:///night.jpg"));
        assert_eq!(alerts[0].title, "Ошибка");
    }

    #[test]
    fn test_select_completed_quest() {
        let mut store = store();
        store.complete_quest("1", "file:///x.jpg").unwrap();

        let mut workflow = QuestCompletion::new();
        assert!(matches!(
            workflow.select(&store, "1"),
            Err(AppError::InvalidState(_))
        ));
        assert!(matches!(
            workflow.select(&store, "missing"),
            Err(AppError::NotFound(_))
        ));
        assert!(!workflow.is_open());
    }

    #[tokio::test]
    async fn test_denied_permission_keeps_state() {
        let store = store();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut workflow = QuestCompletion::new();
        workflow.select(&store, "3").unwrap();
        attach(&mut workflow, "file:///fountain.jpg").await;

        let err = workflow
            .attach_image(&mut ScriptedPicker::denied(), ImageSource::Gallery, &mut alerts)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::PermissionDenied(_)));
        assert_eq!(workflow.uploaded_image(), Some("file:///fountain.jpg"));
        assert_eq!(alerts.len(), 1);
    }

    #[tokio::test]
    async fn test_switching_quest_drops_image() {
        let store = store();
        let mut workflow = QuestCompletion::new();
        workflow.select(&store, "2").unwrap();
        attach(&mut workflow, "file:///art.jpg").await;

        workflow.select(&store, "2").unwrap();
        assert_eq!(workflow.uploaded_image(), Some("file:///art.jpg"));

        workflow.select(&store, "3").unwrap();
        assert_eq!(workflow.uploaded_image(), None);
    }

    #[tokio::test]
    async fn test_close_discards_selection() {
        let store = store();
        let mut workflow = QuestCompletion::new();
        workflow.select(&store, "2").unwrap();
        attach(&mut workflow, "file:///art.jpg").await;

        workflow.close();

        assert_eq!(workflow, QuestCompletion::default());
    }
}
