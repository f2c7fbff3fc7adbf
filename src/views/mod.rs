//! Presentation logic for the feed, quest and leaderboard views.
//!
//! Views read from the [`DomainStore`](crate::store::DomainStore), derive what the screens show
//! and run the form workflows. Errors are reported through a [`Notifier`] as blocking alerts.

mod feed;
mod leaderboard;
mod quests;

pub use feed::*;
pub use leaderboard::*;
pub use quests::*;

use crate::errors::AppError;

/// Title of every success alert.
pub const SUCCESS_TITLE: &str = "Успех!";

/// A modal notification with a title and a message, acknowledged by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(SUCCESS_TITLE, message)
    }
}

/// User-facing notification channel.
pub trait Notifier {
    fn notify(&mut self, alert: Alert);
}

/// Collects alerts in order.
impl Notifier for Vec<Alert> {
    fn notify(&mut self, alert: Alert) {
        self.push(alert);
    }
}

/// Writes alerts to the log. The API has no modal to show them in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, alert: Alert) {
        tracing::info!(title = %alert.title, message = %alert.message, "Alert");
    }
}

/// Pass a workflow result through, alerting the user when it failed.
pub(crate) fn report<T, N: Notifier>(
    result: Result<T, AppError>,
    notifier: &mut N,
) -> Result<T, AppError> {
    if let Err(e) = &result {
        notifier.notify(e.alert());
    }
    result
}

/// First letter of a name, as shown in avatar circles.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
