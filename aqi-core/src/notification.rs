//! Contents of the notifications shown by the service worker.

pub const NOTIFICATION_TITLE: &str = "Air Alert";
pub const DEFAULT_NOTIFICATION_BODY: &str = "Air quality has changed.";
/// Page that is opened when the user clicks a notification.
pub const NOTIFICATION_CLICK_URL: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

impl NotificationContent {
    /// Builds the notification for a push message carrying
    /// a plain text payload such as `"The AQI is 42.3. Time to go inside."`.
    #[must_use]
    pub fn from_push_payload(payload: Option<&str>) -> Self {
        let body = payload
            .map(str::trim)
            .filter(|txt| !txt.is_empty())
            .unwrap_or(DEFAULT_NOTIFICATION_BODY)
            .to_string();
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            body,
        }
    }
}
