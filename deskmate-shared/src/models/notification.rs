use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle of a background action reported to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NotificationStatus {
    Pending,
    Done,
}

impl NotificationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient status marker shown in the chat timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub datetime: String,
    #[serde(default)]
    pub chat_id: Option<Uuid>,
    #[serde(default)]
    pub message: Option<String>,
    pub action: String,
    pub status: NotificationStatus,
}

impl Notification {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == NotificationStatus::Done
    }

    /// Text to show for this notification, falling back to its action name.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.message
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(message: Option<&str>) -> Notification {
        Notification {
            id: "n".into(),
            datetime: "2024-03-26T10:00:00Z".into(),
            chat_id: None,
            message: message.map(str::to_string),
            action: "UPLOAD".into(),
            status: NotificationStatus::Done,
        }
    }

    #[test]
    fn status_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&NotificationStatus::Done).unwrap(), "\"Done\"");
        assert_eq!(NotificationStatus::Pending.to_string(), "Pending");
    }

    #[test]
    fn display_text_falls_back_to_action() {
        assert_eq!(notification(None).display_text(), "UPLOAD");
        assert_eq!(notification(Some("  ")).display_text(), "UPLOAD");
        assert_eq!(notification(Some("file.pdf uploaded")).display_text(), "file.pdf uploaded");
    }
}
