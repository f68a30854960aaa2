use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::notification::Notification;

/// A chat session as stored by the support API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatEntity {
    pub chat_id: Uuid,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub creation_time: String,
    pub chat_name: String,
}

/// One question/answer exchange inside a chat.
///
/// The same shape travels in both directions: the client posts it with an
/// empty `assistant`, and the server echoes it back with the answer filled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub chat_id: Uuid,
    pub message_id: String,
    pub user_message: String,
    #[serde(default)]
    pub assistant: String,
    pub message_time: String,
}

impl ChatMessage {
    /// True while the assistant has not answered yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.assistant.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatQuestion {
    pub chat_id: Uuid,
    pub question: String,
}

/// An entry of the chat timeline: either a message or a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "item_type", content = "body")]
pub enum ChatItem {
    #[serde(rename = "MESSAGE")]
    Message(ChatMessage),
    #[serde(rename = "NOTIFICATION")]
    Notification(Notification),
}

impl ChatItem {
    /// Raw timestamp string used to order the timeline.
    #[must_use]
    pub fn time(&self) -> &str {
        match self {
            Self::Message(message) => &message.message_time,
            Self::Notification(notification) => &notification.datetime,
        }
    }

    /// Stable key for list rendering.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Message(message) => format!("message-{}", message.message_id),
            Self::Notification(notification) => format!("notification-{}", notification.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateChatRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatListResponse {
    #[serde(default)]
    pub chats: Vec<ChatEntity>,
}

/// Fields of a chat that can be changed after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatUpdatableProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_name: Option<String>,
}

/// A question and its answer recorded directly into a chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionAndAnswer {
    pub question: String,
    pub answer: String,
}
