//! Local chat history: the messages and notifications currently on screen.

use crate::models::{ChatItem, ChatMessage, Notification};
use crate::timeline::merge_chat_items;

/// Mutations applied to a [`ChatHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatHistoryAction {
    /// Insert a message, or fill in the answer of the one sharing its id.
    Upsert(ChatMessage),
    Remove(String),
    SetMessages(Vec<ChatMessage>),
    SetNotifications(Vec<Notification>),
    /// Replace everything with server history.
    Load(Vec<ChatItem>),
    Clear,
}

/// Messages and notifications of the chat being displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatHistory {
    pub messages: Vec<ChatMessage>,
    pub notifications: Vec<Notification>,
}

impl ChatHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles `message` into the history.
    ///
    /// A message already present with the same `message_id` keeps its user
    /// text and time; only the assistant answer is replaced. Unknown ids are
    /// appended.
    pub fn update_chat_history(&mut self, message: ChatMessage) {
        if let Some(existing) = self
            .messages
            .iter_mut()
            .find(|item| item.message_id == message.message_id)
        {
            existing.assistant = message.assistant;
        } else {
            self.messages.push(message);
        }
    }

    /// Drops the message with `message_id`, if present.
    pub fn remove_message(&mut self, message_id: &str) {
        self.messages.retain(|item| item.message_id != message_id);
    }

    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn set_notifications(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
    }

    /// Replaces the history with items fetched from the server.
    pub fn load_chat_items(&mut self, items: Vec<ChatItem>) {
        self.clear();
        for item in items {
            match item {
                ChatItem::Message(message) => self.messages.push(message),
                ChatItem::Notification(notification) => self.notifications.push(notification),
            }
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.notifications.clear();
    }

    #[must_use]
    pub fn message(&self, message_id: &str) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .find(|item| item.message_id == message_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.notifications.is_empty()
    }

    /// The merged, time-ordered display list.
    #[must_use]
    pub fn timeline(&self) -> Vec<ChatItem> {
        merge_chat_items(&self.messages, &self.notifications)
    }

    /// Applies `action` in place.
    pub fn apply(&mut self, action: ChatHistoryAction) {
        match action {
            ChatHistoryAction::Upsert(message) => self.update_chat_history(message),
            ChatHistoryAction::Remove(message_id) => self.remove_message(&message_id),
            ChatHistoryAction::SetMessages(messages) => self.set_messages(messages),
            ChatHistoryAction::SetNotifications(notifications) => {
                self.set_notifications(notifications);
            }
            ChatHistoryAction::Load(items) => self.load_chat_items(items),
            ChatHistoryAction::Clear => self.clear(),
        }
    }

    /// Returns the history with `action` applied.
    #[must_use]
    pub fn reduce(mut self, action: ChatHistoryAction) -> Self {
        self.apply(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationStatus;
    use uuid::Uuid;

    fn message(id: &str, user: &str, assistant: &str) -> ChatMessage {
        ChatMessage {
            chat_id: Uuid::nil(),
            message_id: id.to_string(),
            user_message: user.to_string(),
            assistant: assistant.to_string(),
            message_time: "2024-03-26T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn reconcile_fills_in_answer_only() {
        let mut history = ChatHistory::new();
        history.update_chat_history(message("1", "How do I reset my password?", ""));

        let mut echo = message("1", "server rewrote the question", "Use the reset link.");
        echo.message_time = "2030-01-01T00:00:00Z".to_string();
        history.update_chat_history(echo);

        assert_eq!(history.messages.len(), 1);
        let stored = history.message("1").unwrap();
        assert_eq!(stored.user_message, "How do I reset my password?");
        assert_eq!(stored.assistant, "Use the reset link.");
        assert_eq!(stored.message_time, "2024-03-26T10:00:00Z");
    }

    #[test]
    fn unknown_ids_are_appended_in_order() {
        let mut history = ChatHistory::new();
        history.update_chat_history(message("1", "first", ""));
        history.update_chat_history(message("2", "second", ""));

        let ids: Vec<_> = history.messages.iter().map(|m| m.message_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn remove_message_is_noop_for_unknown_id() {
        let mut history = ChatHistory::new();
        history.update_chat_history(message("1", "first", ""));
        history.remove_message("missing");
        assert_eq!(history.messages.len(), 1);
        history.remove_message("1");
        assert!(history.is_empty());
    }

    #[test]
    fn load_splits_server_items() {
        let notification = Notification {
            id: "n".into(),
            datetime: "2024-03-26T09:00:00Z".into(),
            chat_id: None,
            message: None,
            action: "UPLOAD".into(),
            status: NotificationStatus::Done,
        };
        let history = ChatHistory::new()
            .reduce(ChatHistoryAction::Upsert(message("stale", "old", "")))
            .reduce(ChatHistoryAction::Load(vec![
                ChatItem::Message(message("1", "q", "a")),
                ChatItem::Notification(notification),
            ]));

        assert_eq!(history.messages.len(), 1);
        assert_eq!(history.notifications.len(), 1);
        assert!(history.message("stale").is_none());
        let first = history.timeline().first().map(ChatItem::key);
        assert_eq!(first.as_deref(), Some("notification-n"));
    }

    #[test]
    fn clear_action_empties_everything() {
        let history = ChatHistory::new()
            .reduce(ChatHistoryAction::SetMessages(vec![message("1", "q", "a")]))
            .reduce(ChatHistoryAction::Clear);
        assert!(history.is_empty());
    }
}
