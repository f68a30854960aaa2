//! Helpers for the optimistic question flow.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{ChatMessage, now_timestamp};

/// Number of words of the first question used as a new chat's name.
pub const CHAT_NAME_WORDS: usize = 10;

/// Builds the message shown immediately when the user submits a question.
///
/// The server echoes the same `message_id` back, which is how the answer is
/// later reconciled into this row.
#[must_use]
pub fn generate_placeholder_message(chat_id: Uuid, user_message: &str) -> ChatMessage {
    ChatMessage {
        chat_id,
        message_id: Uuid::new_v4().to_string(),
        user_message: user_message.to_string(),
        assistant: String::new(),
        message_time: now_timestamp(),
    }
}

/// Placeholder for onboarding questions, keyed by the current epoch millis.
#[must_use]
pub fn generate_timestamped_placeholder(chat_id: Uuid, user_message: &str) -> ChatMessage {
    ChatMessage {
        message_id: Utc::now().timestamp_millis().to_string(),
        ..generate_placeholder_message(chat_id, user_message)
    }
}

/// Derives a chat name from the question that opens it.
#[must_use]
pub fn chat_name_from_question(question: &str) -> String {
    question
        .split_whitespace()
        .take(CHAT_NAME_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    #[test]
    fn placeholder_is_pending_and_dated() {
        let chat_id = Uuid::new_v4();
        let placeholder = generate_placeholder_message(chat_id, "Is my card blocked?");

        assert_eq!(placeholder.chat_id, chat_id);
        assert!(placeholder.is_pending());
        assert!(Uuid::parse_str(&placeholder.message_id).is_ok());
        assert!(parse_timestamp(&placeholder.message_time).is_some());
    }

    #[test]
    fn placeholders_get_distinct_ids() {
        let a = generate_placeholder_message(Uuid::nil(), "q");
        let b = generate_placeholder_message(Uuid::nil(), "q");
        assert_ne!(a.message_id, b.message_id);
    }

    #[test]
    fn timestamped_placeholder_uses_millis() {
        let placeholder = generate_timestamped_placeholder(Uuid::nil(), "q");
        assert!(placeholder.message_id.parse::<i64>().is_ok());
        assert!(placeholder.is_pending());
        // Same wire format as every other message time.
        assert!(placeholder.message_time.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&placeholder.message_time).is_ok());
    }

    #[test]
    fn chat_name_keeps_first_ten_words() {
        let question = "  one two   three four five six seven eight nine ten eleven twelve ";
        assert_eq!(
            chat_name_from_question(question),
            "one two three four five six seven eight nine ten"
        );
        assert_eq!(chat_name_from_question("Refund?"), "Refund?");
    }
}
