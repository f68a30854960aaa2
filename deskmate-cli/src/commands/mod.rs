pub mod ask;
pub mod chats;
pub mod completion;
pub mod config;
pub mod history;
pub mod onboarding;

use std::fmt::Display;

use anyhow::{Result, bail};
use shared::client::ApiError;
use shared::config::client::ENV_ACCESS_TOKEN;
use shared::models::{ChatItem, ChatMessage, Notification};
use shared::rendering::split_sources;
use shared::session::QuestionOutcome;

const PENDING_ANSWER: &str = "(waiting for an answer)";

/// Wraps an API failure for `action`, pointing at the token when the API
/// rejected it.
pub fn api_failure(err: ApiError, action: impl Display) -> anyhow::Error {
    let unauthorized = err.is_unauthorized();
    let err = anyhow::Error::new(err).context(format!("failed to {action}"));
    if unauthorized {
        err.context(format!(
            "the support API rejected the access token; pass --token or set {ENV_ACCESS_TOKEN}"
        ))
    } else {
        err
    }
}

/// Formats the assistant's answer, with its sources on a separate line.
pub fn format_answer(message: &ChatMessage) -> String {
    if message.is_pending() {
        return PENDING_ANSWER.to_string();
    }
    match split_sources(&message.assistant) {
        (body, Some(sources)) => format!("{body}\n\nSources: {sources}"),
        (body, None) => body.to_string(),
    }
}

pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {} ({})",
        notification.status.as_str(),
        notification.display_text(),
        notification.datetime
    )
}

/// One timeline entry as printed by `history`.
pub fn format_item(item: &ChatItem) -> String {
    match item {
        ChatItem::Message(message) => format!(
            "You ({}): {}\nDeskmate: {}",
            message.message_time,
            message.user_message,
            format_answer(message)
        ),
        ChatItem::Notification(notification) => format_notification(notification),
    }
}

/// Prints the outcome of a question and fails if it carried a toast.
pub fn report_outcome(outcome: &QuestionOutcome) -> Result<()> {
    if outcome.chat_created {
        println!("Created chat {}", outcome.chat_id);
    }
    if let Some(toast) = &outcome.toast {
        bail!("{}", toast.text);
    }
    println!("{}", format_answer(&outcome.message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::NotificationStatus;
    use uuid::Uuid;

    fn message(assistant: &str) -> ChatMessage {
        ChatMessage {
            chat_id: Uuid::nil(),
            message_id: "m1".into(),
            user_message: "How do I reset my password?".into(),
            assistant: assistant.into(),
            message_time: "2024-03-26T10:00:00Z".into(),
        }
    }

    #[test]
    fn answer_moves_sources_to_their_own_line() {
        let text = format_answer(&message("Use the settings page. **Sources:** faq.md"));
        assert_eq!(text, "Use the settings page.\n\nSources: faq.md");
    }

    #[test]
    fn unanswered_message_reads_as_waiting() {
        assert_eq!(format_answer(&message("  ")), PENDING_ANSWER);
    }

    #[test]
    fn message_item_shows_both_sides() {
        let text = format_item(&ChatItem::Message(message("Use the settings page.")));
        let (asked, answered) = text.split_once('\n').unwrap();
        assert_eq!(asked, "You (2024-03-26T10:00:00Z): How do I reset my password?");
        assert_eq!(answered, "Deskmate: Use the settings page.");
    }

    #[test]
    fn notification_item_falls_back_to_action() {
        let notification = Notification {
            id: "n1".into(),
            datetime: "2024-03-26T10:01:00Z".into(),
            chat_id: None,
            message: None,
            action: "UPLOAD".into(),
            status: NotificationStatus::Pending,
        };
        assert_eq!(
            format_item(&ChatItem::Notification(notification)),
            "[Pending] UPLOAD (2024-03-26T10:01:00Z)"
        );
    }

    #[test]
    fn outcome_with_toast_is_an_error() {
        let outcome = QuestionOutcome {
            chat_id: Uuid::nil(),
            chat_created: false,
            message: message(""),
            toast: Some(shared::toast::Toast::danger(shared::toast::ERROR_OCCURRED)),
        };
        let err = report_outcome(&outcome).unwrap_err();
        assert_eq!(err.to_string(), shared::toast::ERROR_OCCURRED);
    }
}
