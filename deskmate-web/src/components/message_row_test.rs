//! Server-side rendering checks for the chat and greeting row components.

use shared::models::{Notification, NotificationStatus};
use wasm_bindgen_test::*;
use yew::LocalServerRenderer;

use super::message_row::{MessageRow, MessageRowProps, Speaker};
use super::notification_row::{NotificationRow, NotificationRowProps};
use super::onboarding::{GreetingRow, GreetingRowProps};

wasm_bindgen_test_configure!(run_in_browser);

async fn render_row(speaker: Speaker, text: &str, branded: bool) -> String {
    LocalServerRenderer::<MessageRow>::with_props(MessageRowProps {
        speaker,
        text: text.to_string(),
        branded,
    })
    .render()
    .await
}

#[wasm_bindgen_test]
async fn assistant_row_splits_sources() {
    let html = render_row(
        Speaker::Assistant,
        "Reset it from settings. **Sources:** faq.md",
        false,
    )
    .await;

    assert!(html.contains("Reset it from settings."));
    assert!(html.contains("faq.md"));
    assert!(!html.contains("**Sources:**"));
    assert!(html.contains("Copy"));
}

#[wasm_bindgen_test]
async fn blank_assistant_row_shows_spinner() {
    let html = render_row(Speaker::Assistant, "", false).await;
    assert!(html.contains("message-row-pending"));
}

#[wasm_bindgen_test]
async fn branded_row_never_spins() {
    let html = render_row(Speaker::Assistant, "", true).await;
    assert!(!html.contains("message-row-pending"));
}

#[wasm_bindgen_test]
async fn user_row_has_no_copy_button() {
    let html = render_row(Speaker::User, "Where is my order?", false).await;
    assert!(html.contains("Where is my order?"));
    assert!(!html.contains("Copy"));
}

#[wasm_bindgen_test]
async fn notification_row_falls_back_to_action() {
    let html = LocalServerRenderer::<NotificationRow>::with_props(NotificationRowProps {
        notification: Notification {
            id: "n-1".into(),
            datetime: "2024-03-26T10:05:00Z".into(),
            chat_id: None,
            message: None,
            action: "CRAWL".into(),
            status: NotificationStatus::Pending,
        },
    })
    .render()
    .await;

    assert!(html.contains("CRAWL"));
    assert!(html.contains("Pending"));
    assert!(html.contains("10:05"));
}

async fn render_greeting(greeting: &str) -> String {
    LocalServerRenderer::<GreetingRow>::with_props(GreetingRowProps {
        greeting: greeting.to_string(),
    })
    .render()
    .await
}

#[wasm_bindgen_test]
async fn greeting_row_waits_for_text() {
    let html = render_greeting("").await;
    assert!(!html.contains("rounded-xl"));
    assert!(!html.contains("Copy"));
}

#[wasm_bindgen_test]
async fn greeting_row_shows_loaded_greeting() {
    let html = render_greeting("Hi, how can I help?").await;
    assert!(html.contains("Hi, how can I help?"));
    assert!(!html.contains("message-row-pending"));
}
