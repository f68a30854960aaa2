//! Builds the display timeline out of chat messages and notifications.

use chrono::{DateTime, Utc};

use crate::models::{ChatItem, ChatMessage, Notification, parse_timestamp};

/// Merges messages and notifications into one time-ordered list.
///
/// Ordering is stable: items with equal timestamps keep their input order,
/// messages before notifications. Items whose timestamp cannot be parsed go
/// after every dated item. Within a run of consecutive `Done` notifications
/// only the most recent one is kept; `Pending` ones are never dropped.
#[must_use]
pub fn merge_chat_items(
    messages: &[ChatMessage],
    notifications: &[Notification],
) -> Vec<ChatItem> {
    let mut items: Vec<ChatItem> = messages
        .iter()
        .cloned()
        .map(ChatItem::Message)
        .chain(notifications.iter().cloned().map(ChatItem::Notification))
        .collect();

    items.sort_by_cached_key(sort_key);
    reduce_done_notifications(items)
}

fn sort_key(item: &ChatItem) -> (bool, Option<DateTime<Utc>>) {
    let parsed = parse_timestamp(item.time());
    (parsed.is_none(), parsed)
}

fn is_done_notification(item: &ChatItem) -> bool {
    matches!(item, ChatItem::Notification(notification) if notification.is_done())
}

fn reduce_done_notifications(items: Vec<ChatItem>) -> Vec<ChatItem> {
    let mut reduced: Vec<ChatItem> = Vec::with_capacity(items.len());
    for item in items {
        if is_done_notification(&item) && reduced.last().is_some_and(is_done_notification) {
            reduced.pop();
        }
        reduced.push(item);
    }
    reduced
}
