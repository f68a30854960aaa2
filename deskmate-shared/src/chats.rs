//! The user's chat list and the flows that manage it.

use std::cmp::Reverse;

use tracing::{debug, info};
use uuid::Uuid;

use crate::client::{ApiError, ChatApi};
use crate::models::{ChatEntity, ChatUpdatableProperties, parse_timestamp};

/// Chats of the current user, most recently created first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatList {
    chats: Vec<ChatEntity>,
}

impl ChatList {
    #[must_use]
    pub fn new(chats: Vec<ChatEntity>) -> Self {
        let mut list = Self::default();
        list.set(chats);
        list
    }

    /// Replaces the list. Chats with an unreadable `creation_time` go last.
    pub fn set(&mut self, mut chats: Vec<ChatEntity>) {
        chats.sort_by_cached_key(|chat| {
            let created = parse_timestamp(&chat.creation_time);
            (created.is_none(), Reverse(created))
        });
        self.chats = chats;
    }

    /// Replaces the chat with the same id, or inserts `chat` at the top.
    pub fn upsert(&mut self, chat: ChatEntity) {
        match self.chats.iter_mut().find(|item| item.chat_id == chat.chat_id) {
            Some(existing) => *existing = chat,
            None => self.chats.insert(0, chat),
        }
    }

    /// Returns whether a chat was removed.
    pub fn remove(&mut self, chat_id: Uuid) -> bool {
        let before = self.chats.len();
        self.chats.retain(|chat| chat.chat_id != chat_id);
        self.chats.len() != before
    }

    /// Returns whether the chat was found.
    pub fn rename(&mut self, chat_id: Uuid, name: &str) -> bool {
        match self.chats.iter_mut().find(|chat| chat.chat_id == chat_id) {
            Some(chat) => {
                chat.chat_name = name.to_string();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, chat_id: Uuid) -> Option<&ChatEntity> {
        self.chats.iter().find(|chat| chat.chat_id == chat_id)
    }

    #[must_use]
    pub fn chats(&self) -> &[ChatEntity] {
        &self.chats
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatEntity> {
        self.chats.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    /// Reloads the list from the API.
    ///
    /// # Errors
    /// Propagates the API failure; the list is left unchanged.
    pub async fn refresh<A: ChatApi + ?Sized>(&mut self, api: &A) -> Result<(), ApiError> {
        let chats = api.get_chats().await?;
        debug!(count = chats.len(), "refreshed chat list");
        self.set(chats);
        Ok(())
    }

    /// Deletes the chat remotely, then locally.
    ///
    /// # Errors
    /// Propagates the API failure; the chat stays listed.
    pub async fn delete_chat<A: ChatApi + ?Sized>(
        &mut self,
        api: &A,
        chat_id: Uuid,
    ) -> Result<(), ApiError> {
        api.delete_chat(chat_id).await?;
        info!(%chat_id, "deleted chat");
        self.remove(chat_id);
        Ok(())
    }

    /// Renames the chat remotely and stores the entity the API returns.
    ///
    /// # Errors
    /// Propagates the API failure.
    pub async fn rename_chat<A: ChatApi + ?Sized>(
        &mut self,
        api: &A,
        chat_id: Uuid,
        name: &str,
    ) -> Result<ChatEntity, ApiError> {
        let properties = ChatUpdatableProperties {
            chat_name: Some(name.to_string()),
        };
        let chat = api.update_chat(chat_id, &properties).await?;
        info!(%chat_id, name = %chat.chat_name, "renamed chat");
        self.upsert(chat.clone());
        Ok(chat)
    }
}
