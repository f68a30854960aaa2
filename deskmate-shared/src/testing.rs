//! In-memory fakes of the support API for flow tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::client::{ApiError, ChatApi, OnboardingApi};
use crate::models::{
    ChatEntity, ChatItem, ChatMessage, ChatUpdatableProperties, Onboarding, OnboardingData,
    OnboardingUpdate, QuestionAndAnswer,
};

pub const FAKE_ANSWER: &str = "Here is what I found.";

/// Records every call and answers from in-memory state.
///
/// Setting `create_chat_status` or `post_status` makes the matching call fail
/// with that HTTP status.
pub struct FakeApi {
    pub calls: RefCell<Vec<String>>,
    pub chats: RefCell<Vec<ChatEntity>>,
    pub posted: RefCell<Vec<ChatMessage>>,
    pub items: RefCell<Vec<ChatItem>>,
    pub onboarding_data: RefCell<OnboardingData>,
    pub onboarding: Cell<Onboarding>,
    pub create_chat_status: Cell<Option<StatusCode>>,
    pub post_status: Cell<Option<StatusCode>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            chats: RefCell::default(),
            posted: RefCell::default(),
            items: RefCell::default(),
            onboarding_data: RefCell::new(OnboardingData {
                greeting: "Hi, how can I help?".into(),
                onboarding_b1: "How do I reset my password?".into(),
                onboarding_b2: "Where is my order?".into(),
                onboarding_b3: "How do I close my account?".into(),
            }),
            onboarding: Cell::new(Onboarding {
                onboarding_a: true,
                onboarding_b1: true,
                onboarding_b2: true,
                onboarding_b3: true,
            }),
            create_chat_status: Cell::new(None),
            post_status: Cell::new(None),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn chat(chat_id: Uuid, name: &str, creation_time: &str) -> ChatEntity {
        ChatEntity {
            chat_id,
            user_id: "user-1".into(),
            creation_time: creation_time.into(),
            chat_name: name.into(),
        }
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn failure(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            message: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ChatApi for FakeApi {
    async fn create_chat(&self, name: &str) -> Result<ChatEntity, ApiError> {
        self.record(format!("create_chat:{name}"));
        if let Some(status) = self.create_chat_status.get() {
            return Err(Self::failure(status));
        }
        let chat = Self::chat(Uuid::new_v4(), name, "2024-03-26T10:00:00Z");
        self.chats.borrow_mut().push(chat.clone());
        Ok(chat)
    }

    async fn get_chats(&self) -> Result<Vec<ChatEntity>, ApiError> {
        self.record("get_chats");
        Ok(self.chats.borrow().clone())
    }

    async fn delete_chat(&self, chat_id: Uuid) -> Result<(), ApiError> {
        self.record(format!("delete_chat:{chat_id}"));
        self.chats.borrow_mut().retain(|chat| chat.chat_id != chat_id);
        Ok(())
    }

    async fn post_message(&self, message: &ChatMessage) -> Result<ChatMessage, ApiError> {
        self.record(format!("post_message:{}", message.message_id));
        self.posted.borrow_mut().push(message.clone());
        if let Some(status) = self.post_status.get() {
            return Err(Self::failure(status));
        }
        Ok(ChatMessage {
            assistant: FAKE_ANSWER.into(),
            ..message.clone()
        })
    }

    async fn get_chat_items(&self, chat_id: Uuid) -> Result<Vec<ChatItem>, ApiError> {
        self.record(format!("get_chat_items:{chat_id}"));
        Ok(self.items.borrow().clone())
    }

    async fn update_chat(
        &self,
        chat_id: Uuid,
        properties: &ChatUpdatableProperties,
    ) -> Result<ChatEntity, ApiError> {
        self.record(format!("update_chat:{chat_id}"));
        let mut chats = self.chats.borrow_mut();
        let chat = chats
            .iter_mut()
            .find(|chat| chat.chat_id == chat_id)
            .ok_or_else(|| Self::failure(StatusCode::NOT_FOUND))?;
        if let Some(name) = &properties.chat_name {
            chat.chat_name.clone_from(name);
        }
        Ok(chat.clone())
    }

    async fn add_question_and_answer(
        &self,
        chat_id: Uuid,
        question_and_answer: &QuestionAndAnswer,
    ) -> Result<ChatMessage, ApiError> {
        self.record(format!("add_question_and_answer:{chat_id}"));
        Ok(ChatMessage {
            chat_id,
            message_id: Uuid::new_v4().to_string(),
            user_message: question_and_answer.question.clone(),
            assistant: question_and_answer.answer.clone(),
            message_time: "2024-03-26T10:00:00Z".into(),
        })
    }
}

#[async_trait(?Send)]
impl OnboardingApi for FakeApi {
    async fn get_onboarding_data(&self) -> Result<OnboardingData, ApiError> {
        self.record("get_onboarding_data");
        Ok(self.onboarding_data.borrow().clone())
    }

    async fn update_onboarding(&self, update: &OnboardingUpdate) -> Result<Onboarding, ApiError> {
        self.record("update_onboarding");
        let mut flags = self.onboarding.get();
        if let Some(value) = update.onboarding_a {
            flags.onboarding_a = value;
        }
        if let Some(value) = update.onboarding_b1 {
            flags.onboarding_b1 = value;
        }
        if let Some(value) = update.onboarding_b2 {
            flags.onboarding_b2 = value;
        }
        if let Some(value) = update.onboarding_b3 {
            flags.onboarding_b3 = value;
        }
        self.onboarding.set(flags);
        Ok(flags)
    }
}
