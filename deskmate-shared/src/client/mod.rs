//! Contract and HTTP implementation of the support API.

mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    ChatEntity, ChatItem, ChatMessage, ChatUpdatableProperties, Onboarding, OnboardingData,
    OnboardingUpdate, QuestionAndAnswer,
};

pub use http::DeskmateClient;

/// Failure of a support API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) | Self::Decode(err) => err.status(),
            Self::InvalidUrl { .. } => None,
        }
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Chat endpoints of the support API.
///
/// Futures are `?Send` so the browser client can implement the trait.
#[async_trait(?Send)]
pub trait ChatApi {
    /// Creates a chat named `name`.
    async fn create_chat(&self, name: &str) -> Result<ChatEntity, ApiError>;

    /// Lists the user's chats.
    async fn get_chats(&self) -> Result<Vec<ChatEntity>, ApiError>;

    async fn delete_chat(&self, chat_id: Uuid) -> Result<(), ApiError>;

    /// Posts a question; the server answers with the same message, `assistant` filled in.
    async fn post_message(&self, message: &ChatMessage) -> Result<ChatMessage, ApiError>;

    /// Full history of a chat: messages and notifications.
    async fn get_chat_items(&self, chat_id: Uuid) -> Result<Vec<ChatItem>, ApiError>;

    async fn update_chat(
        &self,
        chat_id: Uuid,
        properties: &ChatUpdatableProperties,
    ) -> Result<ChatEntity, ApiError>;

    /// Records a question with a known answer without asking the assistant.
    async fn add_question_and_answer(
        &self,
        chat_id: Uuid,
        question_and_answer: &QuestionAndAnswer,
    ) -> Result<ChatMessage, ApiError>;
}

/// Onboarding endpoints of the support API.
#[async_trait(?Send)]
pub trait OnboardingApi {
    async fn get_onboarding_data(&self) -> Result<OnboardingData, ApiError>;

    async fn update_onboarding(&self, update: &OnboardingUpdate) -> Result<Onboarding, ApiError>;
}
