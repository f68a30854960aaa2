use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::{ApiError, ChatApi, OnboardingApi};
use crate::config::ClientConfig;
use crate::models::{
    ChatEntity, ChatItem, ChatListResponse, ChatMessage, ChatUpdatableProperties,
    CreateChatRequest, ErrorResponse, Onboarding, OnboardingData, OnboardingUpdate,
    QuestionAndAnswer,
};

/// Lightweight reqwest client for the support API.
#[derive(Clone, Debug)]
pub struct DeskmateClient {
    base_url: String,
    access_token: Option<String>,
    client: Client,
}

impl DeskmateClient {
    /// Create a client for the API described by `config`.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] unless `config.api_url` is an absolute
    /// URL, or [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.api_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|err| ApiError::InvalidUrl {
            url: base_url.clone(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            base_url,
            access_token: config.access_token.clone(),
            client: build_http_client(config)?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the bearer token sent with every request.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.api_url(path);
        debug!(%method, %url, "sending support API request");
        let request = self.client.request(method, url);
        match &self.access_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|err| {
            warn!(error = %err, "support API request failed");
            ApiError::Transport(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.to_string(),
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string(),
            Err(_) => body,
        };
        warn!(status = status.as_u16(), %message, "support API returned an error");
        Err(ApiError::Status { status, message })
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        Self::send(request)
            .await?
            .json()
            .await
            .map_err(ApiError::Decode)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(ApiError::Transport)
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ClientConfig) -> Result<Client, ApiError> {
    Ok(Client::new())
}

#[async_trait(?Send)]
impl ChatApi for DeskmateClient {
    async fn create_chat(&self, name: &str) -> Result<ChatEntity, ApiError> {
        let payload = CreateChatRequest {
            name: name.to_string(),
        };
        Self::fetch(self.request(Method::POST, "chats").json(&payload)).await
    }

    async fn get_chats(&self) -> Result<Vec<ChatEntity>, ApiError> {
        let response: ChatListResponse = Self::fetch(self.request(Method::GET, "chats")).await?;
        Ok(response.chats)
    }

    async fn delete_chat(&self, chat_id: Uuid) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, &format!("chats/{chat_id}"))).await?;
        Ok(())
    }

    async fn post_message(&self, message: &ChatMessage) -> Result<ChatMessage, ApiError> {
        Self::fetch(self.request(Method::POST, "messages").json(message)).await
    }

    async fn get_chat_items(&self, chat_id: Uuid) -> Result<Vec<ChatItem>, ApiError> {
        Self::fetch(self.request(Method::GET, &format!("chats/{chat_id}/history"))).await
    }

    async fn update_chat(
        &self,
        chat_id: Uuid,
        properties: &ChatUpdatableProperties,
    ) -> Result<ChatEntity, ApiError> {
        Self::fetch(
            self.request(Method::PUT, &format!("chats/{chat_id}/metadata"))
                .json(properties),
        )
        .await
    }

    async fn add_question_and_answer(
        &self,
        chat_id: Uuid,
        question_and_answer: &QuestionAndAnswer,
    ) -> Result<ChatMessage, ApiError> {
        Self::fetch(
            self.request(Method::POST, &format!("chats/{chat_id}/question/answer"))
                .json(question_and_answer),
        )
        .await
    }
}

#[async_trait(?Send)]
impl OnboardingApi for DeskmateClient {
    async fn get_onboarding_data(&self) -> Result<OnboardingData, ApiError> {
        Self::fetch(self.request(Method::GET, "onboarding")).await
    }

    async fn update_onboarding(&self, update: &OnboardingUpdate) -> Result<Onboarding, ApiError> {
        Self::fetch(self.request(Method::PUT, "onboarding").json(update)).await
    }
}
