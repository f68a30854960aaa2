//! The question flow: optimistic placeholder, then reconcile with the server.
//!
//! The steps are exposed as free functions so a UI can render the
//! placeholder before awaiting the answer. [`ChatSession`] chains them for
//! callers that own their state, like the CLI.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::client::{ApiError, ChatApi};
use crate::history::ChatHistory;
use crate::models::ChatMessage;
use crate::placeholder::{chat_name_from_question, generate_placeholder_message};
use crate::toast::{ASK, ERROR_OCCURRED, LIMIT_REACHED, Toast};

/// Result of a submitted question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub chat_id: Uuid,
    /// True when the question opened a new chat.
    pub chat_created: bool,
    /// The reconciled message, or the placeholder if posting failed.
    pub message: ChatMessage,
    /// Raised when posting failed after the placeholder was shown.
    pub toast: Option<Toast>,
}

impl QuestionOutcome {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.toast.is_none() && !self.message.is_pending()
    }
}

/// Validates a submitted question and returns it trimmed.
///
/// # Errors
/// Returns the [`ASK`] toast for blank input.
pub fn begin_question(question: &str) -> Result<&str, Toast> {
    let question = question.trim();
    if question.is_empty() {
        return Err(Toast::danger(ASK));
    }
    Ok(question)
}

/// Returns the chat to post into, creating one named after `question` when
/// `chat_id` is `None`. The flag is true when a chat was created.
///
/// # Errors
/// Returns [`LIMIT_REACHED`] when the API rate-limits the user and
/// [`ERROR_OCCURRED`] for any other failure.
pub async fn ensure_chat<A: ChatApi + ?Sized>(
    api: &A,
    chat_id: Option<Uuid>,
    question: &str,
) -> Result<(Uuid, bool), Toast> {
    if let Some(chat_id) = chat_id {
        return Ok((chat_id, false));
    }

    let chat = api
        .create_chat(&chat_name_from_question(question))
        .await
        .map_err(|err| creation_toast(&err))?;
    info!(chat_id = %chat.chat_id, "created chat");
    Ok((chat.chat_id, true))
}

fn creation_toast(err: &ApiError) -> Toast {
    warn!(error = %err, "failed to create chat");
    if err.is_rate_limited() {
        Toast::danger(LIMIT_REACHED)
    } else {
        Toast::danger(ERROR_OCCURRED)
    }
}

/// The pending message shown while the answer is generated.
#[must_use]
pub fn placeholder(chat_id: Uuid, question: &str) -> ChatMessage {
    generate_placeholder_message(chat_id, question)
}

/// Posts `placeholder` and returns the server echo to fold back into the
/// history with [`ChatHistory::update_chat_history`].
///
/// # Errors
/// Returns a danger toast carrying the API error text.
pub async fn reconcile<A: ChatApi + ?Sized>(
    api: &A,
    placeholder: &ChatMessage,
) -> Result<ChatMessage, Toast> {
    debug!(message_id = %placeholder.message_id, "posting question");
    api.post_message(placeholder).await.map_err(|err| {
        warn!(error = %err, message_id = %placeholder.message_id, "failed to post question");
        Toast::danger(err.to_string())
    })
}

/// A chat conversation driven through the support API.
pub struct ChatSession<A> {
    api: A,
    chat_id: Option<Uuid>,
    history: ChatHistory,
    generating_answer: bool,
}

impl<A: ChatApi> ChatSession<A> {
    /// Session without a chat; the first question creates one.
    pub fn new(api: A) -> Self {
        Self {
            api,
            chat_id: None,
            history: ChatHistory::new(),
            generating_answer: false,
        }
    }

    pub fn with_chat(api: A, chat_id: Uuid) -> Self {
        Self {
            chat_id: Some(chat_id),
            ..Self::new(api)
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn chat_id(&self) -> Option<Uuid> {
        self.chat_id
    }

    pub fn set_chat_id(&mut self, chat_id: Option<Uuid>) {
        if self.chat_id != chat_id {
            self.history.clear();
        }
        self.chat_id = chat_id;
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ChatHistory {
        &mut self.history
    }

    pub fn generating_answer(&self) -> bool {
        self.generating_answer
    }

    /// Replaces the local history with the server's.
    ///
    /// A session without a chat has nothing to load.
    ///
    /// # Errors
    /// Propagates the API failure.
    pub async fn load_history(&mut self) -> Result<(), ApiError> {
        let Some(chat_id) = self.chat_id else {
            return Ok(());
        };
        let items = self.api.get_chat_items(chat_id).await?;
        debug!(%chat_id, count = items.len(), "loaded chat history");
        self.history.load_chat_items(items);
        Ok(())
    }

    /// Asks `question`, creating the chat first if needed.
    ///
    /// A failed post keeps the placeholder in the history and is reported
    /// through [`QuestionOutcome::toast`].
    ///
    /// # Errors
    /// Returns the toast to show when the question is blank or the chat
    /// cannot be created.
    pub async fn add_question(&mut self, question: &str) -> Result<QuestionOutcome, Toast> {
        let question = begin_question(question)?;
        self.generating_answer = true;
        let outcome = self.ask(question).await;
        self.generating_answer = false;
        outcome
    }

    async fn ask(&mut self, question: &str) -> Result<QuestionOutcome, Toast> {
        let (chat_id, chat_created) = ensure_chat(&self.api, self.chat_id, question).await?;
        self.chat_id = Some(chat_id);

        let pending = placeholder(chat_id, question);
        Ok(self.send(chat_id, chat_created, pending).await)
    }

    /// Shows `pending`, posts it and reconciles the answer.
    pub(crate) async fn send(
        &mut self,
        chat_id: Uuid,
        chat_created: bool,
        pending: ChatMessage,
    ) -> QuestionOutcome {
        self.history.update_chat_history(pending.clone());

        match reconcile(&self.api, &pending).await {
            Ok(echo) => {
                self.history.update_chat_history(echo);
                let message = self
                    .history
                    .message(&pending.message_id)
                    .cloned()
                    .unwrap_or(pending);
                QuestionOutcome {
                    chat_id,
                    chat_created,
                    message,
                    toast: None,
                }
            }
            Err(toast) => QuestionOutcome {
                chat_id,
                chat_created,
                message: pending,
                toast: Some(toast),
            },
        }
    }
}
