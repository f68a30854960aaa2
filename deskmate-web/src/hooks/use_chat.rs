use std::future::Future;

use shared::models::ChatMessage;
use shared::session::{begin_question, ensure_chat, placeholder, reconcile};
use shared::toast::{ERROR_OCCURRED, Toast};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook, use_state};
use yew_router::prelude::{Navigator, use_navigator};
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::context::{ChatContext, use_chat_context};
use crate::hooks::use_chats::refresh_chats;
use crate::models::chats_state::ChatsState;
use crate::models::toast_state::{ToastState, publish};
use crate::routes::MainRoute;

/// A submitted question. `on_accepted` fires once the chat it goes to
/// exists, so the caller can clear its draft.
#[derive(Clone, PartialEq)]
pub struct QuestionRequest {
    pub text: String,
    pub on_accepted: Callback<()>,
}

#[derive(Clone, PartialEq)]
pub struct UseChatHandle {
    pub chat_id: Option<Uuid>,
    pub generating_answer: bool,
    pub add_question: Callback<QuestionRequest>,
}

/// Awaits `open` and fires `on_accepted` only if the chat is ready.
pub(crate) async fn accept_when_opened<T>(
    open: impl Future<Output = Result<T, Toast>>,
    on_accepted: &Callback<()>,
) -> Result<T, Toast> {
    let opened = open.await?;
    on_accepted.emit(());
    Ok(opened)
}

/// Everything a pending question needs once the chat exists.
#[derive(Clone)]
pub(crate) struct QuestionDeps {
    pub chat: ChatContext,
    pub navigator: Option<Navigator>,
    pub toasts: Dispatch<ToastState>,
    pub chats: Dispatch<ChatsState>,
}

impl QuestionDeps {
    /// Adopts `chat_id` as the current chat. A newly created chat gets its
    /// URL and a refreshed sidebar.
    pub fn enter_chat(&self, chat_id: Uuid, created: bool) {
        if !created {
            return;
        }
        self.chat.open(Some(chat_id));
        if let Some(navigator) = &self.navigator {
            navigator.replace(&MainRoute::Chat { chat_id });
        }
        refresh_chats(self.chats.clone());
    }

    /// Shows `pending`, posts it and folds in the answer.
    pub async fn send(&self, pending: ChatMessage) {
        let Some(client) = api::shared() else {
            publish(&self.toasts, Toast::danger(ERROR_OCCURRED));
            return;
        };
        self.chat.update_chat_history(pending.clone());
        match reconcile(&client, &pending).await {
            Ok(echo) => self.chat.update_chat_history(echo),
            Err(toast) => publish(&self.toasts, toast),
        }
    }
}

#[hook]
pub(crate) fn use_question_deps() -> QuestionDeps {
    QuestionDeps {
        chat: use_chat_context(),
        navigator: use_navigator(),
        toasts: use_dispatch::<ToastState>(),
        chats: use_dispatch::<ChatsState>(),
    }
}

/// Asks questions in the current chat, creating it on the first one.
#[hook]
pub fn use_chat() -> UseChatHandle {
    let deps = use_question_deps();
    let generating_answer = use_state(|| false);
    let chat_id = deps.chat.chat_id();

    let add_question = {
        let generating_answer = generating_answer.clone();
        Callback::from(move |request: QuestionRequest| {
            let QuestionRequest { text, on_accepted } = request;
            let question = match begin_question(&text) {
                Ok(question) => question.to_string(),
                Err(toast) => {
                    publish(&deps.toasts, toast);
                    return;
                }
            };

            generating_answer.set(true);
            let deps = deps.clone();
            let generating_answer = generating_answer.clone();
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    publish(&deps.toasts, Toast::danger(ERROR_OCCURRED));
                    generating_answer.set(false);
                    return;
                };
                let open = ensure_chat(&client, chat_id, &question);
                match accept_when_opened(open, &on_accepted).await {
                    Ok((chat_id, created)) => {
                        deps.enter_chat(chat_id, created);
                        deps.send(placeholder(chat_id, &question)).await;
                    }
                    Err(toast) => publish(&deps.toasts, toast),
                }
                generating_answer.set(false);
            });
        })
    };

    UseChatHandle {
        chat_id,
        generating_answer: *generating_answer,
        add_question,
    }
}
