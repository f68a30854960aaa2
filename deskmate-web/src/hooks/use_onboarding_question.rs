use shared::models::QuestionId;
use shared::onboarding::fetch_question;
use shared::placeholder::generate_timestamped_placeholder;
use shared::session::ensure_chat;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook, use_state};
use yew_hooks::use_mount;

use crate::api;
use crate::hooks::use_chat::use_question_deps;
use crate::models::toast_state::publish;

#[derive(Clone, PartialEq)]
pub struct UseOnboardingQuestionHandle {
    /// Empty until the onboarding content is loaded.
    pub question: String,
    pub handle_click: Callback<()>,
}

/// Text of quick question `question_id` and the action asking it.
#[hook]
pub fn use_onboarding_question(question_id: QuestionId) -> UseOnboardingQuestionHandle {
    let deps = use_question_deps();
    let question = use_state(String::new);

    {
        let question = question.clone();
        let toasts = deps.toasts.clone();
        use_mount(move || {
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    return;
                };
                match fetch_question(&client, question_id).await {
                    Ok(text) => question.set(text),
                    Err(toast) => publish(&toasts, toast),
                }
            });
        });
    }

    let handle_click = {
        let text = (*question).clone();
        let chat_id = deps.chat.chat_id();
        Callback::from(move |()| {
            if text.is_empty() {
                return;
            }
            let deps = deps.clone();
            let text = text.clone();
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    return;
                };
                match ensure_chat(&client, chat_id, &text).await {
                    Ok((chat_id, created)) => {
                        deps.enter_chat(chat_id, created);
                        deps.send(generate_timestamped_placeholder(chat_id, &text))
                            .await;
                    }
                    Err(toast) => publish(&deps.toasts, toast),
                }
            });
        })
    };

    UseOnboardingQuestionHandle {
        question: (*question).clone(),
        handle_click,
    }
}
