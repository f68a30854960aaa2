use yew::{Callback, hook, use_state};

use crate::hooks::use_chat::{QuestionRequest, use_chat};

#[derive(Clone, PartialEq)]
pub struct UseChatInputHandle {
    pub message: String,
    pub set_message: Callback<String>,
    pub submit: Callback<()>,
    pub generating_answer: bool,
}

/// Draft text of the chat input and its submit action.
///
/// The draft survives a rejected question (blank text, daily limit, failed
/// chat creation) and is cleared once the question is accepted.
#[hook]
pub fn use_chat_input() -> UseChatInputHandle {
    let chat = use_chat();
    let message = use_state(String::new);

    let set_message = {
        let message = message.clone();
        Callback::from(move |text: String| message.set(text))
    };

    let submit = {
        let message = message.clone();
        let add_question = chat.add_question.clone();
        let generating_answer = chat.generating_answer;
        Callback::from(move |()| {
            if generating_answer {
                return;
            }
            let draft = message.clone();
            add_question.emit(QuestionRequest {
                text: (*message).clone(),
                on_accepted: Callback::from(move |()| draft.set(String::new())),
            });
        })
    };

    UseChatInputHandle {
        message: (*message).clone(),
        set_message,
        submit,
        generating_answer: chat.generating_answer,
    }
}
