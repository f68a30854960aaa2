use shared::models::ChatMessage;
use yew::{Html, Properties, function_component, html};

use crate::components::message_row::{MessageRow, Speaker};

#[derive(Properties, PartialEq, Clone)]
pub struct QaDisplayProps {
    pub message: ChatMessage,
}

/// A question and its answer.
#[function_component(QaDisplay)]
pub fn qa_display(props: &QaDisplayProps) -> Html {
    html! {
        <div class="flex flex-col">
            <MessageRow speaker={Speaker::User} text={props.message.user_message.clone()} />
            <MessageRow speaker={Speaker::Assistant} text={props.message.assistant.clone()} />
        </div>
    }
}
