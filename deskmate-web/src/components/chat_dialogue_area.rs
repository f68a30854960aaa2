use shared::models::ChatItem;
use yew::{Html, function_component, html};

use crate::components::notification_row::NotificationRow;
use crate::components::onboarding::Onboarding;
use crate::components::qa_display::QaDisplay;
use crate::context::use_chat_context;
use crate::hooks::use_onboarding;

fn render_item(item: ChatItem) -> Html {
    let key = item.key();
    match item {
        ChatItem::Message(message) => html! { <QaDisplay key={key} {message} /> },
        ChatItem::Notification(notification) => {
            html! { <NotificationRow key={key} {notification} /> }
        }
    }
}

/// The merged message and notification timeline of the current chat.
#[function_component(ChatDialogueArea)]
pub fn chat_dialogue_area() -> Html {
    let chat = use_chat_context();
    let onboarding = use_onboarding();
    let items = chat.timeline();
    let show_onboarding = items.is_empty() && onboarding.state.should_display_welcome_chat();

    html! {
        <div class="flex flex-1 flex-col overflow-y-auto p-4">
            if show_onboarding {
                <Onboarding />
            }
            { for items.into_iter().map(render_item) }
        </div>
    }
}
