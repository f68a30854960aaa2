use shared::client::ChatApi;
use shared::toast::Toast;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, Properties, function_component, html, use_effect_with};
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::components::{ChatDialogueArea, ChatInput, ChatsList};
use crate::context::use_chat_context;
use crate::models::toast_state::{ToastState, publish};

#[derive(Properties, PartialEq, Eq)]
pub struct ChatPageProps {
    #[prop_or(None)]
    pub chat_id: Option<Uuid>,
}

#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let chat = use_chat_context();
    let toasts = use_dispatch::<ToastState>();

    // Load history when the URL points at a chat other than the one on screen.
    // A chat created from this page is already current and keeps its rows.
    {
        let chat = chat.clone();
        use_effect_with(props.chat_id, move |chat_id| {
            let chat_id = *chat_id;
            if chat.chat_id() != chat_id {
                chat.open(chat_id);
                if let Some(chat_id) = chat_id {
                    spawn_local(async move {
                        let Some(client) = api::shared() else {
                            return;
                        };
                        match client.get_chat_items(chat_id).await {
                            Ok(items) => chat.load(items),
                            Err(err) => publish(&toasts, Toast::danger(err.to_string())),
                        }
                    });
                }
            }
            || ()
        });
    }

    html! {
        <div class="flex h-screen">
            <aside class="w-72 overflow-y-auto border-r border-base-300">
                <ChatsList />
            </aside>
            <main class="flex flex-1 flex-col">
                <ChatDialogueArea />
                <ChatInput />
            </main>
        </div>
    }
}
