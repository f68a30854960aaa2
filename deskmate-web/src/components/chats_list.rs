use shared::models::ChatEntity;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html, use_state};
use yew_router::prelude::Link;

use crate::components::loading::Loading;
use crate::context::use_chat_context;
use crate::hooks::use_chats;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ChatsListItemProps {
    pub chat: ChatEntity,
    #[prop_or(false)]
    pub selected: bool,
    pub on_delete: Callback<Uuid>,
    pub on_rename: Callback<(Uuid, String)>,
}

#[function_component(ChatsListItem)]
pub fn chats_list_item(props: &ChatsListItemProps) -> Html {
    let editing = use_state(|| false);
    let draft = use_state(|| props.chat.chat_name.clone());
    let chat_id = props.chat.chat_id;

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            draft.set(target.value());
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let name = props.chat.chat_name.clone();
        Callback::from(move |_| {
            draft.set(name.clone());
            editing.set(true);
        })
    };

    let on_save = {
        let editing = editing.clone();
        let draft = draft.clone();
        let on_rename = props.on_rename.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            let name = draft.trim().to_string();
            if !name.is_empty() {
                on_rename.emit((chat_id, name));
            }
            editing.set(false);
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(chat_id))
    };

    let class = if props.selected {
        classes!("p-3", "bg-base-300")
    } else {
        classes!("p-3", "hover:bg-base-200")
    };

    html! {
        <li {class}>
            if *editing {
                <form class="flex gap-1" onsubmit={on_save}>
                    <input class="input input-bordered input-xs flex-1" value={(*draft).clone()} oninput={on_input} />
                    <button class="btn btn-xs" type="submit">{"Save"}</button>
                </form>
            } else {
                <div class="flex items-center justify-between gap-2">
                    <Link<MainRoute> to={MainRoute::Chat { chat_id }} classes="text-sm font-medium truncate">
                        { props.chat.chat_name.clone() }
                    </Link<MainRoute>>
                    <div class="flex gap-1">
                        <button class="btn btn-ghost btn-xs" type="button" onclick={on_edit}>{"Rename"}</button>
                        <button class="btn btn-ghost btn-xs" type="button" onclick={on_delete}>{"Delete"}</button>
                    </div>
                </div>
            }
        </li>
    }
}

/// Sidebar listing the user's chats.
#[function_component(ChatsList)]
pub fn chats_list() -> Html {
    let chats = use_chats();
    let current = use_chat_context().chat_id();

    if !chats.state.loaded {
        return html! { <Loading /> };
    }

    html! {
        <nav class="flex flex-col">
            <Link<MainRoute> to={MainRoute::NewChat} classes="btn btn-primary btn-sm m-3">
                {"New chat"}
            </Link<MainRoute>>
            if chats.state.chats.is_empty() {
                <div class="p-4 text-sm text-base-content/70">
                    {"No chats yet. Ask a question to start one."}
                </div>
            } else {
                <ul class="divide-y divide-base-300">
                    { for chats.state.chats.iter().map(|chat| html! {
                        <ChatsListItem
                            key={chat.chat_id.to_string()}
                            chat={chat.clone()}
                            selected={current == Some(chat.chat_id)}
                            on_delete={chats.delete.clone()}
                            on_rename={chats.rename.clone()}
                        />
                    })}
                </ul>
            }
        </nav>
    }
}
