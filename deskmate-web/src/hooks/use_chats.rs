use std::rc::Rc;

use shared::client::ChatApi;
use shared::toast::Toast;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook};
use yew_hooks::use_mount;
use yew_router::prelude::use_navigator;
use yewdux::Dispatch;
use yewdux::prelude::{use_dispatch, use_store};

use crate::api;
use crate::context::use_chat_context;
use crate::models::chats_state::ChatsState;
use crate::models::toast_state::{ToastState, publish};
use crate::routes::MainRoute;

#[derive(Clone, PartialEq)]
pub struct UseChatsHandle {
    pub state: Rc<ChatsState>,
    pub delete: Callback<Uuid>,
    pub rename: Callback<(Uuid, String)>,
}

/// Reloads the chat list into the store.
pub fn refresh_chats(dispatch: Dispatch<ChatsState>) {
    spawn_local(async move {
        let Some(client) = api::shared() else {
            return;
        };
        match client.get_chats().await {
            Ok(chats) => dispatch.reduce_mut(|state| {
                state.chats.set(chats);
                state.loaded = true;
            }),
            Err(err) => {
                web_sys::console::warn_1(&format!("Failed to load chats: {err}").into());
            }
        }
    });
}

/// The chat list, loaded on mount, with delete and rename actions.
#[hook]
pub fn use_chats() -> UseChatsHandle {
    let (state, dispatch) = use_store::<ChatsState>();
    let toasts = use_dispatch::<ToastState>();
    let chat = use_chat_context();
    let navigator = use_navigator();

    {
        let dispatch = dispatch.clone();
        use_mount(move || refresh_chats(dispatch));
    }

    let delete = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |chat_id: Uuid| {
            let dispatch = dispatch.clone();
            let toasts = toasts.clone();
            let chat = chat.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    return;
                };
                match client.delete_chat(chat_id).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|state| {
                            state.chats.remove(chat_id);
                        });
                        if chat.chat_id() == Some(chat_id) {
                            chat.open(None);
                            if let Some(navigator) = navigator {
                                navigator.replace(&MainRoute::NewChat);
                            }
                        }
                        publish(&toasts, Toast::success("Chat deleted"));
                    }
                    Err(err) => publish(&toasts, Toast::danger(err.to_string())),
                }
            });
        })
    };

    let rename = Callback::from(move |(chat_id, name): (Uuid, String)| {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        spawn_local(async move {
            let Some(client) = api::shared() else {
                return;
            };
            let properties = shared::models::ChatUpdatableProperties {
                chat_name: Some(name),
            };
            match client.update_chat(chat_id, &properties).await {
                Ok(updated) => dispatch.reduce_mut(|state| state.chats.upsert(updated)),
                Err(err) => publish(&toasts, Toast::danger(err.to_string())),
            }
        });
    });

    UseChatsHandle {
        state,
        delete,
        rename,
    }
}
