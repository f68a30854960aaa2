use crate::pages::{ChatPage, ErrorPage};
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/chat")]
    NewChat,
    #[at("/chat/:chat_id")]
    Chat { chat_id: Uuid },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// The chat a route points at, if any.
    pub fn chat_id(&self) -> Option<Uuid> {
        match self {
            Self::Chat { chat_id } => Some(*chat_id),
            _ => None,
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    web_sys::console::debug_1(&format!("Switching to route: {route:?}").into());
    match route {
        MainRoute::Home | MainRoute::NewChat => html! { <ChatPage /> },
        MainRoute::Chat { chat_id } => html! { <ChatPage chat_id={Some(chat_id)} /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}
