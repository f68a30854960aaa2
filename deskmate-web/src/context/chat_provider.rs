use std::rc::Rc;

use shared::history::{ChatHistory, ChatHistoryAction};
use shared::models::{ChatItem, ChatMessage, Notification};
use uuid::Uuid;
use yew::{
    Children, Html, Properties, Reducible, UseReducerHandle, function_component, html,
    use_context, use_reducer,
};

/// The chat on screen and its local history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    pub chat_id: Option<Uuid>,
    pub history: ChatHistory,
}

pub enum ChatAction {
    /// Switch to another chat (or to a new one); clears the history.
    Open(Option<Uuid>),
    History(ChatHistoryAction),
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ChatAction::Open(chat_id) if chat_id == self.chat_id => self,
            ChatAction::Open(chat_id) => Rc::new(Self {
                chat_id,
                history: ChatHistory::new(),
            }),
            ChatAction::History(action) => {
                let mut next = (*self).clone();
                next.history.apply(action);
                Rc::new(next)
            }
        }
    }
}

/// Handle passed down through the chat context.
#[derive(Clone, PartialEq)]
pub struct ChatContext {
    state: UseReducerHandle<ChatState>,
}

impl ChatContext {
    pub fn chat_id(&self) -> Option<Uuid> {
        self.state.chat_id
    }

    pub fn history(&self) -> &ChatHistory {
        &self.state.history
    }

    pub fn timeline(&self) -> Vec<ChatItem> {
        self.state.history.timeline()
    }

    pub fn open(&self, chat_id: Option<Uuid>) {
        self.state.dispatch(ChatAction::Open(chat_id));
    }

    pub fn update_chat_history(&self, message: ChatMessage) {
        self.dispatch(ChatHistoryAction::Upsert(message));
    }

    pub fn remove_message(&self, message_id: String) {
        self.dispatch(ChatHistoryAction::Remove(message_id));
    }

    pub fn set_messages(&self, messages: Vec<ChatMessage>) {
        self.dispatch(ChatHistoryAction::SetMessages(messages));
    }

    pub fn set_notifications(&self, notifications: Vec<Notification>) {
        self.dispatch(ChatHistoryAction::SetNotifications(notifications));
    }

    pub fn load(&self, items: Vec<ChatItem>) {
        self.dispatch(ChatHistoryAction::Load(items));
    }

    fn dispatch(&self, action: ChatHistoryAction) {
        self.state.dispatch(ChatAction::History(action));
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ChatProvider)]
pub fn chat_provider(props: &ChatProviderProps) -> Html {
    let state = use_reducer(ChatState::default);
    let context = ChatContext { state };

    html! {
        <yew::ContextProvider<ChatContext> {context}>
            { props.children.clone() }
        </yew::ContextProvider<ChatContext>>
    }
}

/// The chat context of the nearest [`ChatProvider`].
///
/// # Panics
/// Panics when called outside a [`ChatProvider`].
#[yew::hook]
pub fn use_chat_context() -> ChatContext {
    use_context::<ChatContext>().expect("use_chat_context must be used within a ChatProvider")
}
