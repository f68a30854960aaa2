pub(crate) mod chat_dialogue_area;
pub(crate) mod chat_input;
pub(crate) mod chats_list;
pub(crate) mod loading;
pub(crate) mod message_row;
pub(crate) mod notification_row;
pub(crate) mod onboarding;
pub(crate) mod onboarding_questions;
pub(crate) mod qa_display;
pub(crate) mod toast_stack;
pub(crate) mod typing_indicator;

#[cfg(all(test, target_arch = "wasm32"))]
mod message_row_test;

// Re-export components for convenience
pub use chat_dialogue_area::ChatDialogueArea;
pub use chat_input::ChatInput;
pub use chats_list::ChatsList;
pub use loading::Loading;
pub use toast_stack::ToastStack;
