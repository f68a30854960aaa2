pub mod chats_state;
pub mod toast_state;
