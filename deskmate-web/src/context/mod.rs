pub(crate) mod chat_provider;

pub use chat_provider::{ChatContext, ChatProvider, use_chat_context};
