pub(crate) mod use_chat;
pub(crate) mod use_chat_input;
pub(crate) mod use_chats;
pub(crate) mod use_onboarding;
pub(crate) mod use_onboarding_question;


pub use use_chat::use_chat;
pub use use_chat_input::use_chat_input;
pub use use_chats::use_chats;
pub use use_onboarding::use_onboarding;
pub use use_onboarding_question::use_onboarding_question;
