//! Wire models exchanged with the Deskmate support API.

pub mod chat;
pub mod errors;
pub mod notification;
pub mod onboarding;
pub mod timestamp;

pub use chat::{
    ChatEntity, ChatItem, ChatListResponse, ChatMessage, ChatQuestion, ChatUpdatableProperties,
    CreateChatRequest, QuestionAndAnswer,
};
pub use errors::ErrorResponse;
pub use notification::{Notification, NotificationStatus};
pub use onboarding::{Onboarding, OnboardingData, OnboardingUpdate, QuestionId};
pub use timestamp::{now_timestamp, parse_timestamp};
