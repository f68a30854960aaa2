//! User-visible notices raised by the chat flows.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ASK: &str = "Please write a question";
pub const LIMIT_REACHED: &str = "You have reached your daily message limit";
pub const ERROR_OCCURRED: &str = "An error occurred, please try again";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Danger,
    Warning,
    Success,
    Info,
}

impl ToastVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub variant: ToastVariant,
    pub text: String,
}

impl Toast {
    pub fn new(variant: ToastVariant, text: impl Into<String>) -> Self {
        Self {
            variant,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(ToastVariant::Danger, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, text)
    }

    #[must_use]
    pub fn is_danger(&self) -> bool {
        self.variant == ToastVariant::Danger
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.variant.as_str(), self.text)
    }
}

impl std::error::Error for Toast {}
