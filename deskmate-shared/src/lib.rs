#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared building blocks for the Deskmate support client.
//!
//! Everything here compiles for both native targets (CLI) and `wasm32`
//! (the Yew front-end): wire models, the REST client, and the chat state
//! machinery that turns API calls into a display timeline.

pub mod chats;
pub mod client;
pub mod config;
pub mod history;
pub mod models;
pub mod onboarding;
pub mod placeholder;
pub mod rendering;
pub mod session;
pub mod timeline;
pub mod toast;

#[cfg(test)]
pub(crate) mod testing;
