//! Frontend configuration module
//!
//! The API base URL is fixed at build time; the access token is handed over
//! by the auth provider through local storage.

use gloo_storage::{LocalStorage, Storage};

/// Local storage key holding the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "deskmate.access_token";
const DEFAULT_API_URL: &str = "/api";

/// Frontend configuration for the support API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// API base URL, absolute or relative to the page origin
    pub api_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("DESKMATE_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The API URL made absolute against the current page.
    pub fn resolved_api_url(&self) -> String {
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        resolve_api_url(&self.api_url, origin.as_deref())
    }
}

/// Joins a path-only API URL onto `origin`; absolute URLs pass through.
pub fn resolve_api_url(api_url: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if api_url.starts_with('/') => {
            format!("{}{api_url}", origin.trim_end_matches('/'))
        }
        _ => api_url.to_string(),
    }
}

/// Token saved by the auth provider, if any.
pub fn stored_access_token() -> Option<String> {
    LocalStorage::get::<String>(ACCESS_TOKEN_KEY)
        .ok()
        .filter(|token| !token.trim().is_empty())
}

pub fn store_access_token(token: Option<&str>) {
    match token {
        Some(token) => {
            if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, token) {
                web_sys::console::warn_1(&format!("Failed to store access token: {err}").into());
            }
        }
        None => LocalStorage::delete(ACCESS_TOKEN_KEY),
    }
}
