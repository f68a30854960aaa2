use once_cell::unsync::OnceCell;
use shared::client::DeskmateClient;
use shared::config::ClientConfig;

use crate::config::{FrontendConfig, stored_access_token};

thread_local! {
    static SHARED_CLIENT: OnceCell<Option<DeskmateClient>> = const { OnceCell::new() };
}

/// The page-wide API client, carrying the current access token.
///
/// Returns `None` when the configured API URL cannot be used; the cause is
/// logged to the console once.
pub fn shared() -> Option<DeskmateClient> {
    let mut client = SHARED_CLIENT.with(|cell| cell.get_or_init(build_client).clone())?;
    client.set_access_token(stored_access_token());
    Some(client)
}

fn build_client() -> Option<DeskmateClient> {
    let config = ClientConfig::for_url(FrontendConfig::new().resolved_api_url());
    match DeskmateClient::new(&config) {
        Ok(client) => Some(client),
        Err(err) => {
            web_sys::console::error_1(&format!("Cannot reach the support API: {err}").into());
            None
        }
    }
}
