use shared::models::OnboardingUpdate;
use shared::onboarding::OnboardingState;
use shared::toast::Toast;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, hook, use_state};
use yewdux::prelude::use_dispatch;

use crate::api;
use crate::models::toast_state::{ToastState, publish};

#[derive(Clone, PartialEq)]
pub struct UseOnboardingHandle {
    pub state: OnboardingState,
    pub update: Callback<OnboardingUpdate>,
}

/// Onboarding flags of the current user. Every step starts enabled.
#[hook]
pub fn use_onboarding() -> UseOnboardingHandle {
    let state = use_state(OnboardingState::always_on);
    let toasts = use_dispatch::<ToastState>();

    let update = {
        let state = state.clone();
        Callback::from(move |update: OnboardingUpdate| {
            let state = state.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    return;
                };
                let mut next = *state;
                match next.update_onboarding(&client, &update).await {
                    Ok(_) => state.set(next),
                    Err(err) => publish(&toasts, Toast::danger(err.to_string())),
                }
            });
        })
    };

    UseOnboardingHandle {
        state: *state,
        update,
    }
}
