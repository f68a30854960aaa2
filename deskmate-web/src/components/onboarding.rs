use shared::client::OnboardingApi;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, Properties, function_component, html, use_state};
use yew_hooks::use_mount;

use crate::api;
use crate::components::message_row::{MessageRow, Speaker};
use crate::components::onboarding_questions::OnboardingQuestions;
use crate::hooks::use_onboarding;

#[derive(Properties, PartialEq)]
pub struct GreetingRowProps {
    pub greeting: String,
}

/// Branded assistant row with the greeting; nothing until there is text.
#[function_component(GreetingRow)]
pub fn greeting_row(props: &GreetingRowProps) -> Html {
    if props.greeting.trim().is_empty() {
        return Html::default();
    }
    html! {
        <MessageRow speaker={Speaker::Assistant} text={props.greeting.clone()} branded={true} />
    }
}

/// Greeting row, instructions and quick questions shown before the first
/// question of a chat.
#[function_component(Onboarding)]
pub fn onboarding() -> Html {
    let onboarding = use_onboarding();
    let greeting = use_state(String::new);

    {
        let greeting = greeting.clone();
        use_mount(move || {
            spawn_local(async move {
                let Some(client) = api::shared() else {
                    return;
                };
                match client.get_onboarding_data().await {
                    Ok(data) => greeting.set(data.greeting),
                    Err(err) => web_sys::console::warn_1(
                        &format!("Failed to load onboarding greeting: {err}").into(),
                    ),
                }
            });
        });
    }

    html! {
        <div class="flex flex-col gap-4">
            <GreetingRow greeting={(*greeting).clone()} />
            if onboarding.state.should_display_onboarding_a_instructions() {
                <p class="text-sm text-base-content/70">
                    {"Ask anything about your account, or start with one of these questions:"}
                </p>
            }
            if onboarding.state.is_onboarding() {
                <OnboardingQuestions />
            }
        </div>
    }
}
