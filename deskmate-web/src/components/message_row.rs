use shared::rendering::{is_awaiting_answer, split_sources};
use yew::{Callback, Html, Properties, classes, function_component, html};

use crate::components::typing_indicator::TypingIndicator;

/// Name shown on assistant rows.
pub const BRAND_NAME: &str = "Deskmate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Properties, PartialEq, Clone)]
pub struct MessageRowProps {
    pub speaker: Speaker,
    pub text: String,
    /// The greeting row, which never waits for an answer.
    #[prop_or(false)]
    pub branded: bool,
}

const fn speaker_classes(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "bg-primary text-primary-content self-end",
        Speaker::Assistant => "bg-base-200 text-base-content self-start",
    }
}

const fn speaker_label(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "You",
        Speaker::Assistant => BRAND_NAME,
    }
}

fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[function_component(MessageRow)]
pub fn message_row(props: &MessageRowProps) -> Html {
    let is_assistant = props.speaker == Speaker::Assistant;
    if is_assistant && is_awaiting_answer(&props.text, props.branded) {
        return html! {
            <div class="mb-3 self-start" data-testid="message-row-pending">
                <TypingIndicator />
            </div>
        };
    }

    let (body, sources) = split_sources(&props.text);
    let on_copy = {
        let text = props.text.clone();
        Callback::from(move |_| copy_to_clipboard(&text))
    };

    html! {
        <div class="mb-3 flex flex-col space-y-1">
            <div class="text-xs font-semibold text-base-content/70">
                { speaker_label(props.speaker) }
            </div>
            <div class={classes!("rounded-xl", "px-4", "py-3", "shadow-sm", "whitespace-pre-wrap", speaker_classes(props.speaker))}>
                { body.to_string() }
                {
                    if let Some(sources) = sources {
                        html! {
                            <div class="mt-2 text-xs opacity-70">
                                <span class="font-semibold">{"Sources: "}</span>
                                { sources.to_string() }
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
            {
                if is_assistant {
                    html! {
                        <div class="flex items-center gap-2 text-xs">
                            <button class="btn btn-ghost btn-xs" type="button" onclick={on_copy}>
                                {"Copy"}
                            </button>
                        </div>
                    }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}
