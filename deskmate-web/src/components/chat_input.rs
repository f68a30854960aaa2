use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, TargetCast, classes, function_component, html};

use crate::hooks::use_chat_input;

#[function_component(ChatInput)]
pub fn chat_input() -> Html {
    let input = use_chat_input();

    let on_change = {
        let set_message = input.set_message.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            set_message.emit(target.value());
        })
    };

    let on_keydown = {
        let submit = input.submit.clone();
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                submit.emit(());
            }
        })
    };

    let on_submit = {
        let submit = input.submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            submit.emit(());
        })
    };

    let label = if input.generating_answer {
        "Thinking..."
    } else {
        "Ask"
    };

    html! {
        <form class="flex items-end gap-2 border-t border-base-300 p-4" onsubmit={on_submit}>
            <textarea
                class={classes!("textarea", "textarea-bordered", "flex-1", "min-h-[3rem]")}
                placeholder="Ask a question..."
                value={input.message.clone()}
                oninput={on_change}
                onkeydown={on_keydown}
            />
            <button
                class="btn btn-primary"
                type="submit"
                disabled={input.generating_answer}
            >
                { label }
            </button>
        </form>
    }
}
