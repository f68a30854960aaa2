use shared::toast::ToastVariant;
use yew::{Callback, Html, classes, function_component, html};
use yewdux::prelude::use_store;

use crate::models::toast_state::ToastState;

const fn variant_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Danger => "alert-error",
        ToastVariant::Warning => "alert-warning",
        ToastVariant::Success => "alert-success",
        ToastVariant::Info => "alert-info",
    }
}

/// Renders the active toasts; clicking one dismisses it.
#[function_component(ToastStack)]
pub fn toast_stack() -> Html {
    let (state, dispatch) = use_store::<ToastState>();

    html! {
        <div class="toast toast-end z-50">
            { for state.toasts.iter().map(|entry| {
                let id = entry.id;
                let onclick = {
                    let dispatch = dispatch.clone();
                    Callback::from(move |_| dispatch.reduce_mut(|state| state.dismiss(id)))
                };
                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("alert", variant_class(entry.toast.variant), "cursor-pointer")}
                        role="alert"
                        {onclick}
                    >
                        <span>{ entry.toast.text.clone() }</span>
                    </div>
                }
            })}
        </div>
    }
}
