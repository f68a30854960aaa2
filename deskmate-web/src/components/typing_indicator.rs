use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TypingIndicatorProps {
    /// Screen-reader text for the dots.
    #[prop_or(AttrValue::Static("Deskmate is answering"))]
    pub label: AttrValue,
}

/// Animated dots shown in place of an answer that has not arrived.
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    html! {
        <div class="flex items-center gap-1 py-2" role="status" aria-label={props.label.clone()}>
            <span class="typing-dot"></span>
            <span class="typing-dot"></span>
            <span class="typing-dot"></span>
        </div>
    }
}
