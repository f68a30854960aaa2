use shared::models::{Notification, parse_timestamp};
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationRowProps {
    pub notification: Notification,
}

fn format_time(datetime: &str) -> String {
    parse_timestamp(datetime)
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[function_component(NotificationRow)]
pub fn notification_row(props: &NotificationRowProps) -> Html {
    let notification = &props.notification;
    let class = if notification.is_done() {
        classes!("text-success")
    } else {
        classes!("text-warning", "animate-pulse")
    };

    html! {
        <div class="my-2 flex items-center justify-center gap-2 text-xs">
            <span class={class}>{ notification.status.as_str() }</span>
            <span class="text-base-content/80">{ notification.display_text().to_string() }</span>
            <span class="text-base-content/50">{ format_time(&notification.datetime) }</span>
        </div>
    }
}
