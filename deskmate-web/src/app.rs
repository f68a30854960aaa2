use crate::components::{Loading, ToastStack};
use crate::context::ChatProvider;
use crate::routes::{MainRoute, switch};
use yew::suspense::Suspense;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Suspense fallback={ html!{ <Loading/> } }>
            <BrowserRouter>
                <ChatProvider>
                    <Switch<MainRoute> render={switch} />
                    <ToastStack />
                </ChatProvider>
            </BrowserRouter>
        </Suspense>
    }
}
