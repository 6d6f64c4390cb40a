mod api;
mod components;
mod state;

use dwed_chat_core::SessionConfig;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

use api::HttpBackend;
use components::chat::ChatWindow;
use state::ChatState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    ChatState::provide(&SessionConfig::default(), HttpBackend::new(api::client_config()));

    view! {
        <div class="app-container">
            <ChatWindow />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
