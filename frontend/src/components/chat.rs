use dwed_chat_core::Message;
use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::message::ChatMessage;
use crate::state::ChatState;

const SCROLL_ANCHOR_ID: &str = "messages-end";

/// Scrolls the message list to its end. A no-op if the anchor is not mounted.
fn scroll_to_latest() {
    let Some(anchor) = document().get_element_by_id(SCROLL_ANCHOR_ID) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::End);
    anchor.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Chat window: header, message history, thinking indicator and composer.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let state = expect_context::<ChatState>();

    let messages = Memo::new(move |_| state.session.with(|s| s.messages().to_vec()));
    let pending = Memo::new(move |_| state.session.with(|s| s.is_pending()));

    // After every append, give the new content time to lay out, then scroll.
    Effect::new(move |_| {
        let delay = messages.with(|msgs| msgs.last().map(Message::scroll_delay));
        if let Some(delay) = delay {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, scroll_to_latest).forget();
        }
    });

    view! {
        <main class="chat-window">
            <div class="chat-header">
                <h2>"DWed AI"</h2>
                <p class="status">"Online"</p>
            </div>

            <div class="messages-container">
                <For
                    each=move || messages.get()
                    key=|m| m.id()
                    let:msg
                >
                    <ChatMessage message=msg />
                </For>
                <Show when=move || pending.get()>
                    <div class="message assistant thinking">
                        "Bot is thinking"
                        <span class="dot">"."</span>
                        <span class="dot">"."</span>
                        <span class="dot">"."</span>
                    </div>
                </Show>
                <div id=SCROLL_ANCHOR_ID></div>
            </div>

            <ChatInput />
        </main>
    }
}

/// Composer with text input and send button. Disabled while a reply is pending.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<ChatState>();

    let draft = Memo::new(move |_| state.session.with(|s| s.draft().to_string()));
    let is_sending = Memo::new(move |_| state.session.with(|s| s.is_pending()));
    let can_submit = Memo::new(move |_| state.session.with(|s| s.can_submit()));

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            state.submit();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Ask about venues, ceremonies, or wedding traditions..."
                    prop:value=move || draft.get()
                    on:input=move |ev| state.set_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || is_sending.get()
                />
                <button
                    class="send-btn"
                    on:click=move |_| state.submit()
                    disabled=move || !can_submit.get()
                >
                    {move || if is_sending.get() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
