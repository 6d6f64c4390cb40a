use dwed_chat_core::{ChatBackend, Session, SessionConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpBackend;

/// Chat window state, provided via Leptos context.
///
/// The [`Session`] is the single source of truth; components read it and only
/// go through the methods below to change it.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    backend: StoredValue<HttpBackend>,
}

impl ChatState {
    /// Create a new `ChatState` (welcome message included) and provide it in context.
    pub fn provide(config: &SessionConfig, backend: HttpBackend) -> Self {
        let (session, set_session) = signal(Session::new(config));

        let state = Self {
            session,
            set_session,
            backend: StoredValue::new(backend),
        };

        provide_context(state);
        state
    }

    pub fn set_draft(&self, text: String) {
        self.set_session.update(|s| s.set_draft(text));
    }

    /// Send the composer's text. Ignored while a reply is pending.
    pub fn submit(&self) {
        let Some(result) = self.set_session.try_update(Session::submit_draft) else {
            return;
        };
        let ticket = match result {
            Ok(ticket) => ticket,
            Err(e) => {
                log::debug!("Submission rejected: {e}");
                return;
            }
        };

        let set_session = self.set_session;
        let backend = self.backend.get_value();

        spawn_local(async move {
            let outcome = backend.send(ticket.request()).await;
            if let Err(e) = &outcome {
                log::error!("Chat request failed: {e}");
            }
            // The window may have been unmounted while we waited.
            if set_session.try_update(|s| s.settle(ticket, outcome)).is_none() {
                log::debug!("Reply arrived after the chat window closed; dropped");
            }
        });
    }
}
