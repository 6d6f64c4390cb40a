use tracing::debug;

use crate::config::SessionConfig;
use crate::errors::ChatError;
use crate::models::{ChatReply, ChatRequest};
use crate::session::Session;

/// The chat/search endpoint, seen as one request and one reply.
///
/// No `Send` bound: the browser transport runs on a single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, ChatError>;
}

/// Drives a [`Session`] against a [`ChatBackend`].
///
/// `submit` borrows the controller mutably for the whole round trip, so a
/// second request cannot be started while one is outstanding.
pub struct Controller<B> {
    session: Session,
    backend: B,
}

impl<B: ChatBackend> Controller<B> {
    pub fn new(config: &SessionConfig, backend: B) -> Self {
        Self {
            session: Session::new(config),
            backend,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.session.set_draft(text);
    }

    /// Sends `text` and applies the reply.
    ///
    /// Only validation errors are returned; transport failures end up as a
    /// fallback message in the log. Yields the index of the appended reply.
    pub async fn submit(&mut self, text: &str) -> Result<Option<usize>, ChatError> {
        let ticket = self.session.begin_submit(text)?;
        debug!(message = %ticket.request().message, "Dispatching chat request");
        let outcome = self.backend.send(ticket.request()).await;
        Ok(self.session.settle(ticket, outcome))
    }

    pub async fn submit_draft(&mut self) -> Result<Option<usize>, ChatError> {
        let ticket = self.session.submit_draft()?;
        let outcome = self.backend.send(ticket.request()).await;
        Ok(self.session.settle(ticket, outcome))
    }
}
