use tracing::{debug, info, warn};

use crate::config::{SessionConfig, UnrecognizedReply};
use crate::errors::ChatError;
use crate::models::{ChatReply, ChatRequest, Message, MessageBody, TextOrigin};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Composer enabled.
    Idle,
    /// A request is outstanding; composer disabled, thinking indicator shown.
    Awaiting,
}

/// Proof that a request was dispatched. Exactly one is live while `Awaiting`,
/// and handing it back to [`Session::settle`] consumes it.
#[derive(Debug)]
pub struct InFlight {
    request: ChatRequest,
}

impl InFlight {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Conversation state for one chat window.
///
/// The message log is append-only and owned here; renderers only read it.
#[derive(Clone, Debug)]
pub struct Session {
    messages: Vec<Message>,
    pending: bool,
    draft: String,
    fallback_notice: String,
    unrecognized_reply: UnrecognizedReply,
}

impl Session {
    /// A fresh session, already holding the welcome message at index 0.
    pub fn new(config: &SessionConfig) -> Self {
        let welcome = Message::new(
            0,
            MessageBody::AssistantText {
                text: config.welcome_message.clone(),
                origin: TextOrigin::Welcome,
            },
        );
        Self {
            messages: vec![welcome],
            pending: false,
            draft: String::new(),
            fallback_notice: config.fallback_notice.clone(),
            unrecognized_reply: config.unrecognized_reply,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        if self.pending {
            Phase::Awaiting
        } else {
            Phase::Idle
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    /// Validates `text`, appends it as a user message and enters `Awaiting`.
    ///
    /// Rejected input leaves the session untouched. The returned ticket carries
    /// the raw text for the backend call.
    pub fn begin_submit(&mut self, text: &str) -> Result<InFlight, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending {
            debug!("Submission ignored: request already in flight");
            return Err(ChatError::Busy);
        }

        self.push(MessageBody::User(text.to_string()));
        self.draft.clear();
        self.pending = true;

        Ok(InFlight {
            request: ChatRequest { message: text.to_string() },
        })
    }

    /// Submits whatever is in the composer.
    pub fn submit_draft(&mut self) -> Result<InFlight, ChatError> {
        let text = std::mem::take(&mut self.draft);
        let result = self.begin_submit(&text);
        if result.is_err() {
            self.draft = text;
        }
        result
    }

    /// Applies the outcome of the call behind `ticket` and returns to `Idle`.
    ///
    /// Returns the index of the appended message, or `None` when nothing was appended.
    pub fn settle(
        &mut self,
        ticket: InFlight,
        outcome: Result<ChatReply, ChatError>,
    ) -> Option<usize> {
        let InFlight { request } = ticket;
        self.pending = false;

        match outcome {
            Ok(ChatReply::Text(text)) => Some(self.push(MessageBody::AssistantText {
                text,
                origin: TextOrigin::Backend,
            })),
            Ok(ChatReply::Venues(venues)) => {
                info!(count = venues.len(), "Venue results received");
                Some(self.push(MessageBody::AssistantVenues(venues)))
            }
            Ok(ChatReply::Unrecognized(kind)) => {
                warn!(%kind, message = %request.message, "Unrecognized reply type");
                match self.unrecognized_reply {
                    UnrecognizedReply::Ignore => None,
                    UnrecognizedReply::Notify => Some(self.push_fallback()),
                }
            }
            Err(e) => {
                warn!(error = %e, message = %request.message, "Chat request failed");
                Some(self.push_fallback())
            }
        }
    }

    fn push_fallback(&mut self) -> usize {
        self.push(MessageBody::AssistantText {
            text: self.fallback_notice.clone(),
            origin: TextOrigin::Fallback,
        })
    }

    fn push(&mut self, body: MessageBody) -> usize {
        let id = self.messages.len();
        self.messages.push(Message::new(id, body));
        id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FALLBACK_NOTICE;
    use crate::models::{Sender, Venue};

    fn session() -> Session {
        Session::default()
    }

    #[test]
    fn test_new_session_holds_only_welcome() {
        let s = session();
        assert_eq!(s.messages().len(), 1);
        assert!(s.messages()[0].is_welcome());
        assert_eq!(s.messages()[0].sender(), Sender::AssistantText);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_submit_appends_user_message_before_any_reply() {
        let mut s = session();
        s.set_draft("Venues in Delhi for 200 guests");
        let ticket = s.submit_draft().unwrap();

        assert_eq!(ticket.request().message, "Venues in Delhi for 200 guests");
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.messages()[1].sender(), Sender::User);
        assert_eq!(s.messages()[1].text(), Some("Venues in Delhi for 200 guests"));
        assert_eq!(s.draft(), "");
        assert_eq!(s.phase(), Phase::Awaiting);
    }

    #[test]
    fn test_raw_text_is_sent_untrimmed() {
        let mut s = session();
        let ticket = s.begin_submit("  hello \n").unwrap();
        assert_eq!(ticket.request().message, "  hello \n");
        assert_eq!(s.messages()[1].text(), Some("  hello \n"));
    }

    #[test]
    fn test_blank_input_is_rejected_without_effect() {
        let mut s = session();
        for text in ["", "   ", "\n\t"] {
            assert_eq!(s.begin_submit(text).unwrap_err(), ChatError::EmptyMessage);
        }
        s.set_draft("  ");
        assert!(!s.can_submit());
        assert_eq!(s.submit_draft().unwrap_err(), ChatError::EmptyMessage);
        assert_eq!(s.draft(), "  ");
        assert_eq!(s.messages().len(), 1);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_resubmit_while_awaiting_has_no_effect() {
        let mut s = session();
        let _ticket = s.begin_submit("first").unwrap();
        s.set_draft("second");
        assert!(!s.can_submit());

        assert_eq!(s.submit_draft().unwrap_err(), ChatError::Busy);
        assert_eq!(s.begin_submit("third").unwrap_err(), ChatError::Busy);
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.draft(), "second");
        assert!(s.is_pending());
    }

    #[test]
    fn test_text_reply() {
        let mut s = session();
        let ticket = s.begin_submit("Tell me about Haldi").unwrap();
        let idx = s.settle(ticket, Ok(ChatReply::Text("Haldi is...".to_string())));

        assert_eq!(idx, Some(2));
        let msg = &s.messages()[2];
        assert_eq!(msg.id(), 2);
        assert_eq!(msg.sender(), Sender::AssistantText);
        assert_eq!(msg.text(), Some("Haldi is..."));
        assert!(!msg.is_welcome());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_empty_venue_list_is_appended() {
        let mut s = session();
        let ticket = s.begin_submit("venues on the moon").unwrap();
        let idx = s.settle(ticket, Ok(ChatReply::Venues(Vec::<Venue>::new())));

        assert_eq!(idx, Some(2));
        let msg = &s.messages()[2];
        assert_eq!(msg.sender(), Sender::AssistantVenues);
        assert_eq!(msg.venues().map(<[Venue]>::len), Some(0));
        assert!(!s.is_pending());
    }

    #[test]
    fn test_transport_failure_appends_one_fallback() {
        let mut s = session();
        let ticket = s.begin_submit("hello").unwrap();
        let idx = s.settle(ticket, Err(ChatError::Network("connection refused".to_string())));

        assert_eq!(idx, Some(2));
        assert_eq!(s.messages().len(), 3);
        assert_eq!(s.messages()[2].text(), Some(FALLBACK_NOTICE));
        assert_eq!(s.messages()[2].sender(), Sender::AssistantText);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_unrecognized_reply_is_dropped_by_default() {
        let mut s = session();
        let ticket = s.begin_submit("planners?").unwrap();
        let idx = s.settle(ticket, Ok(ChatReply::Unrecognized("planners".to_string())));

        assert_eq!(idx, None);
        assert_eq!(s.messages().len(), 2);
        assert!(!s.is_pending());
    }

    #[test]
    fn test_unrecognized_reply_can_notify() {
        let mut s = Session::new(&SessionConfig {
            unrecognized_reply: UnrecognizedReply::Notify,
            ..SessionConfig::default()
        });
        let ticket = s.begin_submit("planners?").unwrap();
        let idx = s.settle(ticket, Ok(ChatReply::Unrecognized("planners".to_string())));

        assert_eq!(idx, Some(2));
        assert_eq!(s.messages()[2].text(), Some(FALLBACK_NOTICE));
    }

    #[test]
    fn test_welcome_stays_first_across_turns() {
        let mut s = session();
        for turn in 0..3 {
            let ticket = s.begin_submit(&format!("question {turn}")).unwrap();
            let outcome = if turn == 1 {
                Err(ChatError::Status(500))
            } else {
                Ok(ChatReply::Text(format!("answer {turn}")))
            };
            s.settle(ticket, outcome);
        }

        assert_eq!(s.messages().len(), 7);
        assert_eq!(s.messages().iter().filter(|m| m.is_welcome()).count(), 1);
        assert!(s.messages()[0].is_welcome());
        for (i, msg) in s.messages().iter().enumerate() {
            assert_eq!(msg.id(), i);
        }
        assert_eq!(s.last_message().and_then(Message::text), Some("answer 2"));
    }
}
