use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const WELCOME_MESSAGE: &str = "👋 Welcome to DWed!

I can help you with:
1. Wedding Venues 🏰
2. Indian Wedding Ceremonies 🎉
3. Wedding Traditions ✨

What would you like to know about?";

pub const FALLBACK_NOTICE: &str =
    "Sorry, I encountered an error. Please make sure the backend server is running.";

/// What to do with a reply whose `type` is neither `text` nor `venues`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnrecognizedReply {
    /// Append nothing.
    #[default]
    Ignore,
    /// Append the fallback notice, as for a transport failure.
    Notify,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub welcome_message: String,
    pub fallback_notice: String,
    pub unrecognized_reply: UnrecognizedReply,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            fallback_notice: FALLBACK_NOTICE.to_string(),
            unrecognized_reply: UnrecognizedReply::default(),
        }
    }
}

/// Where the chat backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    /// `None` waits forever.
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.api_base.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_url_joins_cleanly() {
        assert_eq!(ClientConfig::default().chat_url(), "http://127.0.0.1:5000/api/chat");
        assert_eq!(
            ClientConfig::new("http://localhost:8080/").chat_url(),
            "http://localhost:8080/api/chat"
        );
    }

    #[test]
    fn test_defaults() {
        let client = ClientConfig::new("http://x").with_timeout(None);
        assert_eq!(client.request_timeout, None);
        assert_eq!(ClientConfig::default().request_timeout, Some(Duration::from_secs(30)));

        let session = SessionConfig::default();
        assert!(session.welcome_message.starts_with("👋 Welcome to DWed!"));
        assert_eq!(session.unrecognized_reply, UnrecognizedReply::Ignore);
    }
}
