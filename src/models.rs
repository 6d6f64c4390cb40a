use dwed_chat_core::Venue;
use serde::{Deserialize, Serialize};

/// `POST /api/chat` body as the server reads it; a missing message counts as empty.
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

/// `POST /api/chat` success body: `{ "type": "text"|"venues", "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChatReplyBody {
    Text(String),
    Venues(Vec<Venue>),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub message: String,
    pub status: &'static str,
}

/// Venue search criteria extracted from a user message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub location: Option<String>,
    pub capacity: Option<u32>,
    pub price_max: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Assistant,
}

impl TurnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One remembered exchange line, kept until `/api/chat/reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
}

impl Turn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwed_chat_core::ChatReply;
    use serde_json::json;

    #[test]
    fn test_reply_body_matches_client_decoder() {
        let text = serde_json::to_value(ChatReplyBody::Text("hi".to_string())).unwrap();
        assert_eq!(text, json!({ "type": "text", "data": "hi" }));
        assert_eq!(ChatReply::from_value(text).unwrap(), ChatReply::Text("hi".to_string()));

        let venues = serde_json::to_value(ChatReplyBody::Venues(Vec::new())).unwrap();
        assert_eq!(venues, json!({ "type": "venues", "data": [] }));
    }

    #[test]
    fn test_chat_form_defaults_missing_message() {
        let form: ChatForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.message, "");
    }
}
