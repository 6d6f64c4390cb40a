use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ChatError;

/// A bookable hall inside a venue.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BanquetHall {
    pub name: String,
    pub capacity: u32,
    pub price: f64,
    pub min_booking_hours: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A facility entry is free text, a yes/no flag or a list (amenities).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FacilityValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

/// Facility category → description, as sent by the backend.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Facilities(BTreeMap<String, FacilityValue>);

impl Facilities {
    /// Categories shown on every venue card, in display order.
    pub const HEADLINE: [&'static str; 4] = ["parking", "catering", "decor", "rooms"];

    pub fn insert(&mut self, category: impl Into<String>, value: FacilityValue) {
        self.0.insert(category.into(), value);
    }

    pub fn get(&self, category: &str) -> Option<&FacilityValue> {
        self.0.get(category)
    }

    /// Human-readable description of a category, if the venue lists it.
    pub fn describe(&self, category: &str) -> Option<String> {
        self.0.get(category).map(|value| match value {
            FacilityValue::Flag(true) => "Available".to_string(),
            FacilityValue::Flag(false) => "Not available".to_string(),
            FacilityValue::Text(text) => text.clone(),
            FacilityValue::List(items) => items.join(", "),
        })
    }

    pub fn amenities(&self) -> &[String] {
        match self.0.get("amenities") {
            Some(FacilityValue::List(items)) => items,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A search result. `requested_capacity` belongs to the search turn, not the venue.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Venue {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub banquets: Vec<BanquetHall>,
    #[serde(default)]
    pub facilities: Facilities,
    #[serde(
        rename = "requestedCapacity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_capacity: Option<u32>,
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

/// Decoded response from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatReply {
    Text(String),
    Venues(Vec<Venue>),
    /// A `type` this client does not know; carries the raw tag.
    Unrecognized(String),
}

#[derive(Deserialize)]
struct WireReply {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl ChatReply {
    pub fn from_json(body: &str) -> Result<Self, ChatError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ChatError::Malformed(e.to_string()))?;
        Self::from_value(value)
    }

    /// A known `type` with undecodable `data` is malformed; an unknown `type` is not.
    pub fn from_value(value: Value) -> Result<Self, ChatError> {
        let wire: WireReply =
            serde_json::from_value(value).map_err(|e| ChatError::Malformed(e.to_string()))?;

        match wire.kind.as_str() {
            "text" => serde_json::from_value(wire.data)
                .map(ChatReply::Text)
                .map_err(|e| ChatError::Malformed(format!("text reply: {e}"))),
            "venues" => serde_json::from_value(wire.data)
                .map(ChatReply::Venues)
                .map_err(|e| ChatError::Malformed(format!("venues reply: {e}"))),
            _ => Ok(ChatReply::Unrecognized(wire.kind)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    AssistantText,
    AssistantVenues,
}

/// Who produced an assistant text message. Set once, at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOrigin {
    Welcome,
    Backend,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MessageBody {
    User(String),
    AssistantText { text: String, origin: TextOrigin },
    AssistantVenues(Vec<Venue>),
}

/// One conversation turn. Only the session creates messages; none are mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    id: usize,
    body: MessageBody,
}

impl Message {
    pub(crate) fn new(id: usize, body: MessageBody) -> Self {
        Self { id, body }
    }

    /// Append position; stable for the life of the session.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn sender(&self) -> Sender {
        match self.body {
            MessageBody::User(_) => Sender::User,
            MessageBody::AssistantText { .. } => Sender::AssistantText,
            MessageBody::AssistantVenues(_) => Sender::AssistantVenues,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            MessageBody::User(text) | MessageBody::AssistantText { text, .. } => Some(text),
            MessageBody::AssistantVenues(_) => None,
        }
    }

    pub fn venues(&self) -> Option<&[Venue]> {
        match &self.body {
            MessageBody::AssistantVenues(venues) => Some(venues),
            _ => None,
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(
            self.body,
            MessageBody::AssistantText { origin: TextOrigin::Welcome, .. }
        )
    }

    /// How long the renderer should let this message lay out before scrolling to it.
    pub fn scroll_delay(&self) -> Duration {
        match self.body {
            MessageBody::User(_) => Duration::ZERO,
            MessageBody::AssistantText { .. } => Duration::from_millis(50),
            MessageBody::AssistantVenues(_) => Duration::from_millis(150),
        }
    }
}
