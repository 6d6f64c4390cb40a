//! Conversation state and venue matching for the DWed chat assistant.
//!
//! Compiles for the browser and for native targets; transports live with the
//! renderers that use them.

pub mod classify;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod matcher;
pub mod models;
pub mod session;

pub use config::{ClientConfig, SessionConfig, UnrecognizedReply};
pub use controller::{ChatBackend, Controller};
pub use errors::ChatError;
pub use matcher::{HeadlineCapacity, VenueView};
pub use models::{BanquetHall, ChatReply, ChatRequest, Message, MessageBody, Sender, Venue};
pub use session::{InFlight, Phase, Session};
