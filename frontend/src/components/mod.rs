pub mod chat;
pub mod message;
pub mod venue_card;
