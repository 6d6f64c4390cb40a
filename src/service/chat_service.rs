use tracing::info;

use crate::db::history_repository::HistoryRepository;
use crate::db::venue_repository::VenueRepository;
use crate::errors::AppError;
use crate::models::{ChatForm, ChatReplyBody, Turn, TurnRole};
use crate::service::intent::{self, Intent, CEREMONY_LIST, HELP_TEXT};

const MAX_MESSAGE_LENGTH: usize = 8000;

/// Answers chat turns from the venue catalog and a fixed set of texts.
#[derive(Clone)]
pub struct ChatService {
    venue_repo: VenueRepository,
    history_repo: HistoryRepository,
}

impl ChatService {
    pub fn new(venue_repo: VenueRepository, history_repo: HistoryRepository) -> Self {
        Self { venue_repo, history_repo }
    }

    pub async fn chat(&self, form: ChatForm) -> Result<ChatReplyBody, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        if form.message.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }
        if form.message.len() > MAX_MESSAGE_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "message".to_string(),
                max_length: MAX_MESSAGE_LENGTH,
                actual_length: form.message.len(),
            });
        }

        let locations = self.venue_repo.locations();
        let reply = match intent::parse(&form.message, &locations) {
            Intent::FindVenue(mut filter) => {
                // Follow-up searches keep the city from earlier turns.
                if filter.location.is_none() {
                    filter.location = self.recall_location(&locations).await;
                }
                let venues = self.venue_repo.search(&filter);
                info!(?filter, count = venues.len(), "Venue search");
                ChatReplyBody::Venues(venues)
            }
            Intent::CeremonyDetail(ceremony) => ChatReplyBody::Text(ceremony.summary()),
            Intent::CeremonyList => ChatReplyBody::Text(CEREMONY_LIST.to_string()),
            Intent::General => ChatReplyBody::Text(HELP_TEXT.to_string()),
        };

        self.history_repo
            .save(Turn::new(TurnRole::User, form.message))
            .await;
        self.history_repo
            .save(Turn::new(TurnRole::Assistant, summarize(&reply)))
            .await;

        Ok(reply)
    }

    /// Clears the conversation history; returns how many turns were dropped.
    pub async fn reset(&self) -> usize {
        let dropped = self.history_repo.clear().await;
        info!(dropped, "Conversation history cleared");
        dropped
    }

    async fn recall_location(&self, locations: &[&str]) -> Option<String> {
        self.history_repo
            .find_all()
            .await
            .iter()
            .rev()
            .filter(|turn| turn.role == TurnRole::User)
            .find_map(|turn| intent::find_location(&turn.content, locations))
    }
}

fn summarize(reply: &ChatReplyBody) -> String {
    match reply {
        ChatReplyBody::Text(text) => text.clone(),
        ChatReplyBody::Venues(venues) => format!("[{} venues]", venues.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ChatService {
        ChatService::new(VenueRepository::builtin().unwrap(), HistoryRepository::default())
    }

    fn form(message: &str) -> ChatForm {
        ChatForm { message: message.to_string() }
    }

    fn venue_names(reply: &ChatReplyBody) -> Vec<String> {
        match reply {
            ChatReplyBody::Venues(venues) => venues.iter().map(|v| v.name.clone()).collect(),
            ChatReplyBody::Text(text) => panic!("expected venues, got text {text:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_and_oversized_messages_are_rejected() {
        let svc = service();
        assert!(matches!(svc.chat(form("  ")).await, Err(AppError::EmptyMessage)));
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        let err = svc.chat(form(&long)).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_venue_search_reply() {
        let reply = service().chat(form("venues in Mumbai for 550 guests")).await.unwrap();
        assert_eq!(venue_names(&reply), vec!["The Grand Celebrations"]);
    }

    #[tokio::test]
    async fn test_search_with_no_match_is_an_empty_list() {
        let reply = service().chat(form("venues in Delhi for 5000 guests")).await.unwrap();
        assert_eq!(reply, ChatReplyBody::Venues(Vec::new()));
    }

    #[tokio::test]
    async fn test_follow_up_search_keeps_city_until_reset() {
        let svc = service();
        svc.chat(form("show me venues in Jaipur")).await.unwrap();

        let reply = svc.chat(form("what about 1000 guests?")).await.unwrap();
        assert_eq!(venue_names(&reply), vec!["Heritage Palace Resort"]);

        assert_eq!(svc.reset().await, 4);
        let reply = svc.chat(form("what about 1000 guests?")).await.unwrap();
        assert_eq!(
            venue_names(&reply),
            vec!["The Grand Celebrations", "Heritage Palace Resort"]
        );
    }

    #[tokio::test]
    async fn test_text_replies() {
        let svc = service();
        let ChatReplyBody::Text(text) = svc.chat(form("Tell me about Haldi")).await.unwrap() else {
            panic!("expected text");
        };
        assert!(text.starts_with("🕒 When:"));

        let reply = svc.chat(form("which rituals happen?")).await.unwrap();
        assert_eq!(reply, ChatReplyBody::Text(CEREMONY_LIST.to_string()));

        let reply = svc.chat(form("hello")).await.unwrap();
        assert_eq!(reply, ChatReplyBody::Text(HELP_TEXT.to_string()));
    }
}
