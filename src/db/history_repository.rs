use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::Turn;

/// In-memory conversation history of the development backend.
#[derive(Clone, Default)]
pub struct HistoryRepository {
    turns: Arc<Mutex<Vec<Turn>>>,
}

impl HistoryRepository {
    pub async fn save(&self, turn: Turn) {
        self.turns.lock().await.push(turn);
    }

    pub async fn find_all(&self) -> Vec<Turn> {
        self.turns.lock().await.clone()
    }

    /// Forgets everything; returns how many turns were dropped.
    pub async fn clear(&self) -> usize {
        let mut turns = self.turns.lock().await;
        let dropped = turns.len();
        turns.clear();
        dropped
    }
}
