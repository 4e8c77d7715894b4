use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Errors that can occur with bookmark operations
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
}

type SavedList = Arc<Mutex<Vec<String>>>;

/// Saved postings, scoped to a session
///
/// A session is opened explicitly, read and written through this store, and
/// ends when closed or after sitting idle for the configured period.
pub struct BookmarkStore {
    sessions: moka::future::Cache<Uuid, SavedList>,
}

impl BookmarkStore {
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(idle)
            .build();

        Self { sessions }
    }

    /// Start a session with nothing saved
    pub async fn open_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(Vec::new())))
            .await;
        tracing::debug!("Opened bookmark session {}", id);
        id
    }

    /// End a session, discarding its saved postings
    pub async fn close_session(&self, id: Uuid) -> Result<(), BookmarkError> {
        match self.sessions.remove(&id).await {
            Some(_) => {
                tracing::debug!("Closed bookmark session {}", id);
                Ok(())
            }
            None => Err(BookmarkError::SessionNotFound(id)),
        }
    }

    async fn session(&self, id: Uuid) -> Result<SavedList, BookmarkError> {
        self.sessions
            .get(&id)
            .await
            .ok_or(BookmarkError::SessionNotFound(id))
    }

    /// Save a posting; returns false if it was already saved
    pub async fn save(&self, id: Uuid, posting_id: &str) -> Result<bool, BookmarkError> {
        let session = self.session(id).await?;
        let mut saved = session.lock().await;

        if saved.iter().any(|existing| existing == posting_id) {
            return Ok(false);
        }
        saved.push(posting_id.to_string());
        Ok(true)
    }

    /// Remove a saved posting; returns false if it was not saved
    pub async fn unsave(&self, id: Uuid, posting_id: &str) -> Result<bool, BookmarkError> {
        let session = self.session(id).await?;
        let mut saved = session.lock().await;

        let before = saved.len();
        saved.retain(|existing| existing != posting_id);
        Ok(saved.len() != before)
    }

    /// Saved posting ids, oldest first
    pub async fn saved(&self, id: Uuid) -> Result<Vec<String>, BookmarkError> {
        let session = self.session(id).await?;
        let saved = session.lock().await;
        Ok(saved.clone())
    }

    pub async fn is_saved(&self, id: Uuid, posting_id: &str) -> Result<bool, BookmarkError> {
        let session = self.session(id).await?;
        let saved = session.lock().await;
        Ok(saved.iter().any(|existing| existing == posting_id))
    }
}
