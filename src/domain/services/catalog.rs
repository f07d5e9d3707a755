use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::domain::models::event::Event;
use crate::domain::models::verdict::VerdictSnapshot;
use crate::domain::ports::EventSource;
use crate::domain::services::verdict_board::VerdictBoard;
use crate::error::AppError;

#[derive(Debug, Clone)]
pub enum CatalogState {
    NotLoaded,
    Ready(Arc<[Event]>),
    Failed(String),
}

/// The last load of the event list, read-only between loads.
pub struct EventCatalog {
    source: Arc<dyn EventSource>,
    tz: Tz,
    state: RwLock<CatalogState>,
}

impl EventCatalog {
    pub fn new(source: Arc<dyn EventSource>, tz: Tz) -> Self {
        Self {
            source,
            tz,
            state: RwLock::new(CatalogState::NotLoaded),
        }
    }

    /// Fetches the list again. On failure the previous list is dropped, not kept half-valid.
    pub async fn reload(&self) -> Result<Arc<[Event]>, AppError> {
        let result = self.fetch().await;

        let mut state = self.state.write().await;
        match &result {
            Ok(events) => {
                info!("Loaded {} events from {}", events.len(), self.source.describe());
                *state = CatalogState::Ready(events.clone());
            }
            Err(e) => {
                error!("Failed to load events from {}: {}", self.source.describe(), e);
                *state = CatalogState::Failed(e.to_string());
            }
        }
        result
    }

    pub async fn state(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Publishes verdicts for the current events. The read lock is held until the snapshot is
    /// on the board, so a reload cannot slip in between and be overwritten by the older set.
    pub async fn publish_verdicts(&self, board: &VerdictBoard, now: DateTime<Utc>) -> Arc<VerdictSnapshot> {
        let state = self.state.read().await;
        match &*state {
            CatalogState::Ready(events) => board.publish(now, events),
            _ => board.publish(now, &[]),
        }
    }

    /// Events for request handlers. Loads lazily on first use; a failed load is an error.
    pub async fn require_events(&self) -> Result<Arc<[Event]>, AppError> {
        match self.state().await {
            CatalogState::Ready(events) => Ok(events),
            CatalogState::Failed(msg) => Err(AppError::Unavailable(msg)),
            CatalogState::NotLoaded => self.reload().await
                .map_err(|e| AppError::Unavailable(e.to_string())),
        }
    }

    async fn fetch(&self) -> Result<Arc<[Event]>, AppError> {
        let records = self.source.fetch_events().await?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut events = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(AppError::MalformedPayload(format!("duplicate event id {}", record.id)));
            }
            events.push(Event::from_record(record, self.tz)?);
        }
        Ok(events.into())
    }
}
