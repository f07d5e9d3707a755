use crate::domain::models::event::EventRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Where the club publishes its event list.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// The whole list, or an error. Never a partial list.
    async fn fetch_events(&self) -> Result<Vec<EventRecord>, AppError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}
