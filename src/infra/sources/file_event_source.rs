use crate::domain::models::event::EventRecord;
use crate::domain::ports::EventSource;
use crate::error::AppError;
use async_trait::async_trait;
use std::path::PathBuf;

pub struct FileEventSource {
    path: PathBuf,
}

impl FileEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for FileEventSource {
    async fn fetch_events(&self) -> Result<Vec<EventRecord>, AppError> {
        let body = tokio::fs::read(&self.path).await
            .map_err(|e| AppError::Fetch(format!("Cannot read {}: {}", self.path.display(), e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
