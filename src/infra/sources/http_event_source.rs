use crate::domain::models::event::EventRecord;
use crate::domain::ports::EventSource;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::error;

pub struct HttpEventSource {
    client: Client,
    url: String,
}

impl HttpEventSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> Result<Vec<EventRecord>, AppError> {
        let res = self.client.get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Event source connection error: {}", e);
                error!("{}", msg);
                AppError::Fetch(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let msg = format!("Event source returned status {}", status);
            error!("{}", msg);
            return Err(AppError::Fetch(msg));
        }

        let body = res.bytes().await
            .map_err(|e| AppError::Fetch(format!("Failed to read event source body: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| AppError::MalformedPayload(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
