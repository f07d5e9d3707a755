use serde::Serialize;

use crate::domain::models::event::Event;
use crate::domain::models::verdict::RegistrationVerdict;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    /// `image` resolved for the browser; `None` when the local file is missing.
    pub image_url: Option<String>,
    /// `None` until the first tick has covered this event.
    pub verdict: Option<RegistrationVerdict>,
}

#[derive(Serialize)]
pub struct ReloadResponse {
    pub events: usize,
}
