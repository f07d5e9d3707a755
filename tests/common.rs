use club_events::{
    api::router::create_router,
    config::Config,
    domain::models::event::EventRecord,
    domain::ports::EventSource,
    error::AppError,
    infra::factory::build_state,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

/// Stands in for the club's JSON endpoint. Can be switched offline.
pub struct MockEventSource {
    body: Mutex<String>,
    offline: AtomicBool,
    pub fetches: AtomicUsize,
}

impl MockEventSource {
    pub fn new(body: String) -> Self {
        Self {
            body: Mutex::new(body),
            offline: AtomicBool::new(false),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn set_body(&self, body: String) {
        *self.body.lock().unwrap() = body;
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn fetch_events(&self) -> Result<Vec<EventRecord>, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Fetch("mock source offline".to_string()));
        }
        let body = self.body.lock().unwrap().clone();
        serde_json::from_str(&body).map_err(|e| AppError::MalformedPayload(e.to_string()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// One event per registration state, relative to the real clock.
pub fn sample_events() -> Value {
    let now = Utc::now();
    json!([
        {
            "id": 1, "name": "Figma Workshop", "venue": "310 Lab, Block B, MRCE",
            "timings": "10 AM - 12:30 PM", "dates": "Weekend workshop",
            "coordinatedBy": "Design Team Plexus",
            "registrationLink": "https://forms.example.com/figma", "registrationFee": "₹100",
            "registrationStartDate": rfc3339(now - Duration::days(1)),
            "registrationDeadline": rfc3339(now + Duration::days(2)),
            "status": "active",
            "image": "https://cdn.example.com/figma.webp",
            "description": [
                {"heading": "What you'll learn", "items": ["Auto layout", "Prototyping"]},
                {"heading": "Bring", "body": "A laptop with Figma installed"}
            ]
        },
        {
            "id": 2, "name": "Hack Night", "dates": "TBA",
            "registrationLink": "https://forms.example.com/hack",
            "registrationStartDate": rfc3339(now + Duration::days(1)),
            "registrationDeadline": rfc3339(now + Duration::days(5)),
            "status": "active"
        },
        {
            "id": 3, "name": "Past Meetup", "dates": "TBA",
            "registrationLink": "https://forms.example.com/past",
            "registrationDeadline": rfc3339(now - Duration::days(1)),
            "status": "active"
        },
        {
            "id": 4, "name": "Robotics Expo", "dates": "TBA",
            "registrationLink": "https://forms.example.com/robotics",
            "registrationDeadline": rfc3339(now + Duration::days(2)),
            "status": "cancelled"
        },
        {
            "id": 5, "name": "Mystery Talk", "dates": "TBA",
            "registrationLink": "https://forms.example.com/mystery",
            "registrationDeadline": rfc3339(now + Duration::days(2)),
            "status": "postponed"
        }
    ])
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub source: Arc<MockEventSource>,
    pub static_dir: PathBuf,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_events(sample_events().to_string(), std::time::Duration::from_millis(1000)).await
    }

    pub async fn with_events(body: String, tick_interval: std::time::Duration) -> Self {
        let static_dir = std::env::temp_dir().join(format!("club_events_static_{}", Uuid::new_v4()));
        std::fs::create_dir_all(static_dir.join("images")).unwrap();

        let config = Config {
            port: 0,
            events_source: "mock".to_string(),
            timezone: chrono_tz::UTC,
            tick_interval,
            static_dir: static_dir.clone(),
            http_timeout: std::time::Duration::from_secs(2),
        };

        let source = Arc::new(MockEventSource::new(body));
        let state = Arc::new(build_state(&config, source.clone()).unwrap());
        let router = create_router(state.clone());

        Self {
            router,
            state,
            source,
            static_dir,
        }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let res = self.get(uri).await;
        let status = res.status();
        (status, parse_body(res).await)
    }

    pub async fn get_html(&self, uri: &str) -> (StatusCode, String) {
        let res = self.get(uri).await;
        let status = res.status();
        (status, body_text(res).await)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.static_dir);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
