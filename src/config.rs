use std::env;
use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// File path or `http(s)://` URL of the event JSON.
    pub events_source: String,
    /// Calendar used for naive timestamps and for the year assumed by date-range inference.
    pub timezone: Tz,
    pub tick_interval: Duration,
    pub static_dir: PathBuf,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| AppError::Config("PORT must be a number".into()))?;

        let timezone = env::var("EVENTS_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let timezone: Tz = timezone.parse()
            .map_err(|_| AppError::Config(format!("EVENTS_TIMEZONE '{}' is not an IANA time zone", timezone)))?;

        let tick_ms: u64 = env::var("TICK_INTERVAL_MS").unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|_| AppError::Config("TICK_INTERVAL_MS must be a number".into()))?;
        if tick_ms == 0 {
            return Err(AppError::Config("TICK_INTERVAL_MS must be greater than zero".into()));
        }

        let timeout_secs: u64 = env::var("HTTP_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| AppError::Config("HTTP_TIMEOUT_SECS must be a number".into()))?;

        Ok(Self {
            port,
            events_source: env::var("EVENTS_SOURCE").unwrap_or_else(|_| "./data/events.json".to_string()),
            timezone,
            tick_interval: Duration::from_millis(tick_ms),
            static_dir: PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string())),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
