use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Active,
    PreProduction,
    Cancelled,
    ComingSoon,
    Ended,
    /// Anything the source sends that we do not recognise. Never treated as open.
    #[default]
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    pub const ALL: [EventStatus; 6] = [
        EventStatus::Active,
        EventStatus::PreProduction,
        EventStatus::Cancelled,
        EventStatus::ComingSoon,
        EventStatus::Ended,
        EventStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::PreProduction => "pre-production",
            EventStatus::Cancelled => "cancelled",
            EventStatus::ComingSoon => "coming-soon",
            EventStatus::Ended => "ended",
            EventStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::PreProduction => "Pre-production",
            EventStatus::Cancelled => "Cancelled",
            EventStatus::ComingSoon => "Coming Soon",
            EventStatus::Ended => "Ended",
            EventStatus::Unknown => "Unavailable",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescriptionSection {
    pub heading: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Sections(Vec<DescriptionSection>),
}

impl Description {
    /// Flattens a plain-text description into a single untitled section.
    pub fn sections(&self) -> Vec<DescriptionSection> {
        match self {
            Description::Text(text) => vec![DescriptionSection {
                heading: String::new(),
                body: Some(text.clone()),
                items: Vec::new(),
            }],
            Description::Sections(sections) => sections.clone(),
        }
    }
}

/// One entry of the event JSON as published by the club.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub timings: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub coordinated_by: String,
    #[serde(default)]
    pub registration_link: String,
    #[serde(default)]
    pub registration_fee: String,
    #[serde(default)]
    pub registration_start_date: Option<String>,
    pub registration_deadline: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub description: Option<Description>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
    pub logo: Option<String>,
    pub venue: String,
    pub timings: String,
    pub dates: String,
    pub coordinated_by: String,
    pub registration_link: String,
    pub registration_fee: String,
    /// `None` when the source gives no start; registration is then open until the deadline.
    pub registration_start_date: Option<DateTime<Utc>>,
    pub registration_deadline: DateTime<Utc>,
    pub status: EventStatus,
    pub description: Option<Description>,
}

impl Event {
    pub fn from_record(record: EventRecord, tz: Tz) -> Result<Self, AppError> {
        let registration_deadline = parse_timestamp(&record.registration_deadline, tz)
            .ok_or_else(|| AppError::MalformedPayload(format!(
                "event {}: invalid registrationDeadline '{}'", record.id, record.registration_deadline
            )))?;

        let registration_start_date = record.registration_start_date.as_deref()
            .map(|raw| parse_timestamp(raw, tz).ok_or_else(|| AppError::MalformedPayload(format!(
                "event {}: invalid registrationStartDate '{}'", record.id, raw
            ))))
            .transpose()?;

        Ok(Self {
            id: record.id,
            name: record.name,
            image: record.image,
            logo: record.logo,
            venue: record.venue,
            timings: record.timings,
            dates: record.dates,
            coordinated_by: record.coordinated_by,
            registration_link: record.registration_link,
            registration_fee: record.registration_fee,
            registration_start_date,
            registration_deadline,
            status: record.status,
            description: record.description,
        })
    }
}

/// Accepts RFC 3339 instants, or naive `YYYY-MM-DDTHH:MM[:SS]` / `YYYY-MM-DD`
/// values read as wall-clock time in `tz`.
pub fn parse_timestamp(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)))?;

    tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}
