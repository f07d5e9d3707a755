use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::models::event::{Event, EventStatus};

pub const REGISTRATION_CLOSED: &str = "Registration Closed";
pub const REGISTRATION_OPEN: &str = "Registration Open";
pub const REGISTRATION_OPENS_SOON: &str = "Registration Opens Soon";
pub const EVENT_CANCELLED: &str = "Event Cancelled";
pub const COMING_SOON: &str = "Coming Soon";
pub const EVENT_ENDED: &str = "Event Ended";
pub const REGISTRATION_UNAVAILABLE: &str = "Registration Unavailable";

/// The fields of an event that decide whether registration is possible.
#[derive(Debug, Clone, Copy)]
pub struct EventTemporalRecord<'a> {
    pub id: i64,
    pub registration_deadline: DateTime<Utc>,
    pub registration_start_date: Option<DateTime<Utc>>,
    pub dates_text: &'a str,
    pub status: EventStatus,
}

impl<'a> From<&'a Event> for EventTemporalRecord<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            id: event.id,
            registration_deadline: event.registration_deadline,
            registration_start_date: event.registration_start_date,
            dates_text: &event.dates,
            status: event.status,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationVerdict {
    pub countdown_text: String,
    pub is_open: bool,
    pub message: String,
    /// Source status, or `Ended` when the event's own dates have passed.
    pub effective_status: EventStatus,
}

/// All verdicts of one tick. Replaced as a whole, never patched.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VerdictSnapshot {
    pub tick: u64,
    pub computed_at: Option<DateTime<Utc>>,
    pub verdicts: HashMap<i64, RegistrationVerdict>,
}
