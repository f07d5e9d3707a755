use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::models::event::EventStatus;
use crate::domain::models::verdict::{
    EventTemporalRecord, RegistrationVerdict, COMING_SOON, EVENT_CANCELLED, EVENT_ENDED,
    REGISTRATION_CLOSED, REGISTRATION_OPEN, REGISTRATION_OPENS_SOON, REGISTRATION_UNAVAILABLE,
};
use crate::domain::services::event_dates::has_concluded;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Decides whether registration for one event is possible at `now`.
///
/// `tz` is the calendar used to read the event's free-text dates.
pub fn evaluate(now: DateTime<Utc>, record: &EventTemporalRecord<'_>, tz: Tz) -> RegistrationVerdict {
    let remaining_ms = (record.registration_deadline - now).num_milliseconds();

    let (countdown_text, mut is_open, mut message) = if remaining_ms <= 0 {
        (REGISTRATION_CLOSED.to_string(), false, REGISTRATION_CLOSED)
    } else if record.registration_start_date.is_some_and(|start| now < start) {
        (format_countdown(remaining_ms), false, REGISTRATION_OPENS_SOON)
    } else {
        (format_countdown(remaining_ms), true, REGISTRATION_OPEN)
    };

    let mut effective_status = record.status;
    match record.status {
        EventStatus::Active => {
            if has_concluded(now, record.dates_text, tz) {
                is_open = false;
                message = EVENT_ENDED;
                effective_status = EventStatus::Ended;
            }
        }
        EventStatus::Cancelled => {
            is_open = false;
            message = EVENT_CANCELLED;
        }
        EventStatus::PreProduction | EventStatus::ComingSoon => {
            is_open = false;
            message = COMING_SOON;
        }
        EventStatus::Ended => {
            is_open = false;
            message = EVENT_ENDED;
        }
        EventStatus::Unknown => {
            is_open = false;
            message = REGISTRATION_UNAVAILABLE;
        }
    }

    RegistrationVerdict {
        countdown_text,
        is_open,
        message: message.to_string(),
        effective_status,
    }
}

/// `"{d}d {h}h {m}m {s}s"`, each unit truncated, no padding.
pub fn format_countdown(remaining_ms: i64) -> String {
    let days = remaining_ms / MS_PER_DAY;
    let hours = (remaining_ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}
