use serde::Serialize;

use crate::domain::models::event::{DescriptionSection, Event, EventStatus};
use crate::domain::models::verdict::RegistrationVerdict;
use crate::domain::services::assets::AssetResolver;

pub const CLUB_TITLE: &str = "Plexus Club Events";
pub const CLUB_COLLEGE: &str = "MRCE College";
pub const CLUB_MOTTO: &str = "UNITED BY NERVES";
pub const HEADER_LOGO: &str = "/images/logo.png";
pub const FOOTER_LOGO: &str = "/images/Plexus White.png";
pub const FOOTER_FALLBACK: &str = "PLEXUS";

const LOADING: &str = "Loading...";

/// Everything a template needs to draw one event, already decided.
#[derive(Serialize, Debug)]
pub struct EventCard {
    pub id: i64,
    pub name: String,
    pub venue: String,
    pub timings: String,
    pub dates: String,
    pub coordinated_by: String,
    pub registration_link: String,
    pub registration_fee: String,
    pub image_src: Option<String>,
    pub logo_src: Option<String>,
    pub sections: Vec<DescriptionSection>,
    pub status: &'static str,
    pub status_label: &'static str,
    pub countdown: String,
    pub message: String,
    pub is_open: bool,
}

impl EventCard {
    pub fn build(event: &Event, verdict: Option<&RegistrationVerdict>, assets: &AssetResolver) -> Self {
        let (status, countdown, message, is_open) = match verdict {
            Some(v) => (v.effective_status, v.countdown_text.clone(), v.message.clone(), v.is_open),
            None => (event.status, LOADING.to_string(), LOADING.to_string(), false),
        };

        Self {
            id: event.id,
            name: event.name.clone(),
            venue: event.venue.clone(),
            timings: event.timings.clone(),
            dates: event.dates.clone(),
            coordinated_by: event.coordinated_by.clone(),
            registration_link: event.registration_link.clone(),
            registration_fee: event.registration_fee.clone(),
            image_src: assets.displayable(event.image.as_deref()),
            logo_src: assets.displayable(event.logo.as_deref()),
            sections: event.description.as_ref().map(|d| d.sections()).unwrap_or_default(),
            status: status.as_str(),
            status_label: status.label(),
            countdown,
            message,
            is_open,
        }
    }
}

/// Badge text per status, handed to the polling script so badges follow the live verdicts.
#[derive(Serialize, Debug)]
pub struct StatusLabel {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize, Debug)]
pub struct PageChrome {
    pub title: &'static str,
    pub college: &'static str,
    pub motto: &'static str,
    pub header_logo: Option<String>,
    pub footer_logo: Option<String>,
    pub footer_fallback: &'static str,
    pub tick_interval_ms: u64,
    pub status_labels: Vec<StatusLabel>,
}

impl PageChrome {
    pub fn new(assets: &AssetResolver, tick_interval_ms: u64) -> Self {
        Self {
            title: CLUB_TITLE,
            college: CLUB_COLLEGE,
            motto: CLUB_MOTTO,
            header_logo: assets.displayable(Some(HEADER_LOGO)),
            footer_logo: assets.displayable(Some(FOOTER_LOGO)),
            footer_fallback: FOOTER_FALLBACK,
            tick_interval_ms,
            status_labels: EventStatus::ALL.iter()
                .map(|s| StatusLabel { value: s.as_str(), label: s.label() })
                .collect(),
        }
    }
}
