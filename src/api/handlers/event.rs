use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::responses::{EventResponse, ReloadResponse};
use crate::api::handlers::{current_board, reload_catalog};
use crate::domain::models::event::Event;
use crate::domain::models::verdict::VerdictSnapshot;
use crate::domain::services::assets::AssetResolver;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

fn to_response(event: &Event, snapshot: &VerdictSnapshot, assets: &AssetResolver) -> EventResponse {
    EventResponse {
        event: event.clone(),
        image_url: assets.displayable(event.image.as_deref()),
        verdict: snapshot.verdicts.get(&event.id).cloned(),
    }
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let (events, snapshot) = current_board(&state).await?;

    let body: Vec<EventResponse> = events.iter()
        .map(|e| to_response(e, &snapshot, &state.assets))
        .collect();
    Ok(Json(body))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let (events, snapshot) = current_board(&state).await?;

    let event = events.iter()
        .find(|e| e.id == event_id)
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

    Ok(Json(to_response(event, &snapshot, &state.assets)))
}

pub async fn get_verdicts(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let (_, snapshot) = current_board(&state).await?;
    Ok(Json(snapshot.as_ref().clone()))
}

pub async fn reload_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = reload_catalog(&state).await?;
    info!("Event list reloaded on request ({} events)", events.len());
    Ok(Json(ReloadResponse { events: events.len() }))
}
