use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use crate::api::handlers::{current_board, reload_catalog};
use crate::api::views::{EventCard, PageChrome};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tera::Context;
use tracing::warn;

fn page_context(state: &AppState) -> Context {
    let mut context = Context::new();
    let tick_ms = u64::try_from(state.config.tick_interval.as_millis()).unwrap_or(u64::MAX);
    context.insert("page", &PageChrome::new(&state.assets, tick_ms));
    context
}

fn render_error(state: &AppState, status: StatusCode, message: &str, can_retry: bool) -> Result<Response, AppError> {
    let mut context = page_context(state);
    context.insert("status", &status.as_u16());
    context.insert("message", message);
    context.insert("can_retry", &can_retry);
    let html = state.templates.render("error.html", &context)?;
    Ok((status, Html(html)).into_response())
}

pub async fn list_page(
    State(state): State<Arc<AppState>>,
) -> Result<Response, AppError> {
    let (events, snapshot) = match current_board(&state).await {
        Ok(board) => board,
        Err(AppError::Unavailable(msg)) => {
            warn!("Rendering event list error page: {}", msg);
            return render_error(&state, StatusCode::SERVICE_UNAVAILABLE, &msg, true);
        }
        Err(e) => return Err(e),
    };

    let cards: Vec<EventCard> = events.iter()
        .map(|e| EventCard::build(e, snapshot.verdicts.get(&e.id), &state.assets))
        .collect();

    let mut context = page_context(&state);
    context.insert("events", &cards);
    let html = state.templates.render("events.html", &context)?;
    Ok(Html(html).into_response())
}

pub async fn detail_page(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
) -> Result<Response, AppError> {
    let (events, snapshot) = match current_board(&state).await {
        Ok(board) => board,
        Err(AppError::Unavailable(msg)) => {
            return render_error(&state, StatusCode::SERVICE_UNAVAILABLE, &msg, true);
        }
        Err(e) => return Err(e),
    };

    let Some(event) = events.iter().find(|e| e.id == event_id) else {
        return render_error(&state, StatusCode::NOT_FOUND, &format!("Event {} not found", event_id), false);
    };

    let mut context = page_context(&state);
    context.insert("event", &EventCard::build(event, snapshot.verdicts.get(&event.id), &state.assets));
    let html = state.templates.render("event_detail.html", &context)?;
    Ok(Html(html).into_response())
}

/// Retry button target. Failures show up on the list page it redirects to.
pub async fn reload_page(
    State(state): State<Arc<AppState>>,
) -> Redirect {
    if let Err(e) = reload_catalog(&state).await {
        warn!("Reload requested from page failed: {}", e);
    }
    Redirect::to("/")
}
