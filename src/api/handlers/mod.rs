pub mod event;
pub mod health;
pub mod pages;

use std::sync::Arc;
use chrono::Utc;
use crate::domain::models::event::Event;
use crate::domain::models::verdict::VerdictSnapshot;
use crate::error::AppError;
use crate::state::AppState;

/// Loaded events plus the verdicts to show for them, starting the ticker if needed.
pub(crate) async fn current_board(state: &AppState) -> Result<(Arc<[Event]>, Arc<VerdictSnapshot>), AppError> {
    let events = state.catalog.require_events().await?;
    state.ticker.ensure_running().await;
    Ok((events, state.board.current()))
}

/// User-triggered re-fetch. The board is republished at once so nobody waits for a tick.
pub(crate) async fn reload_catalog(state: &AppState) -> Result<Arc<[Event]>, AppError> {
    let result = state.catalog.reload().await;
    state.catalog.publish_verdicts(&state.board, Utc::now()).await;
    result
}
