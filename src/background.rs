use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, info_span, Instrument};
use crate::domain::services::catalog::EventCatalog;
use crate::domain::services::verdict_board::VerdictBoard;

/// Owns the recurring re-evaluation of all verdicts.
///
/// Started on first need, stopped explicitly or when dropped, so the loop never outlives
/// the catalog and board it reads from.
pub struct VerdictTicker {
    catalog: Arc<EventCatalog>,
    board: Arc<VerdictBoard>,
    period: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl VerdictTicker {
    pub fn new(catalog: Arc<EventCatalog>, board: Arc<VerdictBoard>, period: Duration) -> Self {
        Self {
            catalog,
            board,
            period,
            handle: Mutex::new(None),
        }
    }

    /// Starts the loop unless it is already running. The first snapshot is published
    /// before returning, so callers never see an empty board for loaded events.
    pub async fn ensure_running(&self) {
        let mut handle = self.handle.lock().await;
        if handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }

        self.catalog.publish_verdicts(&self.board, Utc::now()).await;

        info!("Starting verdict ticker (every {:?})", self.period);
        let span = info_span!("verdict_ticker");
        *handle = Some(tokio::spawn(
            run_ticks(self.catalog.clone(), self.board.clone(), self.period).instrument(span),
        ));
    }

    pub async fn stop(&self) {
        if let Some(h) = self.handle.lock().await.take() {
            h.abort();
            info!("Verdict ticker stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.lock().await.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for VerdictTicker {
    fn drop(&mut self) {
        if let Some(h) = self.handle.get_mut().take() {
            h.abort();
        }
    }
}

async fn run_ticks(catalog: Arc<EventCatalog>, board: Arc<VerdictBoard>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The immediate first tick duplicates the snapshot published on start.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let snapshot = catalog.publish_verdicts(&board, Utc::now()).await;
        debug!(tick = snapshot.tick, events = snapshot.verdicts.len(), "Published verdicts");
    }
}
