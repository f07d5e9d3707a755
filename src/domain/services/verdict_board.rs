use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::models::event::Event;
use crate::domain::models::verdict::{EventTemporalRecord, VerdictSnapshot};
use crate::domain::services::registration::evaluate;

/// Latest verdicts for every event. Readers always see one tick's complete map.
pub struct VerdictBoard {
    tz: Tz,
    tx: watch::Sender<Arc<VerdictSnapshot>>,
}

impl VerdictBoard {
    pub fn new(tz: Tz) -> Self {
        let (tx, _) = watch::channel(Arc::new(VerdictSnapshot::default()));
        Self { tz, tx }
    }

    pub fn current(&self) -> Arc<VerdictSnapshot> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<VerdictSnapshot>> {
        self.tx.subscribe()
    }

    /// Evaluates all events at `now` and swaps the result in as the current snapshot.
    pub fn publish(&self, now: DateTime<Utc>, events: &[Event]) -> Arc<VerdictSnapshot> {
        let verdicts: HashMap<_, _> = events.iter()
            .map(|event| (event.id, evaluate(now, &EventTemporalRecord::from(event), self.tz)))
            .collect();

        let mut snapshot = VerdictSnapshot {
            tick: 0,
            computed_at: Some(now),
            verdicts,
        };
        let mut published = Arc::default();
        // Numbering and swap happen under the channel lock so concurrent publishers stay ordered.
        self.tx.send_modify(|current| {
            snapshot.tick = current.tick + 1;
            *current = Arc::new(snapshot);
            published = current.clone();
        });
        published
    }
}
