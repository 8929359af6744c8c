use serde::Serialize;
use tokio::sync::broadcast;

use backend_domain::RecordId;

const CHANNEL_BUFFER: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockChangeKind {
    Created,
    Distributed,
    Deleted,
}

/// Notification that the stored collection changed. Subscribers re-read the
/// store rather than applying the change themselves.
#[derive(Debug, Clone, Serialize)]
pub struct StockChange {
    pub kind: StockChangeKind,
    pub ids: Vec<RecordId>,
    pub at: i64,
}

pub struct StockStreamHub {
    tx: broadcast::Sender<StockChange>,
}

impl Default for StockStreamHub {
    fn default() -> Self {
        let (tx, _rx) = broadcast::channel(CHANNEL_BUFFER);
        Self { tx }
    }
}

impl StockStreamHub {
    pub fn subscribe(&self) -> broadcast::Receiver<StockChange> {
        self.tx.subscribe()
    }

    pub fn publish(&self, kind: StockChangeKind, ids: Vec<RecordId>) {
        let change = StockChange {
            kind,
            ids,
            at: chrono::Utc::now().timestamp_millis(),
        };
        let _ = self.tx.send(change);
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
