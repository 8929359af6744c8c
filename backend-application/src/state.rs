use std::sync::Arc;

use backend_domain::ports::{FieldCodec, RecordStore};
use backend_domain::RuntimeConfig;

use crate::{Metrics, StockStreamHub};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub record_store: Arc<dyn RecordStore>,
    pub codec: Arc<dyn FieldCodec>,
    pub metrics: Arc<Metrics>,
    pub stream_hub: Arc<StockStreamHub>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        record_store: Arc<dyn RecordStore>,
        codec: Arc<dyn FieldCodec>,
    ) -> Self {
        Self {
            config,
            record_store,
            codec,
            metrics: Arc::new(Metrics::default()),
            stream_hub: Arc::new(StockStreamHub::default()),
        }
    }
}
