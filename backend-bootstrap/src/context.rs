use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_domain::{FieldCodec, RecordStore};
use backend_infrastructure::{AesFieldCodec, AppConfig, JsonFileRecordStore, MemoryRecordStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let codec: Arc<dyn FieldCodec> =
            Arc::new(AesFieldCodec::new(config.effective_encryption_key()));

        let record_store: Arc<dyn RecordStore> = match config.store_backend.as_str() {
            "memory" => {
                info!("using in-memory record store");
                Arc::new(MemoryRecordStore::new())
            }
            _ => Arc::new(JsonFileRecordStore::open(&config.store_path).await?),
        };

        let state = AppState::new(runtime_config, record_store, codec);
        Ok(Self { state })
    }
}
