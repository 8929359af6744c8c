use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;

use backend_domain::{
    DistributionPatch, DistributionResult, NewStockRecord, RecordId, RecordStore, StockRecord,
    StoredEntry,
};

use crate::repositories::memory_store::{distribute_in, entries_of};

/// Records kept as one JSON object keyed by id, the same shape as a
/// `stocks/{id}` collection. Every mutation rewrites the file through a
/// temporary sibling and a rename, and only lands in memory once the write
/// succeeded.
pub struct JsonFileRecordStore {
    path: PathBuf,
    records: RwLock<BTreeMap<RecordId, StockRecord>>,
}

impl JsonFileRecordStore {
    pub async fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("read {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("parse {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };
        info!("loaded {} stock records from {}", records.len(), path.display());
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    async fn persist(&self, records: &BTreeMap<RecordId, StockRecord>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileRecordStore {
    async fn insert(&self, record: NewStockRecord) -> anyhow::Result<RecordId> {
        let mut records = self.records.write().await;
        let mut id = RecordId::generate();
        while records.contains_key(&id) {
            id = RecordId::generate();
        }
        let mut next = records.clone();
        next.insert(id.clone(), record);
        self.persist(&next).await?;
        *records = next;
        Ok(id)
    }

    async fn get(&self, id: &RecordId) -> anyhow::Result<Option<StockRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<StoredEntry>> {
        Ok(entries_of(&*self.records.read().await))
    }

    async fn apply_distribution(
        &self,
        id: &RecordId,
        patch: DistributionPatch,
    ) -> anyhow::Result<DistributionResult> {
        let mut records = self.records.write().await;
        let mut next = records.clone();
        let result = distribute_in(&mut next, id, &patch);
        if matches!(result, DistributionResult::Applied(_)) {
            self.persist(&next).await?;
            *records = next;
        }
        Ok(result)
    }

    async fn delete(&self, id: &RecordId) -> anyhow::Result<bool> {
        let mut records = self.records.write().await;
        if !records.contains_key(id) {
            return Ok(false);
        }
        let mut next = records.clone();
        next.remove(id);
        self.persist(&next).await?;
        *records = next;
        Ok(true)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                Err(anyhow::anyhow!("store directory {} is missing", parent.display()))
            }
            _ => Ok(()),
        }
    }
}
