use async_trait::async_trait;

use crate::entities::{
    DistributionPatch, DistributionResult, NewStockRecord, StockRecord, StoredEntry,
};
use crate::value_objects::RecordId;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Files a new record and returns the id the store assigned to it.
    async fn insert(&self, record: NewStockRecord) -> anyhow::Result<RecordId>;
    async fn get(&self, id: &RecordId) -> anyhow::Result<Option<StockRecord>>;
    async fn list(&self) -> anyhow::Result<Vec<StoredEntry>>;
    /// Applies the patch atomically if the record exists and is still
    /// `received`.
    async fn apply_distribution(
        &self,
        id: &RecordId,
        patch: DistributionPatch,
    ) -> anyhow::Result<DistributionResult>;
    async fn delete(&self, id: &RecordId) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}
