use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{
    DistributionPatch, DistributionResult, NewStockRecord, RecordId, RecordStore, StockRecord,
    StoredEntry,
};

/// Volatile store, used for tests and `store_backend = "memory"`.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<BTreeMap<RecordId, StockRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared by the file-backed store, which wraps the same map.
pub(crate) fn distribute_in(
    records: &mut BTreeMap<RecordId, StockRecord>,
    id: &RecordId,
    patch: &DistributionPatch,
) -> DistributionResult {
    let Some(record) = records.get_mut(id) else {
        return DistributionResult::NotFound;
    };
    if record.apply_distribution(patch) {
        DistributionResult::Applied(record.clone())
    } else {
        DistributionResult::AlreadyDistributed
    }
}

pub(crate) fn entries_of(records: &BTreeMap<RecordId, StockRecord>) -> Vec<StoredEntry> {
    records
        .iter()
        .map(|(id, record)| StoredEntry {
            id: id.clone(),
            record: record.clone(),
        })
        .collect()
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, record: NewStockRecord) -> anyhow::Result<RecordId> {
        let mut records = self.records.write().await;
        let mut id = RecordId::generate();
        while records.contains_key(&id) {
            id = RecordId::generate();
        }
        records.insert(id.clone(), record);
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
        Ok(distribute_in(&mut records, id, &patch))
    }

    async fn delete(&self, id: &RecordId) -> anyhow::Result<bool> {
        Ok(self.records.write().await.remove(id).is_some())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use backend_domain::{Quantities, StockStatus};

    pub(crate) fn sample_record(timestamp: i64) -> StockRecord {
        StockRecord {
            import_date: "2025-01-15".to_string(),
            distribution_date: String::new(),
            asset_id: Some("cipher-asset".to_string()),
            serial_number: Some("cipher-sn".to_string()),
            brand_model: Some("cipher-brand".to_string()),
            category: None,
            computer_name: None,
            department: Some("cipher-dept".to_string()),
            building: Some("cipher-building".to_string()),
            remarks: Some(String::new()),
            distributor: Some(String::new()),
            status: StockStatus::Received,
            quantity_received: 1,
            quantity_distributed: 0,
            quantity_balance: 1,
            receiver_id: "uid-1".to_string(),
            timestamp,
        }
    }

    pub(crate) fn patch() -> DistributionPatch {
        DistributionPatch {
            distribution_date: "2025-02-01".to_string(),
            distributor: "cipher-email".to_string(),
            quantities: Quantities::on_distribution(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryRecordStore::new();
        let a = store.insert(sample_record(1)).await.expect("insert a");
        let b = store.insert(sample_record(2)).await.expect("insert b");
        assert_ne!(a, b);
        assert_eq!(store.list().await.expect("list").len(), 2);
        assert_eq!(
            store.get(&a).await.expect("get").map(|r| r.timestamp),
            Some(1)
        );
    }

    #[tokio::test]
    async fn distribution_applies_once() {
        let store = MemoryRecordStore::new();
        let id = store.insert(sample_record(1)).await.expect("insert");

        match store.apply_distribution(&id, patch()).await.expect("first") {
            DistributionResult::Applied(record) => {
                assert_eq!(record.status, StockStatus::Distributed)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(
            store.apply_distribution(&id, patch()).await.expect("second"),
            DistributionResult::AlreadyDistributed
        );
        assert_eq!(
            store
                .apply_distribution(&RecordId::new("missing"), patch())
                .await
                .expect("missing"),
            DistributionResult::NotFound
        );
    }

    #[tokio::test]
    async fn delete_reports_presence() {
        let store = MemoryRecordStore::new();
        let id = store.insert(sample_record(1)).await.expect("insert");
        assert!(store.delete(&id).await.expect("delete"));
        assert!(!store.delete(&id).await.expect("delete again"));
        assert!(store.get(&id).await.expect("get").is_none());
    }
}
