// Inventory read model
// A stock record with every sensitive field decoded for display

use serde::{Deserialize, Serialize};

use crate::value_objects::{RecordId, StockStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub import_date: String,
    pub distribution_date: String,
    pub asset_id: String,
    pub serial_number: String,
    pub brand_model: String,
    pub category: String,
    pub computer_name: String,
    pub department: String,
    pub building: String,
    pub remarks: String,
    pub distributor: String,
    pub status: StockStatus,
    pub status_label: String,
    pub quantity_received: u32,
    pub quantity_distributed: u32,
    pub quantity_balance: u32,
    pub receiver_id: String,
    pub timestamp: i64,
}

impl InventoryItem {
    /// Case-insensitive substring match over the searchable columns.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            &self.asset_id,
            &self.brand_model,
            &self.serial_number,
            &self.department,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub available: usize,
    pub distributed: usize,
    pub recent: Vec<InventoryItem>,
}

/// Most-recent-first ordering by creation timestamp.
pub fn sort_newest_first(items: &mut [InventoryItem]) {
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
