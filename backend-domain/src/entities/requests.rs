// Request DTOs for the record writer and reader

use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeRequest {
    #[serde(default)]
    pub import_date: Option<String>,
    pub asset_id: String,
    #[serde(default)]
    pub serial_number: String,
    pub brand_model: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub computer_name: Option<String>,
    pub department: String,
    pub building: String,
    #[serde(default)]
    pub remarks: String,
    pub receiver_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionRequest {
    pub ids: Vec<RecordId>,
    #[serde(default)]
    pub distribution_date: Option<String>,
    pub distributor: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionOutcome {
    pub distributed: Vec<crate::entities::InventoryItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryQuery {
    pub status: Option<String>,
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub recent: Option<usize>,
}
