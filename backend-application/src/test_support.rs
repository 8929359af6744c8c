use std::sync::Arc;

use backend_domain::{IntakeRequest, RuntimeConfig, StockRecord, StockStatus};
use backend_infrastructure::{AesFieldCodec, MemoryRecordStore};

use crate::AppState;

pub(crate) fn test_state() -> AppState {
    AppState::new(
        RuntimeConfig::default(),
        Arc::new(MemoryRecordStore::new()),
        Arc::new(AesFieldCodec::new("test-secret")),
    )
}

pub(crate) fn intake_request(asset_id: &str) -> IntakeRequest {
    IntakeRequest {
        import_date: Some("2025-01-15".to_string()),
        asset_id: asset_id.to_string(),
        serial_number: "SN-0001".to_string(),
        brand_model: "Dell Latitude 5440".to_string(),
        category: Some("Notebook".to_string()),
        computer_name: None,
        department: "Accounting".to_string(),
        building: "Building A".to_string(),
        remarks: String::new(),
        receiver_id: "uid-1".to_string(),
    }
}

/// A record written before field encryption existed: plaintext throughout.
pub(crate) fn legacy_record(asset_id: &str, timestamp: i64) -> StockRecord {
    StockRecord {
        import_date: "2024-10-01".to_string(),
        distribution_date: String::new(),
        asset_id: Some(asset_id.to_string()),
        serial_number: Some(format!("SN-{}", asset_id)),
        brand_model: Some("Acer Veriton".to_string()),
        category: None,
        computer_name: None,
        department: Some("IT".to_string()),
        building: Some("Building B".to_string()),
        remarks: None,
        distributor: Some(String::new()),
        status: StockStatus::Received,
        quantity_received: 1,
        quantity_distributed: 0,
        quantity_balance: 1,
        receiver_id: "uid-legacy".to_string(),
        timestamp,
    }
}
