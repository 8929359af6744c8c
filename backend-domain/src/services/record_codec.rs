// Record sealing and opening
// Decides which fields pass through the field codec on write and read.
// Dates, status, quantities, receiver id and timestamp stay plaintext.

use crate::entities::{
    DistributionPatch, InventoryItem, IntakeRequest, NewStockRecord, StockRecord, StoredEntry,
};
use crate::ports::FieldCodec;
use crate::value_objects::{Quantities, RecordId, StockStatus};

/// Builds the stored form of a new intake with every sensitive field
/// encoded.
pub fn seal_intake(
    codec: &dyn FieldCodec,
    request: &IntakeRequest,
    import_date: String,
    timestamp: i64,
) -> NewStockRecord {
    let quantities = Quantities::on_intake();
    StockRecord {
        import_date,
        distribution_date: String::new(),
        asset_id: Some(codec.encode_text(&request.asset_id)),
        serial_number: Some(codec.encode_text(&request.serial_number)),
        brand_model: Some(codec.encode_text(&request.brand_model)),
        category: request
            .category
            .as_deref()
            .map(|value| codec.encode_text(value)),
        computer_name: request
            .computer_name
            .as_deref()
            .map(|value| codec.encode_text(value)),
        department: Some(codec.encode_text(&request.department)),
        building: Some(codec.encode_text(&request.building)),
        remarks: Some(codec.encode_text(&request.remarks)),
        distributor: Some(String::new()),
        status: StockStatus::Received,
        quantity_received: quantities.received,
        quantity_distributed: quantities.distributed,
        quantity_balance: quantities.balance,
        receiver_id: request.receiver_id.clone(),
        timestamp,
    }
}

pub fn seal_distribution(
    codec: &dyn FieldCodec,
    distribution_date: String,
    distributor: &str,
) -> DistributionPatch {
    DistributionPatch {
        distribution_date,
        distributor: codec.encode_text(distributor),
        quantities: Quantities::on_distribution(),
    }
}

pub fn open_record(codec: &dyn FieldCodec, id: RecordId, record: &StockRecord) -> InventoryItem {
    let decode = |value: &Option<String>| codec.decode_text(value.as_deref());
    InventoryItem {
        id,
        import_date: record.import_date.clone(),
        distribution_date: record.distribution_date.clone(),
        asset_id: decode(&record.asset_id),
        serial_number: decode(&record.serial_number),
        brand_model: decode(&record.brand_model),
        category: decode(&record.category),
        computer_name: decode(&record.computer_name),
        department: decode(&record.department),
        building: decode(&record.building),
        remarks: decode(&record.remarks),
        distributor: decode(&record.distributor),
        status: record.status,
        status_label: record.status.localized().to_string(),
        quantity_received: record.quantity_received,
        quantity_distributed: record.quantity_distributed,
        quantity_balance: record.quantity_balance,
        receiver_id: record.receiver_id.clone(),
        timestamp: record.timestamp,
    }
}

pub fn open_entry(codec: &dyn FieldCodec, entry: &StoredEntry) -> InventoryItem {
    open_record(codec, entry.id.clone(), &entry.record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::FieldValue;

    /// Marks encoded values with a prefix; anything without it is plaintext.
    struct PrefixCodec;

    impl FieldCodec for PrefixCodec {
        fn encode(&self, value: &FieldValue) -> String {
            if value.is_empty() {
                return String::new();
            }
            format!("enc:{}", value.to_display_string())
        }

        fn decode(&self, stored: Option<&str>) -> FieldValue {
            match stored {
                None | Some("") => FieldValue::text(""),
                Some(raw) => FieldValue::text(raw.strip_prefix("enc:").unwrap_or(raw)),
            }
        }
    }

    fn intake() -> IntakeRequest {
        IntakeRequest {
            import_date: None,
            asset_id: "AS-001234".to_string(),
            serial_number: "SN-9".to_string(),
            brand_model: "Lenovo T14".to_string(),
            category: None,
            computer_name: Some("PC-ACC-01".to_string()),
            department: "Accounting".to_string(),
            building: "Building A".to_string(),
            remarks: String::new(),
            receiver_id: "uid-1".to_string(),
        }
    }

    #[test]
    fn intake_encodes_sensitive_fields_only() {
        let record = seal_intake(&PrefixCodec, &intake(), "2025-01-15".to_string(), 42);
        assert_eq!(record.asset_id.as_deref(), Some("enc:AS-001234"));
        assert_eq!(record.building.as_deref(), Some("enc:Building A"));
        assert_eq!(record.computer_name.as_deref(), Some("enc:PC-ACC-01"));
        assert_eq!(record.remarks.as_deref(), Some(""));
        assert!(record.category.is_none());
        assert_eq!(record.import_date, "2025-01-15");
        assert_eq!(record.receiver_id, "uid-1");
        assert_eq!(record.status, StockStatus::Received);
        assert_eq!(record.quantities(), Quantities::on_intake());
    }

    #[test]
    fn open_record_decodes_and_tolerates_legacy_plaintext() {
        let mut record = seal_intake(&PrefixCodec, &intake(), "2025-01-15".to_string(), 42);
        record.department = Some("Legacy Dept".to_string());
        let item = open_record(&PrefixCodec, RecordId::new("r1"), &record);
        assert_eq!(item.asset_id, "AS-001234");
        assert_eq!(item.department, "Legacy Dept");
        assert_eq!(item.category, "");
        assert_eq!(item.status_label, "รับเข้า");
    }

    #[test]
    fn distribution_patch_encodes_distributor() {
        let patch = seal_distribution(&PrefixCodec, "2025-02-01".to_string(), "it@example.org");
        assert_eq!(patch.distributor, "enc:it@example.org");
        assert_eq!(patch.quantities, Quantities::on_distribution());
    }
}
