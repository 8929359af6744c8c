// Stock record entity
// The stored form of one tracked piece of equipment. Sensitive text fields
// hold codec output, never plaintext written by this service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::value_objects::{Quantities, RecordId, StockStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub import_date: String,
    #[serde(default)]
    pub distribution_date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub asset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub brand_model: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub computer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub building: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub distributor: Option<String>,
    pub status: StockStatus,
    #[serde(alias = "qt_received", default = "one")]
    pub quantity_received: u32,
    #[serde(alias = "qt_distributed", default)]
    pub quantity_distributed: u32,
    #[serde(alias = "qt_balance", default = "one")]
    pub quantity_balance: u32,
    pub receiver_id: String,
    pub timestamp: i64,
}

fn one() -> u32 {
    1
}

/// Sensitive columns written by older clients are not always strings. Any
/// scalar is kept as its text form so the codec can pass it through on read;
/// objects and arrays keep their compact JSON.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

impl StockRecord {
    pub fn quantities(&self) -> Quantities {
        Quantities {
            received: self.quantity_received,
            distributed: self.quantity_distributed,
            balance: self.quantity_balance,
        }
    }

    pub fn set_quantities(&mut self, quantities: Quantities) {
        self.quantity_received = quantities.received;
        self.quantity_distributed = quantities.distributed;
        self.quantity_balance = quantities.balance;
    }

    /// Applies a distribution patch. Returns `false` and leaves the record
    /// untouched when the status transition is not allowed.
    pub fn apply_distribution(&mut self, patch: &DistributionPatch) -> bool {
        if !self.status.can_transition_to(StockStatus::Distributed) {
            return false;
        }
        self.status = StockStatus::Distributed;
        self.distribution_date = patch.distribution_date.clone();
        self.distributor = Some(patch.distributor.clone());
        self.set_quantities(patch.quantities);
        true
    }
}

/// A record awaiting its store-assigned id.
pub type NewStockRecord = StockRecord;

/// A record together with the key the store filed it under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub id: RecordId,
    pub record: StockRecord,
}

/// Fields written by the distribution transition. `distributor` is already
/// encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionPatch {
    pub distribution_date: String,
    pub distributor: String,
    pub quantities: Quantities,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistributionResult {
    Applied(StockRecord),
    NotFound,
    AlreadyDistributed,
}
