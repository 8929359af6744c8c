// Stock status value object

use serde::{Deserialize, Serialize};

pub const RECEIVED_LOCALIZED: &str = "รับเข้า";
pub const DISTRIBUTED_LOCALIZED: &str = "จำหน่าย";

/// Lifecycle status. The only transition is `Received -> Distributed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[serde(alias = "รับเข้า")]
    Received,
    #[serde(alias = "จำหน่าย")]
    Distributed,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Received => "received",
            StockStatus::Distributed => "distributed",
        }
    }

    pub fn localized(&self) -> &'static str {
        match self {
            StockStatus::Received => RECEIVED_LOCALIZED,
            StockStatus::Distributed => DISTRIBUTED_LOCALIZED,
        }
    }

    pub fn can_transition_to(&self, next: StockStatus) -> bool {
        matches!((self, next), (StockStatus::Received, StockStatus::Distributed))
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed == RECEIVED_LOCALIZED {
            return Some(StockStatus::Received);
        }
        if trimmed == DISTRIBUTED_LOCALIZED {
            return Some(StockStatus::Distributed);
        }
        match trimmed.to_lowercase().as_str() {
            "received" => Some(StockStatus::Received),
            "distributed" => Some(StockStatus::Distributed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_strings_deserialize_as_aliases() {
        let status: StockStatus = serde_json::from_str("\"รับเข้า\"").expect("received alias");
        assert_eq!(status, StockStatus::Received);
        let status: StockStatus = serde_json::from_str("\"จำหน่าย\"").expect("distributed alias");
        assert_eq!(status, StockStatus::Distributed);
        assert_eq!(
            serde_json::to_string(&StockStatus::Distributed).expect("serialize"),
            "\"distributed\""
        );
    }

    #[test]
    fn transition_is_one_way() {
        assert!(StockStatus::Received.can_transition_to(StockStatus::Distributed));
        assert!(!StockStatus::Distributed.can_transition_to(StockStatus::Received));
        assert!(!StockStatus::Distributed.can_transition_to(StockStatus::Distributed));
    }

    #[test]
    fn parse_accepts_english_and_localized() {
        assert_eq!(StockStatus::parse(" Received "), Some(StockStatus::Received));
        assert_eq!(StockStatus::parse("จำหน่าย"), Some(StockStatus::Distributed));
        assert_eq!(StockStatus::parse("lost"), None);
    }
}
