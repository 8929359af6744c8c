// Quantity value object

use serde::{Deserialize, Serialize};

/// Per-record counters. There is no partial-quantity model: a record is
/// either fully on hand (1/0/1) or fully distributed (0/1/0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantities {
    pub received: u32,
    pub distributed: u32,
    pub balance: u32,
}

impl Quantities {
    pub fn on_intake() -> Self {
        Self {
            received: 1,
            distributed: 0,
            balance: 1,
        }
    }

    pub fn on_distribution() -> Self {
        Self {
            received: 0,
            distributed: 1,
            balance: 0,
        }
    }
}
