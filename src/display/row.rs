// Tue Aug 25 2026 - Alex

use serde::{Deserialize, Serialize};

/// Hex column marker for a candidate whose address is no longer readable.
pub const UNREADABLE_SENTINEL: &str = "---";

/// Decimal/float column marker when no numeric conversion was possible.
pub const BAD_VALUE_SENTINEL: &str = "-";

/// One decoded table row for a candidate, ready for presentation. All
/// columns are pre-rendered text; the decimal column is re-parsed from the
/// hex text so a failed decode shows the same sentinel the table does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub address: u32,
    pub hex: String,
    pub decimal: String,
    pub float: String,
}

impl DisplayRow {
    pub fn unreadable(address: u32) -> Self {
        Self {
            address,
            hex: UNREADABLE_SENTINEL.to_string(),
            decimal: BAD_VALUE_SENTINEL.to_string(),
            float: BAD_VALUE_SENTINEL.to_string(),
        }
    }

    pub fn is_readable(&self) -> bool {
        self.hex != UNREADABLE_SENTINEL
    }

    /// Zero-padded console-visible address, as shown in the address column.
    pub fn address_text(&self) -> String {
        format!("{:08x}", self.address)
    }
}
