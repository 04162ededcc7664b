// Mon Aug 24 2026 - Alex

use crate::memory::RegionKind;
use crate::search::{ComparisonPredicate, ElementWidth, NumericBase};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Settings for one search session, as a UI or the CLI would collect them.
/// `bounds` are console-visible addresses, exactly as typed into the range
/// inputs; `value` is the raw literal, with `None` meaning "compare against
/// the prior value".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub region: RegionKind,
    pub width: ElementWidth,
    pub predicate: ComparisonPredicate,
    pub numeric_base: NumericBase,
    pub value: Option<String>,
    pub bounds: Option<(u32, u32)>,
    pub refresh_interval_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            region: RegionKind::Main,
            width: ElementWidth::Int,
            predicate: ComparisonPredicate::Unknown,
            numeric_base: NumericBase::Decimal,
            value: None,
            bounds: None,
            refresh_interval_ms: 1000,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: RegionKind) -> Self {
        self.region = region;
        self
    }

    pub fn with_width(mut self, width: ElementWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_predicate(mut self, predicate: ComparisonPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_numeric_base(mut self, base: NumericBase) -> Self {
        self.numeric_base = base;
        self
    }

    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn with_bounds(mut self, bounds: Option<(u32, u32)>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
