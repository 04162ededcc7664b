// Mon Aug 24 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The emulated memory regions a search can run against. Which of these are
/// actually backed by a buffer depends on the running title; `Expansion` only
/// exists for Wii sessions and `VirtualMirror` only when the fake VMEM is in
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Main,
    Expansion,
    VirtualMirror,
}

impl RegionKind {
    pub fn label(self) -> &'static str {
        match self {
            RegionKind::Main => "main",
            RegionKind::Expansion => "expansion",
            RegionKind::VirtualMirror => "virtual-mirror",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "ram" => Ok(RegionKind::Main),
            "expansion" | "exram" | "wii" => Ok(RegionKind::Expansion),
            "virtual-mirror" | "vmem" => Ok(RegionKind::VirtualMirror),
            other => Err(format!("unknown memory region: {}", other)),
        }
    }
}
