// Mon Aug 24 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed byte size used to interpret every candidate's value for the
/// duration of a search session. Chosen at initialization; changing it
/// requires a fresh search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementWidth {
    Byte,
    Short,
    Int,
    Float,
}

impl ElementWidth {
    pub const fn size(self) -> usize {
        match self {
            ElementWidth::Byte => 1,
            ElementWidth::Short => 2,
            ElementWidth::Int | ElementWidth::Float => 4,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, ElementWidth::Float)
    }

    pub fn label(self) -> &'static str {
        match self {
            ElementWidth::Byte => "8-bit",
            ElementWidth::Short => "16-bit",
            ElementWidth::Int => "32-bit",
            ElementWidth::Float => "float",
        }
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ElementWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "byte" | "8" | "u8" => Ok(ElementWidth::Byte),
            "short" | "16" | "u16" => Ok(ElementWidth::Short),
            "int" | "32" | "u32" => Ok(ElementWidth::Int),
            "float" | "f32" => Ok(ElementWidth::Float),
            other => Err(format!("unknown element width: {}", other)),
        }
    }
}
