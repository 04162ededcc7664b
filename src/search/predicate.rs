// Mon Aug 24 2026 - Alex

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Acceptance bits for the three possible orderings of a candidate's
    /// current value against the comparison operand.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ComparisonMask: u8 {
        const EQUAL = 0x1;
        const GREATER_THAN = 0x2;
        const LESS_THAN = 0x4;
    }
}

/// User-visible comparison selection for a refinement pass. Each predicate
/// lowers to a `ComparisonMask`; `Unknown` accepts every ordering (it narrows
/// nothing and exists to rebaseline values), `NotEqual` is
/// `GREATER_THAN | LESS_THAN`.
///
/// Orderings are computed byte-wise over big-endian values, which is exact
/// for same-width integers but not a numeric order for floats once signs
/// differ. `Equal`/`NotEqual`/`Unknown` are unaffected by that caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPredicate {
    Unknown,
    NotEqual,
    Equal,
    GreaterThan,
    LessThan,
}

impl ComparisonPredicate {
    pub fn mask(self) -> ComparisonMask {
        match self {
            ComparisonPredicate::Unknown => {
                ComparisonMask::EQUAL | ComparisonMask::GREATER_THAN | ComparisonMask::LESS_THAN
            }
            ComparisonPredicate::NotEqual => {
                ComparisonMask::GREATER_THAN | ComparisonMask::LESS_THAN
            }
            ComparisonPredicate::Equal => ComparisonMask::EQUAL,
            ComparisonPredicate::GreaterThan => ComparisonMask::GREATER_THAN,
            ComparisonPredicate::LessThan => ComparisonMask::LESS_THAN,
        }
    }

    /// Whether a candidate whose current value compares as `ordering`
    /// against the operand survives this predicate.
    pub fn accepts(self, ordering: Ordering) -> bool {
        let bit = match ordering {
            Ordering::Less => ComparisonMask::LESS_THAN,
            Ordering::Equal => ComparisonMask::EQUAL,
            Ordering::Greater => ComparisonMask::GREATER_THAN,
        };
        self.mask().contains(bit)
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonPredicate::Unknown => "unknown",
            ComparisonPredicate::NotEqual => "not-equal",
            ComparisonPredicate::Equal => "equal",
            ComparisonPredicate::GreaterThan => "greater-than",
            ComparisonPredicate::LessThan => "less-than",
        }
    }
}

impl fmt::Display for ComparisonPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComparisonPredicate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unknown" => Ok(ComparisonPredicate::Unknown),
            "not-equal" | "ne" | "changed" => Ok(ComparisonPredicate::NotEqual),
            "equal" | "eq" => Ok(ComparisonPredicate::Equal),
            "greater-than" | "greater" | "gt" => Ok(ComparisonPredicate::GreaterThan),
            "less-than" | "less" | "lt" => Ok(ComparisonPredicate::LessThan),
            other => Err(format!("unknown comparison predicate: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_lowering() {
        assert_eq!(ComparisonPredicate::Unknown.mask(), ComparisonMask::all());
        assert_eq!(
            ComparisonPredicate::NotEqual.mask(),
            ComparisonMask::GREATER_THAN | ComparisonMask::LESS_THAN
        );
        assert_eq!(ComparisonPredicate::Equal.mask(), ComparisonMask::EQUAL);
        assert_eq!(ComparisonPredicate::GreaterThan.mask(), ComparisonMask::GREATER_THAN);
        assert_eq!(ComparisonPredicate::LessThan.mask(), ComparisonMask::LESS_THAN);
    }

    #[test]
    fn test_accepts() {
        assert!(ComparisonPredicate::Unknown.accepts(Ordering::Less));
        assert!(ComparisonPredicate::Unknown.accepts(Ordering::Equal));
        assert!(ComparisonPredicate::Unknown.accepts(Ordering::Greater));

        assert!(ComparisonPredicate::NotEqual.accepts(Ordering::Less));
        assert!(!ComparisonPredicate::NotEqual.accepts(Ordering::Equal));

        assert!(ComparisonPredicate::Equal.accepts(Ordering::Equal));
        assert!(!ComparisonPredicate::Equal.accepts(Ordering::Greater));

        assert!(ComparisonPredicate::GreaterThan.accepts(Ordering::Greater));
        assert!(!ComparisonPredicate::GreaterThan.accepts(Ordering::Less));

        assert!(ComparisonPredicate::LessThan.accepts(Ordering::Less));
        assert!(!ComparisonPredicate::LessThan.accepts(Ordering::Equal));
    }
}
