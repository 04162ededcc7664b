// Mon Aug 24 2026 - Alex

use crate::search::{value, ElementWidth};
use serde::{Deserialize, Serialize};

/// Widest element a search can track; narrower widths use the leading bytes.
pub const MAX_VALUE_WIDTH: usize = 4;

/// A surviving offset + value pair tracked between refinement passes.
/// Offsets are region-relative; the value is the raw bytes last observed at
/// that offset, in the region's native big-endian order. Only the first
/// `width.size()` bytes are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub offset: u32,
    pub value: [u8; MAX_VALUE_WIDTH],
}

impl Candidate {
    pub fn new(offset: u32, value: [u8; MAX_VALUE_WIDTH]) -> Self {
        Self { offset, value }
    }

    pub fn value_bytes(&self, width: ElementWidth) -> &[u8] {
        &self.value[..width.size()]
    }

    /// Unsigned interpretation of the recorded bytes at the given width.
    pub fn value_u32(&self, width: ElementWidth) -> u32 {
        value::decode_value(&self.value, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_views() {
        let candidate = Candidate::new(0x40, [0x12, 0x34, 0x56, 0x78]);

        assert_eq!(candidate.value_bytes(ElementWidth::Byte), &[0x12]);
        assert_eq!(candidate.value_bytes(ElementWidth::Short), &[0x12, 0x34]);
        assert_eq!(candidate.value_u32(ElementWidth::Byte), 0x12);
        assert_eq!(candidate.value_u32(ElementWidth::Short), 0x1234);
        assert_eq!(candidate.value_u32(ElementWidth::Int), 0x1234_5678);
    }
}
