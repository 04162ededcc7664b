// Mon Aug 24 2026 - Alex

use crate::memory::RegionKind;
use std::fmt;

/// A resolved, contiguous emulated memory buffer. The core never holds the
/// backing pointer; all byte access goes through the `MemorySubsystem` that
/// produced this descriptor, and a descriptor is only considered current for
/// the duration of the operation it was resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryRegion {
    kind: RegionKind,
    size: u32,
    base_address: u32,
}

impl MemoryRegion {
    pub fn new(kind: RegionKind, base_address: u32, size: u32) -> Self {
        Self {
            kind,
            size,
            base_address,
        }
    }

    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn base_address(&self) -> u32 {
        self.base_address
    }

    /// One past the last console-visible address of the region.
    pub fn end_address(&self) -> u32 {
        self.base_address.wrapping_add(self.size)
    }

    pub fn contains(&self, address: u32) -> bool {
        address >= self.base_address && (u64::from(address)) < u64::from(self.base_address) + u64::from(self.size)
    }

    /// Converts a region-relative offset into a console-visible address.
    pub fn to_absolute(&self, offset: u32) -> u32 {
        self.base_address.wrapping_add(offset)
    }

    /// Converts a console-visible address into a region-relative offset, if
    /// the address falls inside this region.
    pub fn to_offset(&self, address: u32) -> Option<u32> {
        if self.contains(address) {
            Some(address - self.base_address)
        } else {
            None
        }
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:08x}-{:08x} ({} bytes)",
            self.kind,
            self.base_address,
            self.end_address(),
            self.size
        )
    }
}
