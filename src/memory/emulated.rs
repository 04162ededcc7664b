// Mon Aug 24 2026 - Alex

use crate::memory::{MemoryRegion, MemorySubsystem, RegionKind};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

struct RegionBuffer {
    base: u32,
    bytes: Vec<u8>,
}

impl RegionBuffer {
    fn offset_of(&self, address: u32) -> Option<usize> {
        let addr = u64::from(address);
        let base = u64::from(self.base);
        if addr >= base && addr < base + self.bytes.len() as u64 {
            Some((addr - base) as usize)
        } else {
            None
        }
    }
}

/// Buffer-backed memory subsystem. Each region is a plain byte vector; the
/// mutating side (`poke*`, `add_region`, `remove_region`) stands in for the
/// emulated CPU, and `run_synchronized` excludes it for the duration of a
/// scan by holding the region table's read lock across the closure. Nested
/// reads issued from inside that closure take the lock recursively.
pub struct EmulatedMemory {
    regions: RwLock<HashMap<RegionKind, RegionBuffer>>,
    runnable: AtomicBool,
}

impl EmulatedMemory {
    pub fn new() -> Self {
        Self {
            regions: RwLock::new(HashMap::new()),
            runnable: AtomicBool::new(true),
        }
    }

    pub fn with_region(self, kind: RegionKind, base: u32, bytes: Vec<u8>) -> Self {
        self.add_region(kind, base, bytes);
        self
    }

    pub fn add_region(&self, kind: RegionKind, base: u32, bytes: Vec<u8>) {
        self.regions.write().insert(kind, RegionBuffer { base, bytes });
    }

    /// Drops a region's backing buffer, as session teardown would.
    pub fn remove_region(&self, kind: RegionKind) {
        self.regions.write().remove(&kind);
    }

    pub fn set_runnable(&self, runnable: bool) {
        self.runnable.store(runnable, Ordering::SeqCst);
    }

    /// Writes raw bytes at a console-visible address. Returns false when the
    /// range is not fully inside one region.
    pub fn poke(&self, address: u32, bytes: &[u8]) -> bool {
        let mut regions = self.regions.write();
        for buffer in regions.values_mut() {
            if let Some(offset) = buffer.offset_of(address) {
                if offset + bytes.len() > buffer.bytes.len() {
                    return false;
                }
                buffer.bytes[offset..offset + bytes.len()].copy_from_slice(bytes);
                return true;
            }
        }
        false
    }

    pub fn poke_u8(&self, address: u32, value: u8) -> bool {
        self.poke(address, &[value])
    }

    pub fn poke_u16(&self, address: u32, value: u16) -> bool {
        self.poke(address, &value.to_be_bytes())
    }

    pub fn poke_u32(&self, address: u32, value: u32) -> bool {
        self.poke(address, &value.to_be_bytes())
    }

    pub fn poke_f32(&self, address: u32, value: f32) -> bool {
        self.poke_u32(address, value.to_bits())
    }
}

impl Default for EmulatedMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySubsystem for EmulatedMemory {
    fn resolve_region(&self, kind: RegionKind) -> Option<MemoryRegion> {
        let regions = self.regions.read_recursive();
        regions
            .get(&kind)
            .map(|buffer| MemoryRegion::new(kind, buffer.base, buffer.bytes.len() as u32))
    }

    fn is_session_runnable(&self) -> bool {
        self.runnable.load(Ordering::SeqCst)
    }

    fn is_readable_address(&self, address: u32) -> bool {
        let regions = self.regions.read_recursive();
        regions.values().any(|buffer| buffer.offset_of(address).is_some())
    }

    fn read_u8(&self, address: u32) -> u8 {
        let regions = self.regions.read_recursive();
        for buffer in regions.values() {
            if let Some(offset) = buffer.offset_of(address) {
                return buffer.bytes[offset];
            }
        }
        0
    }

    fn read_u16(&self, address: u32) -> u16 {
        let mut buf = [0u8; 2];
        if self.read_bytes(address, &mut buf) {
            u16::from_be_bytes(buf)
        } else {
            0
        }
    }

    fn read_u32(&self, address: u32) -> u32 {
        let mut buf = [0u8; 4];
        if self.read_bytes(address, &mut buf) {
            u32::from_be_bytes(buf)
        } else {
            0
        }
    }

    fn read_f32(&self, address: u32) -> f32 {
        f32::from_bits(self.read_u32(address))
    }

    fn run_synchronized(&self, work: &mut dyn FnMut()) {
        let _paused = self.regions.read();
        work();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_reads() {
        let memory = EmulatedMemory::new().with_region(
            RegionKind::Main,
            0x8000_0000,
            vec![0x12, 0x34, 0x56, 0x78],
        );

        assert_eq!(memory.read_u8(0x8000_0000), 0x12);
        assert_eq!(memory.read_u16(0x8000_0000), 0x1234);
        assert_eq!(memory.read_u32(0x8000_0000), 0x1234_5678);
    }

    #[test]
    fn test_unreadable_reads_return_sentinel() {
        let memory =
            EmulatedMemory::new().with_region(RegionKind::Main, 0x8000_0000, vec![0xff; 4]);

        assert!(!memory.is_readable_address(0x9000_0000));
        assert_eq!(memory.read_u8(0x9000_0000), 0);
        // Straddles the end of the region.
        assert_eq!(memory.read_u32(0x8000_0002), 0);
    }

    #[test]
    fn test_poke_and_remove_region() {
        let memory =
            EmulatedMemory::new().with_region(RegionKind::Main, 0x8000_0000, vec![0u8; 16]);

        assert!(memory.poke_u32(0x8000_0004, 0xdead_beef));
        assert_eq!(memory.read_u32(0x8000_0004), 0xdead_beef);
        assert!(!memory.poke_u32(0x8000_000e, 0));

        memory.remove_region(RegionKind::Main);
        assert!(memory.resolve_region(RegionKind::Main).is_none());
        assert!(!memory.is_readable_address(0x8000_0004));
    }

    #[test]
    fn test_reads_allowed_inside_synchronized_section() {
        let memory =
            EmulatedMemory::new().with_region(RegionKind::Main, 0x8000_0000, vec![7u8; 8]);

        let mut observed = 0u8;
        memory.run_synchronized(&mut || {
            observed = memory.read_u8(0x8000_0003);
        });
        assert_eq!(observed, 7);
    }
}
