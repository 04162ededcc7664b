// Mon Aug 24 2026 - Alex

use crate::memory::{MemoryRegion, RegionKind};

/// Capability handed to the search core by the embedder. Everything the
/// engine knows about live memory goes through this trait: region lookup,
/// typed big-endian reads, readability checks, and the synchronization
/// hand-off that keeps the emulated CPU from mutating memory mid-scan.
///
/// Reads return a zero sentinel for unreadable addresses rather than failing;
/// callers that care must check `is_readable_address` first.
pub trait MemorySubsystem: Send + Sync {
    /// Resolves a region descriptor, or `None` when the region has no
    /// backing buffer for the current session (e.g. expansion RAM on a
    /// GameCube title).
    fn resolve_region(&self, kind: RegionKind) -> Option<MemoryRegion>;

    /// Whether the emulated session is in a state where memory can be
    /// scanned (running or paused).
    fn is_session_runnable(&self) -> bool;

    fn is_readable_address(&self, address: u32) -> bool;

    fn read_u8(&self, address: u32) -> u8;
    fn read_u16(&self, address: u32) -> u16;
    fn read_u32(&self, address: u32) -> u32;
    fn read_f32(&self, address: u32) -> f32;

    /// Executes `work` while the thread owning emulated execution is
    /// guaranteed not to be advancing. Blocks until the unit completes; there
    /// is no cancellation.
    fn run_synchronized(&self, work: &mut dyn FnMut());

    /// Fills `buf` from `address`, returning false without a full write if
    /// any byte of the range is unreadable.
    fn read_bytes(&self, address: u32, buf: &mut [u8]) -> bool {
        for (i, slot) in buf.iter_mut().enumerate() {
            let addr = match address.checked_add(i as u32) {
                Some(addr) => addr,
                None => return false,
            };
            if !self.is_readable_address(addr) {
                return false;
            }
            *slot = self.read_u8(addr);
        }
        true
    }
}
