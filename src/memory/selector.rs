// Mon Aug 24 2026 - Alex

use crate::memory::{MemoryRegion, MemorySubsystem, RegionKind};
use std::sync::Arc;

/// Resolves the active memory region for a search. Resolution is always
/// performed fresh against the subsystem; the last successful result is kept
/// only to pre-fill the range inputs of a UI, never to gate correctness.
pub struct RegionSelector {
    memory: Arc<dyn MemorySubsystem>,
    last_resolved: Option<MemoryRegion>,
}

impl RegionSelector {
    pub fn new(memory: Arc<dyn MemorySubsystem>) -> Self {
        Self {
            memory,
            last_resolved: None,
        }
    }

    /// Returns `None` when the requested region has no backing buffer for
    /// the current session.
    pub fn resolve(&mut self, kind: RegionKind) -> Option<MemoryRegion> {
        let region = self.memory.resolve_region(kind);
        if let Some(region) = region {
            self.last_resolved = Some(region);
        } else {
            log::warn!("memory region {} is unavailable", kind);
        }
        region
    }

    pub fn last_resolved(&self) -> Option<&MemoryRegion> {
        self.last_resolved.as_ref()
    }

    /// Default absolute-address bounds for the range inputs, from the most
    /// recent successful resolution.
    pub fn default_bounds(&self) -> Option<(u32, u32)> {
        self.last_resolved
            .map(|region| (region.base_address(), region.end_address()))
    }
}
