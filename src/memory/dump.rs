// Mon Aug 24 2026 - Alex

use crate::memory::{MemoryRegion, MemorySubsystem, RegionKind};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no snapshot files given")]
    NoSnapshots,
    #[error("snapshot {path}: {found} bytes, expected {expected}")]
    SizeMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug)]
enum SnapshotData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl SnapshotData {
    fn bytes(&self) -> &[u8] {
        match self {
            SnapshotData::Mapped(map) => map,
            SnapshotData::Owned(bytes) => bytes,
        }
    }
}

/// Memory subsystem backed by a series of raw dump files of the same region,
/// oldest first. The whole series presents as the main RAM region; `advance`
/// steps to the next snapshot, standing in for the running game mutating
/// memory between refinement passes. Snapshots are immutable, so the
/// synchronized hand-off is a plain call.
#[derive(Debug)]
pub struct DumpMemory {
    snapshots: Vec<SnapshotData>,
    current: AtomicUsize,
    base_address: u32,
}

impl DumpMemory {
    /// Maps each dump file read-only. All snapshots must be the same size.
    pub fn open<P: AsRef<Path>>(paths: &[P], base_address: u32) -> Result<Self, DumpError> {
        let mut snapshots = Vec::with_capacity(paths.len());
        let mut expected = None;

        for path in paths {
            let file = File::open(path.as_ref())?;
            let map = unsafe { Mmap::map(&file)? };
            match expected {
                None => expected = Some(map.len()),
                Some(expected) if expected != map.len() => {
                    return Err(DumpError::SizeMismatch {
                        path: path.as_ref().to_path_buf(),
                        expected,
                        found: map.len(),
                    });
                }
                Some(_) => {}
            }
            snapshots.push(SnapshotData::Mapped(map));
        }

        Self::from_snapshots(snapshots, base_address)
    }

    /// In-memory constructor, mostly for tests.
    pub fn from_buffers(buffers: Vec<Vec<u8>>, base_address: u32) -> Result<Self, DumpError> {
        let mut expected = None;
        for buffer in &buffers {
            match expected {
                None => expected = Some(buffer.len()),
                Some(expected) if expected != buffer.len() => {
                    return Err(DumpError::SizeMismatch {
                        path: PathBuf::new(),
                        expected,
                        found: buffer.len(),
                    });
                }
                Some(_) => {}
            }
        }
        Self::from_snapshots(buffers.into_iter().map(SnapshotData::Owned).collect(), base_address)
    }

    fn from_snapshots(snapshots: Vec<SnapshotData>, base_address: u32) -> Result<Self, DumpError> {
        if snapshots.is_empty() {
            return Err(DumpError::NoSnapshots);
        }
        Ok(Self {
            snapshots,
            current: AtomicUsize::new(0),
            base_address,
        })
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshot_index(&self) -> usize {
        self.current.load(Ordering::SeqCst)
    }

    /// Steps to the next snapshot. Returns false when already on the last.
    pub fn advance(&self) -> bool {
        let current = self.current.load(Ordering::SeqCst);
        if current + 1 >= self.snapshots.len() {
            return false;
        }
        self.current.store(current + 1, Ordering::SeqCst);
        true
    }

    fn current_bytes(&self) -> &[u8] {
        self.snapshots[self.snapshot_index()].bytes()
    }

    fn offset_of(&self, address: u32) -> Option<usize> {
        let addr = u64::from(address);
        let base = u64::from(self.base_address);
        if addr >= base && addr < base + self.current_bytes().len() as u64 {
            Some((addr - base) as usize)
        } else {
            None
        }
    }
}

impl MemorySubsystem for DumpMemory {
    fn resolve_region(&self, kind: RegionKind) -> Option<MemoryRegion> {
        match kind {
            RegionKind::Main => Some(MemoryRegion::new(
                RegionKind::Main,
                self.base_address,
                self.current_bytes().len() as u32,
            )),
            _ => None,
        }
    }

    fn is_session_runnable(&self) -> bool {
        true
    }

    fn is_readable_address(&self, address: u32) -> bool {
        self.offset_of(address).is_some()
    }

    fn read_u8(&self, address: u32) -> u8 {
        self.offset_of(address)
            .map(|offset| self.current_bytes()[offset])
            .unwrap_or(0)
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
        work();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_series() {
        let dump = DumpMemory::from_buffers(
            vec![vec![0, 0, 0, 5], vec![0, 0, 0, 9]],
            0x8000_0000,
        )
        .unwrap();

        assert_eq!(dump.snapshot_count(), 2);
        assert_eq!(dump.read_u32(0x8000_0000), 5);
        assert!(dump.advance());
        assert_eq!(dump.read_u32(0x8000_0000), 9);
        assert!(!dump.advance());
    }

    #[test]
    fn test_only_main_region_resolves() {
        let dump = DumpMemory::from_buffers(vec![vec![0u8; 16]], 0x8000_0000).unwrap();

        let region = dump.resolve_region(RegionKind::Main).unwrap();
        assert_eq!(region.size(), 16);
        assert_eq!(region.base_address(), 0x8000_0000);
        assert!(dump.resolve_region(RegionKind::Expansion).is_none());
    }

    #[test]
    fn test_mismatched_snapshot_sizes_rejected() {
        let err = DumpMemory::from_buffers(vec![vec![0u8; 16], vec![0u8; 8]], 0).unwrap_err();
        assert!(matches!(err, DumpError::SizeMismatch { expected: 16, found: 8, .. }));
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            DumpMemory::from_buffers(Vec::new(), 0),
            Err(DumpError::NoSnapshots)
        ));
    }
}
