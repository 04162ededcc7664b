// Mon Aug 24 2026 - Alex

pub mod dump;
pub mod emulated;
pub mod kind;
pub mod region;
pub mod selector;
pub mod subsystem;

pub use dump::{DumpError, DumpMemory};
pub use emulated::EmulatedMemory;
pub use kind::RegionKind;
pub use region::MemoryRegion;
pub use selector::RegionSelector;
pub use subsystem::MemorySubsystem;
