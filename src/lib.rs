// Mon Aug 24 2026 - Alex

pub mod config;
pub mod display;
pub mod memory;
pub mod search;

pub use config::SearchConfig;
pub use display::{DisplayRow, DisplaySampler, SampleOutput, DISPLAY_CAP};
pub use memory::{
    DumpMemory, EmulatedMemory, MemoryRegion, MemorySubsystem, RegionKind, RegionSelector,
};
pub use search::{
    encode_search_value, Candidate, ComparisonMask, ComparisonPredicate, ElementWidth, EngineError,
    NumericBase, ParseError, SearchEngine,
};
