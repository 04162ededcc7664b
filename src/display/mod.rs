// Tue Aug 25 2026 - Alex

pub mod row;
pub mod sampler;

pub use row::{DisplayRow, BAD_VALUE_SENTINEL, UNREADABLE_SENTINEL};
pub use sampler::{DisplaySampler, SampleOutput, DISPLAY_CAP};
