// Mon Aug 24 2026 - Alex

use thiserror::Error;

/// Failures surfaced by the search engine. None of these change engine
/// state: the candidate set is whatever it was before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("memory region is invalid")]
    RegionUnavailable,
    #[error("game is not currently running")]
    SessionNotRunnable,
    #[error("no search has been initialized")]
    NotInitialized,
    #[error("incorrect search value: {0}")]
    Parse(#[from] ParseError),
}

/// A user-entered search literal that could not be encoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("`{0}` is not a valid base-{1} integer")]
    InvalidInteger(String, u32),
    #[error("`{0}` is not a valid float")]
    InvalidFloat(String),
    #[error("{0:#x} does not fit in {1} byte(s)")]
    OutOfRange(u32, usize),
    #[error("search value is empty")]
    Empty,
}
