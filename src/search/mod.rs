// Mon Aug 24 2026 - Alex

pub mod candidate;
pub mod engine;
pub mod error;
pub mod predicate;
pub mod value;
pub mod width;

pub use candidate::{Candidate, MAX_VALUE_WIDTH};
pub use engine::{SearchEngine, SearchSession};
pub use error::{EngineError, ParseError};
pub use predicate::{ComparisonMask, ComparisonPredicate};
pub use value::{decode_f32, decode_value, encode_search_value, NumericBase};
pub use width::ElementWidth;
