//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `#[from]` or keep it as one wrapped variant.  Construction
//! errors are fail-fast: a malformed parameter aborts setup before any
//! simulation state exists.

use thiserror::Error;

/// Errors raised while validating simulation parameters.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("road length must be at least 1")]
    EmptyRoad,

    #[error("requested {requested} vehicles but the road has only {cells} cells")]
    Capacity { requested: u32, cells: u32 },

    #[error("cautious vehicle count {cautious} exceeds total vehicle count {total}")]
    CautiousCount { cautious: u32, total: u32 },

    #[error("slowdown probability {0} is outside [0, 1]")]
    Probability(f64),
}

/// Shorthand result type for `nasch-core`.
pub type CoreResult<T> = Result<T, CoreError>;
