//! Error type for decoding and scoring.

use thiserror::Error;

/// Errors surfaced while decoding an ordering.
///
/// All of these are configuration or caller errors. A leg that cannot meet
/// its due time is never an error: it is accepted and shows up in the cost.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A cost parameter is outside its valid range.
    #[error("invalid cost parameter `{field}`: {value}")]
    InvalidParams {
        /// Parameter name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The stop catalog has no entry for this id.
    #[error("stop {0} is not in the catalog")]
    UnknownStop(usize),

    /// The distance provider has no usable distance for this pair.
    #[error("no distance from {from} to {to}")]
    MissingDistance {
        /// Origin stop id.
        from: usize,
        /// Destination stop id.
        to: usize,
    },

    /// The ordering is not a permutation of catalog stops.
    #[error("malformed ordering: {0}")]
    MalformedOrdering(String),
}
