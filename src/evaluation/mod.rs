//! Decoding and scoring of stop orderings.
//!
//! - [`RouteDecoder`] — Greedy single-pass split into vehicle trips, O(n)
//! - [`CostEvaluator`] — Travel cost plus weighted fleet size and working hours
//! - [`validate_ordering`] — Optional permutation check for callers

mod cost;
mod decoder;
mod validation;

pub use cost::{CostBreakdown, CostEvaluator};
pub use decoder::{RouteDecoder, DEPOT};
pub use validation::validate_ordering;
