//! # u-route-decode
//!
//! Greedy decoding and scoring of VRPTW chromosomes. A chromosome is a
//! permutation of delivery stops; decoding splits it into vehicle trips that
//! respect load capacity, stop due times and depot closing time, and scoring
//! reduces the plan to one fitness value for a genetic search.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, CostParams, Plan, collaborator traits)
//! - [`distance`] — Distance matrix
//! - [`evaluation`] — Route decoder and cost evaluator
//! - [`ga`] — Candidate chromosome with cached plan and cost
//! - [`error`] — Decode errors

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod models;
