//! Genetic algorithm components for vehicle routing.
//!
//! - [`Candidate`] — Stop permutation chromosome, decoded and scored once
//!
//! Generation, crossover, mutation and selection belong to the surrounding
//! search; a candidate only exposes its cost for ranking and its stops for
//! the operators.

mod chromosome;

pub use chromosome::{Candidate, Stops};
