//! Distance matrices.
//!
//! Provides a dense distance matrix implementing
//! [`DistanceProvider`](crate::models::DistanceProvider).

mod matrix;

pub use matrix::DistanceMatrix;
