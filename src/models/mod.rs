//! Domain model types for greedy route decoding.
//!
//! Stops with demands and due times, the immutable cost parameters, the
//! decoded plan (trips and visits), and the read-only collaborator traits the
//! decoder is given.

mod params;
mod plan;
mod problem;
mod stop;

pub use params::{CostParams, ReloadPolicy};
pub use plan::{Plan, Trip, Visit};
pub use problem::{DistanceProvider, StopCatalog};
pub use stop::Stop;
