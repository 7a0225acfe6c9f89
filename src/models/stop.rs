//! Delivery stop type.

use serde::{Deserialize, Serialize};

/// A delivery stop (or the depot) in a routing instance.
///
/// Stop 0 is the depot. Its `due_time` is the closing time of the depot: every
/// vehicle must be back by then. Coordinates are only used to build a Euclidean
/// [`DistanceMatrix`](crate::distance::DistanceMatrix).
///
/// # Examples
///
/// ```
/// use u_route_decode::models::Stop;
///
/// let depot = Stop::depot(35.0, 35.0, 230.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
/// assert_eq!(depot.due_time(), 230.0);
///
/// let s = Stop::new(1, 41.0, 49.0, 10, 200.0, 10.0);
/// assert_eq!(s.id(), 1);
/// assert!(!s.is_depot());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: usize,
    x: f64,
    y: f64,
    demand: u32,
    due_time: f64,
    service_time: f64,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: usize, x: f64, y: f64, demand: u32, due_time: f64, service_time: f64) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            due_time,
            service_time,
        }
    }

    /// Creates the depot (id=0, no demand, no service) closing at `closing_time`.
    pub fn depot(x: f64, y: f64, closing_time: f64) -> Self {
        Self::new(0, x, y, 0, closing_time, 0.0)
    }

    /// Stop ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.id == 0
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Quantity delivered at this stop.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Latest arrival time, measured from vehicle dispatch.
    pub fn due_time(&self) -> f64 {
        self.due_time
    }

    /// Dwell duration once arrived.
    pub fn service_time(&self) -> f64 {
        self.service_time
    }

    /// Euclidean distance to another stop.
    pub fn distance_to(&self, other: &Stop) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
