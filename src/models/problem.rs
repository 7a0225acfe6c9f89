//! Read-only collaborators of the decoder.

use super::Stop;

/// Lookup from stop ID to stop attributes.
///
/// Must answer for the depot (0) and every stop of any ordering decoded
/// against it. A missing entry is reported by the decoder as
/// [`DecodeError::UnknownStop`](crate::error::DecodeError::UnknownStop).
///
/// # Examples
///
/// ```
/// use u_route_decode::models::{Stop, StopCatalog};
///
/// let stops = vec![Stop::depot(0.0, 0.0, 100.0), Stop::new(1, 1.0, 1.0, 3, 50.0, 0.0)];
/// assert_eq!(stops.stop(1).map(|s| s.demand()), Some(3));
/// assert!(stops.stop(2).is_none());
/// ```
pub trait StopCatalog: Send + Sync {
    /// Returns the stop with the given ID.
    fn stop(&self, id: usize) -> Option<&Stop>;

    /// Number of stops including the depot.
    fn num_stops(&self) -> usize;
}

/// Travel distance between two stops.
///
/// `None`, or a negative or non-finite distance, is reported by the decoder as
/// [`DecodeError::MissingDistance`](crate::error::DecodeError::MissingDistance).
pub trait DistanceProvider: Send + Sync {
    /// Distance from `from` to `to`.
    fn distance(&self, from: usize, to: usize) -> Option<f64>;
}

/// Stops indexed by ID: `stops[i].id() == i`.
impl StopCatalog for [Stop] {
    fn stop(&self, id: usize) -> Option<&Stop> {
        self.get(id)
    }

    fn num_stops(&self) -> usize {
        self.len()
    }
}

impl StopCatalog for Vec<Stop> {
    fn stop(&self, id: usize) -> Option<&Stop> {
        self.as_slice().stop(id)
    }

    fn num_stops(&self) -> usize {
        self.len()
    }
}

impl<T: StopCatalog + ?Sized> StopCatalog for &T {
    fn stop(&self, id: usize) -> Option<&Stop> {
        (**self).stop(id)
    }

    fn num_stops(&self) -> usize {
        (**self).num_stops()
    }
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        (**self).distance(from, to)
    }
}
