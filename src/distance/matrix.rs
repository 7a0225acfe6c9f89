//! Dense distance matrix.

use crate::models::{DistanceProvider, Stop};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built either from stop coordinates (Euclidean) or from explicit data, e.g.
/// road distances computed elsewhere.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::Stop;
/// use u_route_decode::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::depot(0.0, 0.0, 100.0),
///     Stop::new(1, 3.0, 4.0, 10, 50.0, 5.0),
///     Stop::new(2, 6.0, 8.0, 20, 50.0, 5.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from stop coordinates.
    ///
    /// Stops must be indexed by ID.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a matrix where every off-diagonal entry is `distance`.
    pub fn uniform(size: usize, distance: f64) -> Self {
        let mut dm = Self::new(size);
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    dm.set(i, j, distance);
                }
            }
        }
        dm
    }

    /// Returns the distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or `None` if out of bounds.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.get(from, to))
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl DistanceProvider for DistanceMatrix {
    fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.try_get(from, to).filter(|d| d.is_finite() && *d >= 0.0)
    }
}
