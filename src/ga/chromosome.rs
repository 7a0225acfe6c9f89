//! Candidate chromosome: a stop ordering with its decoded plan and cost.
//!
//! The ordering encodes a VRPTW solution as a single permutation of stop IDs
//! (depot excluded). The [`RouteDecoder`] splits it into vehicle trips once,
//! at construction, and the [`CostEvaluator`] scores the result.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Copied;
use std::slice;

use rayon::prelude::*;
use tracing::debug;

use crate::error::DecodeError;
use crate::evaluation::{CostBreakdown, CostEvaluator, RouteDecoder};
use crate::models::{CostParams, DistanceProvider, Plan, StopCatalog};

/// Iterator over the stops of a [`Candidate`], in order.
pub type Stops<'a> = Copied<slice::Iter<'a, usize>>;

/// A decoded and scored stop ordering.
///
/// Candidates are immutable: the cost is always the fitness of the decoded
/// ordering and cannot be set independently. Comparison and equality look at
/// the cost only, so two different orderings with the same cost are equal.
/// Rank-based selection relies on this.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::{CostParams, Stop};
/// use u_route_decode::distance::DistanceMatrix;
/// use u_route_decode::ga::Candidate;
///
/// let stops = vec![
///     Stop::depot(0.0, 0.0, 1000.0),
///     Stop::new(1, 1.0, 0.0, 10, 500.0, 0.0),
///     Stop::new(2, 2.0, 0.0, 10, 500.0, 0.0),
///     Stop::new(3, 3.0, 0.0, 10, 500.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let params = CostParams::default().with_vehicle_capacity(30);
///
/// let good = Candidate::new(vec![1, 2, 3], &stops, &dm, &params).unwrap();
/// let bad = Candidate::new(vec![3, 1, 2], &stops, &dm, &params).unwrap();
/// assert!(good < bad);
/// assert_eq!(good.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Candidate {
    ordering: Vec<usize>,
    plan: Plan,
    breakdown: CostBreakdown,
}

impl Candidate {
    /// Copies `ordering`, decodes it and scores the plan.
    pub fn new<I, C, D>(
        ordering: I,
        catalog: &C,
        distances: &D,
        params: &CostParams,
    ) -> Result<Self, DecodeError>
    where
        I: IntoIterator<Item = usize>,
        C: StopCatalog + ?Sized,
        D: DistanceProvider + ?Sized,
    {
        let ordering: Vec<usize> = ordering.into_iter().collect();
        let plan = RouteDecoder::new(catalog, distances, params).decode(&ordering)?;
        let breakdown = CostEvaluator::new(params).breakdown(&plan);
        Ok(Self {
            ordering,
            plan,
            breakdown,
        })
    }

    /// Decodes many orderings in parallel against the same collaborators.
    ///
    /// Results keep the input order. Fails if any ordering fails to decode.
    pub fn batch<C, D>(
        orderings: &[Vec<usize>],
        catalog: &C,
        distances: &D,
        params: &CostParams,
    ) -> Result<Vec<Self>, DecodeError>
    where
        C: StopCatalog + ?Sized,
        D: DistanceProvider + ?Sized,
    {
        debug!(candidates = orderings.len(), "decoding batch");
        orderings
            .par_iter()
            .map(|o| Self::new(o.iter().copied(), catalog, distances, params))
            .collect()
    }

    /// Stop ordering this candidate was built from.
    pub fn ordering(&self) -> &[usize] {
        &self.ordering
    }

    /// Decoded plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Scalar fitness (lower is better).
    pub fn cost(&self) -> f64 {
        self.breakdown.total
    }

    /// Travel and fleet components of the cost.
    pub fn breakdown(&self) -> CostBreakdown {
        self.breakdown
    }

    /// Vehicles used by the plan.
    pub fn vehicles_count(&self) -> usize {
        self.plan.vehicles_count
    }

    /// Depot return events in the plan.
    pub fn depot_returns(&self) -> usize {
        self.plan.depot_returns
    }

    /// Largest elapsed time of any vehicle.
    pub fn working_hours(&self) -> f64 {
        self.plan.max_elapsed_time
    }

    /// Number of stops in the ordering.
    pub fn len(&self) -> usize {
        self.ordering.len()
    }

    /// Returns `true` for an empty ordering.
    pub fn is_empty(&self) -> bool {
        self.ordering.is_empty()
    }

    /// Iterates over the stops in order. Each call starts from the beginning.
    pub fn iter(&self) -> Stops<'_> {
        self.ordering.iter().copied()
    }

    /// Total order on cost, usable with `sort_by`.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.cost().total_cmp(&other.cost())
    }
}

impl<'a> IntoIterator for &'a Candidate {
    type Item = usize;
    type IntoIter = Stops<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cost() == other.cost()
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cost().partial_cmp(&other.cost())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}, cost={}, vehicles={}, depot returns={}, working hours={}",
            self.ordering,
            self.cost(),
            self.vehicles_count(),
            self.depot_returns(),
            self.working_hours()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Stop;

    fn setup() -> (Vec<Stop>, DistanceMatrix, CostParams) {
        let stops = vec![
            Stop::depot(0.0, 0.0, 1000.0),
            Stop::new(1, 0.0, 0.0, 2, 1000.0, 0.0),
            Stop::new(2, 0.0, 0.0, 3, 1000.0, 0.0),
            Stop::new(3, 0.0, 0.0, 4, 1000.0, 0.0),
        ];
        let dm = DistanceMatrix::uniform(4, 10.0);
        let params = CostParams::default()
            .with_vehicle_capacity(5)
            .with_vehicles_count_over_deport_hours_preference(100.0);
        (stops, dm, params)
    }

    #[test]
    fn test_candidate_scenario() {
        let (stops, dm, params) = setup();
        let c = Candidate::new(vec![1, 2, 3], &stops, &dm, &params).expect("decodes");
        assert_eq!(c.vehicles_count(), 2);
        assert_eq!(c.depot_returns(), 2);
        assert!((c.working_hours() - 30.0).abs() < 1e-10);
        let b = c.breakdown();
        assert!((b.travel_cost - 50.0).abs() < 1e-10);
        assert!((b.fleet_cost - 230.0).abs() < 1e-10);
        assert!((c.cost() - 280.0).abs() < 1e-10);
    }

    #[test]
    fn test_candidate_empty() {
        let (stops, dm, params) = setup();
        let c = Candidate::new(Vec::new(), &stops, &dm, &params).expect("decodes");
        assert!(c.is_empty());
        assert_eq!(c.vehicles_count(), 1);
        assert_eq!(c.depot_returns(), 1);
        assert_eq!(c.plan().total_distance, 0.0);
        assert_eq!(c.cost(), 100.0);
    }

    #[test]
    fn test_candidate_copies_ordering() {
        let (stops, dm, params) = setup();
        let mut source = vec![3, 1, 2];
        let c = Candidate::new(source.iter().copied(), &stops, &dm, &params).expect("decodes");
        source.swap(0, 2);
        assert_eq!(c.ordering(), &[3, 1, 2]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_candidate_iteration_restarts() {
        let (stops, dm, params) = setup();
        let c = Candidate::new(vec![2, 3, 1], &stops, &dm, &params).expect("decodes");
        let first: Vec<usize> = c.iter().collect();
        let second: Vec<usize> = (&c).into_iter().collect();
        assert_eq!(first, vec![2, 3, 1]);
        assert_eq!(first, second);
        let mut n = 0;
        for stop in &c {
            assert!(stop > 0);
            n += 1;
        }
        assert_eq!(n, 3);
    }

    #[test]
    fn test_candidate_ordering_by_cost() {
        let (stops, dm, params) = setup();
        // 1 and 3 never share a vehicle: [1, 3, 2] needs three.
        let two = Candidate::new(vec![1, 2, 3], &stops, &dm, &params).expect("decodes");
        let three = Candidate::new(vec![1, 3, 2], &stops, &dm, &params).expect("decodes");
        assert_eq!(three.vehicles_count(), 3);
        assert!(two.cost() < three.cost());
        assert!(two < three);
        assert!(two != three);
        assert_eq!(two.cmp_cost(&three), Ordering::Less);
    }

    #[test]
    fn test_candidate_equal_cost_different_orderings() {
        let (stops, dm, params) = setup();
        let a = Candidate::new(vec![1, 2, 3], &stops, &dm, &params).expect("decodes");
        let b = Candidate::new(vec![2, 1, 3], &stops, &dm, &params).expect("decodes");
        assert_ne!(a.ordering(), b.ordering());
        assert_eq!(a, b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn test_candidate_display() {
        let (stops, dm, params) = setup();
        let c = Candidate::new(vec![1, 2, 3], &stops, &dm, &params).expect("decodes");
        assert_eq!(
            c.to_string(),
            "[1, 2, 3], cost=280, vehicles=2, depot returns=2, working hours=30"
        );
    }

    #[test]
    fn test_candidate_error_propagates() {
        let (stops, dm, params) = setup();
        let err = Candidate::new(vec![1, 8], &stops, &dm, &params).unwrap_err();
        assert_eq!(err, DecodeError::UnknownStop(8));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let (stops, dm, params) = setup();
        let orderings = vec![vec![1, 2, 3], vec![3, 2, 1], vec![2, 3, 1], vec![]];
        let batch = Candidate::batch(&orderings, &stops, &dm, &params).expect("decodes");
        assert_eq!(batch.len(), orderings.len());
        for (c, o) in batch.iter().zip(&orderings) {
            let single = Candidate::new(o.clone(), &stops, &dm, &params).expect("decodes");
            assert_eq!(c.ordering(), o.as_slice());
            assert_eq!(c.plan(), single.plan());
            assert_eq!(c.cost().to_bits(), single.cost().to_bits());
        }
    }

    #[test]
    fn test_batch_fails_on_bad_ordering() {
        let (stops, dm, params) = setup();
        let orderings = vec![vec![1, 2, 3], vec![4]];
        assert!(Candidate::batch(&orderings, &stops, &dm, &params).is_err());
    }

    #[test]
    fn test_sort_population() {
        let (stops, dm, params) = setup();
        let mut pop = Candidate::batch(
            &[vec![3, 2, 1], vec![1, 2, 3], vec![2, 3, 1]],
            &stops,
            &dm,
            &params,
        )
        .expect("decodes");
        pop.sort_by(Candidate::cmp_cost);
        for w in pop.windows(2) {
            assert!(w[0].cost() <= w[1].cost());
        }
    }
}
