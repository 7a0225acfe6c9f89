//! Decoded plan types: visits, trips and the plan aggregates.

/// A single stop reached by a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Stop ID being visited.
    pub stop_id: usize,
    /// Vehicle elapsed time on arrival.
    pub arrival_time: f64,
    /// Vehicle load after delivering here.
    pub load_after: u32,
    /// Reached as the first leg of a freshly dispatched vehicle.
    pub dispatched: bool,
    /// The leg met both the stop's due time and the depot closing time.
    pub feasible: bool,
}

/// One depot-to-depot excursion of a vehicle.
///
/// A vehicle may run several trips when it reloads at the depot. Visits do not
/// include the depot itself.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::{Trip, Visit};
///
/// let mut trip = Trip::new(0, 0.0);
/// trip.push_visit(Visit {
///     stop_id: 1,
///     arrival_time: 10.0,
///     load_after: 4,
///     dispatched: false,
///     feasible: true,
/// });
/// assert_eq!(trip.stop_ids(), vec![1]);
/// assert_eq!(trip.load(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    vehicle: usize,
    visits: Vec<Visit>,
    distance: f64,
    load: u32,
    departure_time: f64,
    return_time: f64,
}

impl Trip {
    /// Creates an empty trip for `vehicle` leaving the depot at `departure_time`.
    pub fn new(vehicle: usize, departure_time: f64) -> Self {
        Self {
            vehicle,
            visits: Vec::new(),
            distance: 0.0,
            load: 0,
            departure_time,
            return_time: departure_time,
        }
    }

    /// Appends a visit.
    pub fn push_visit(&mut self, visit: Visit) {
        self.load = visit.load_after;
        self.visits.push(visit);
    }

    /// Zero-based index of the vehicle running this trip.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Visits in order.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Number of stops visited.
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if the trip visited no stop.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Visited stop IDs in order.
    pub fn stop_ids(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.stop_id).collect()
    }

    /// Distance driven on this trip, including the return leg.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Load carried out of the depot.
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Vehicle elapsed time when leaving the depot.
    pub fn departure_time(&self) -> f64 {
        self.departure_time
    }

    /// Vehicle elapsed time when back at the depot.
    pub fn return_time(&self) -> f64 {
        self.return_time
    }

    pub(crate) fn add_distance(&mut self, distance: f64) {
        self.distance += distance;
    }

    pub(crate) fn set_return_time(&mut self, time: f64) {
        self.return_time = time;
    }

    pub(crate) fn reassign(&mut self, vehicle: usize, departure_time: f64) {
        self.vehicle = vehicle;
        self.departure_time = departure_time;
        self.return_time = departure_time;
    }
}

/// The decoded multi-vehicle plan of one ordering.
///
/// Holds the running totals of the decode pass as they stood when it finished,
/// plus the trips in dispatch order. There is exactly one trip per depot
/// return.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Vehicles dispatched.
    pub vehicles_count: usize,
    /// Depot return events.
    pub depot_returns: usize,
    /// Distance driven by all vehicles.
    pub total_distance: f64,
    /// Elapsed time of the last active vehicle.
    pub elapsed_time: f64,
    /// Load of the last active vehicle.
    pub current_load: u32,
    /// Largest elapsed time of any vehicle (depot working hours).
    pub max_elapsed_time: f64,
    /// Trips in the order they were driven.
    pub trips: Vec<Trip>,
}

impl Plan {
    /// Plan before any vehicle moved: one vehicle dispatched, nothing driven.
    pub fn new() -> Self {
        Self {
            vehicles_count: 1,
            depot_returns: 0,
            total_distance: 0.0,
            elapsed_time: 0.0,
            current_load: 0,
            max_elapsed_time: 0.0,
            trips: Vec::new(),
        }
    }

    /// Number of stops served across all trips.
    pub fn num_served(&self) -> usize {
        self.trips.iter().map(|t| t.len()).sum()
    }

    /// Trips driven by vehicle `vehicle`.
    pub fn trips_of(&self, vehicle: usize) -> impl Iterator<Item = &Trip> {
        self.trips.iter().filter(move |t| t.vehicle() == vehicle)
    }

    /// Visits in the order they happened.
    pub fn visits(&self) -> impl Iterator<Item = &Visit> {
        self.trips.iter().flat_map(|t| t.visits())
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit(stop_id: usize, load_after: u32) -> Visit {
        Visit {
            stop_id,
            arrival_time: 0.0,
            load_after,
            dispatched: false,
            feasible: true,
        }
    }

    #[test]
    fn test_trip_empty() {
        let t = Trip::new(2, 15.0);
        assert!(t.is_empty());
        assert_eq!(t.vehicle(), 2);
        assert_eq!(t.load(), 0);
        assert_eq!(t.distance(), 0.0);
        assert_eq!(t.departure_time(), 15.0);
        assert_eq!(t.return_time(), 15.0);
    }

    #[test]
    fn test_trip_push_visit() {
        let mut t = Trip::new(0, 0.0);
        t.push_visit(visit(5, 20));
        t.push_visit(visit(3, 35));
        t.add_distance(12.0);
        t.set_return_time(40.0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.stop_ids(), vec![5, 3]);
        assert_eq!(t.load(), 35);
        assert_eq!(t.distance(), 12.0);
        assert_eq!(t.return_time(), 40.0);
    }

    #[test]
    fn test_trip_reassign() {
        let mut t = Trip::new(0, 30.0);
        t.reassign(1, 0.0);
        assert_eq!(t.vehicle(), 1);
        assert_eq!(t.departure_time(), 0.0);
    }

    #[test]
    fn test_plan_new() {
        let p = Plan::default();
        assert_eq!(p.vehicles_count, 1);
        assert_eq!(p.depot_returns, 0);
        assert_eq!(p.num_served(), 0);
    }

    #[test]
    fn test_plan_queries() {
        let mut t0 = Trip::new(0, 0.0);
        t0.push_visit(visit(1, 2));
        let mut t1 = Trip::new(0, 20.0);
        t1.push_visit(visit(2, 3));
        let mut t2 = Trip::new(1, 0.0);
        t2.push_visit(visit(3, 4));
        t2.push_visit(visit(4, 6));

        let mut p = Plan::new();
        p.trips = vec![t0, t1, t2];
        assert_eq!(p.num_served(), 4);
        assert_eq!(p.trips_of(0).count(), 2);
        assert_eq!(p.trips_of(1).count(), 1);
        let ids: Vec<usize> = p.visits().map(|v| v.stop_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
