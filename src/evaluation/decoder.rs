//! Greedy decoder turning a stop ordering into a multi-vehicle plan.
//!
//! # Algorithm
//!
//! The ordering is closed with the depot at both ends and walked pair by pair.
//! For each arc `(source, dest)`:
//!
//! 1. If `dest` does not fit in the active vehicle, the vehicle drives back to
//!    the depot and `dest` is served from the depot, by a new vehicle (or, with
//!    [`ReloadPolicy::ReuseVehicle`], by the same vehicle when it still has
//!    time).
//! 2. Otherwise the arc is taken if the vehicle reaches `dest` by its due time
//!    and can still be back at the depot before closing after serving it.
//! 3. If not, the vehicle drives back to the depot and a new vehicle serves
//!    `dest` straight from the depot, without re-checking the leg.
//!
//! Elapsed time counts travel only; service time enters the depot closing
//! check but is not added to the clock.
//!
//! # Complexity
//!
//! O(n): one pass with constant-time lookups per arc.

use std::iter;

use tracing::{debug, instrument, trace};

use crate::error::DecodeError;
use crate::models::{
    CostParams, DistanceProvider, Plan, ReloadPolicy, Stop, StopCatalog, Trip, Visit,
};

/// Stop ID of the depot.
pub const DEPOT: usize = 0;

/// Decodes stop orderings against shared, read-only problem data.
///
/// The decoder only borrows its collaborators; all running state lives inside
/// a single [`decode`](Self::decode) call, so one decoder can serve many
/// threads.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::{CostParams, Stop};
/// use u_route_decode::distance::DistanceMatrix;
/// use u_route_decode::evaluation::RouteDecoder;
///
/// let stops = vec![
///     Stop::depot(0.0, 0.0, 1000.0),
///     Stop::new(1, 0.0, 10.0, 2, 500.0, 0.0),
///     Stop::new(2, 10.0, 10.0, 3, 500.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let params = CostParams::default().with_vehicle_capacity(10);
///
/// let decoder = RouteDecoder::new(&stops, &dm, &params);
/// let plan = decoder.decode(&[1, 2]).unwrap();
/// assert_eq!(plan.vehicles_count, 1);
/// assert_eq!(plan.trips[0].stop_ids(), vec![1, 2]);
/// ```
pub struct RouteDecoder<'a, C: ?Sized, D: ?Sized> {
    catalog: &'a C,
    distances: &'a D,
    params: &'a CostParams,
}

impl<'a, C, D> RouteDecoder<'a, C, D>
where
    C: StopCatalog + ?Sized,
    D: DistanceProvider + ?Sized,
{
    /// Creates a decoder over the given collaborators.
    pub fn new(catalog: &'a C, distances: &'a D, params: &'a CostParams) -> Self {
        Self {
            catalog,
            distances,
            params,
        }
    }

    /// Cost parameters used by this decoder.
    pub fn params(&self) -> &'a CostParams {
        self.params
    }

    /// Decodes `ordering` (stop IDs, depot excluded) into a plan.
    ///
    /// Fails only on configuration errors: invalid parameters, a stop missing
    /// from the catalog, or a missing distance. The ordering is assumed to be
    /// a permutation of catalog stops; see
    /// [`validate_ordering`](super::validate_ordering).
    #[instrument(level = "trace", skip_all, fields(stops = ordering.len()))]
    pub fn decode(&self, ordering: &[usize]) -> Result<Plan, DecodeError> {
        self.params.validate()?;
        let depot = self.stop(DEPOT)?;
        let mut state = DecodeState::new(depot.due_time());

        let mut source = DEPOT;
        for dest in ordering.iter().copied().chain(iter::once(DEPOT)) {
            self.step(&mut state, source, dest)?;
            source = dest;
        }

        let plan = state.finish();
        debug!(
            vehicles = plan.vehicles_count,
            depot_returns = plan.depot_returns,
            distance = plan.total_distance,
            working_hours = plan.max_elapsed_time,
            "decoded ordering"
        );
        Ok(plan)
    }

    fn step(&self, state: &mut DecodeState, source: usize, dest: usize) -> Result<(), DecodeError> {
        let dest_stop = self.stop(dest)?;

        if state.fits(dest_stop.demand(), self.params.vehicle_capacity) {
            let distance = self.distance(source, dest)?;
            if self.check_time(state, state.elapsed, distance, dest, dest_stop)? {
                self.advance(state, dest, dest_stop, distance, false, true);
            } else {
                // Too late for the active vehicle.
                self.return_to_depot(state, source)?;
                state.dispatch();
                let distance = self.distance(DEPOT, dest)?;
                let feasible = self.check_time(state, 0.0, distance, dest, dest_stop)?;
                self.advance(state, dest, dest_stop, distance, true, feasible);
            }
            return Ok(());
        }

        // Out of capacity.
        self.return_to_depot(state, source)?;
        let distance = self.distance(DEPOT, dest)?;
        let reuse = self.params.reload == ReloadPolicy::ReuseVehicle
            && self.check_time(state, state.elapsed, distance, dest, dest_stop)?;
        if reuse {
            self.advance(state, dest, dest_stop, distance, false, true);
        } else {
            state.dispatch();
            let feasible = self.check_time(state, 0.0, distance, dest, dest_stop)?;
            self.advance(state, dest, dest_stop, distance, true, feasible);
        }
        Ok(())
    }

    /// Both time conditions for driving `distance` to `dest` at `elapsed`.
    fn check_time(
        &self,
        state: &DecodeState,
        elapsed: f64,
        distance: f64,
        dest: usize,
        dest_stop: &Stop,
    ) -> Result<bool, DecodeError> {
        let arrival = elapsed + self.params.travel_time(distance);
        if arrival > dest_stop.due_time() {
            return Ok(false);
        }
        let back = self.params.travel_time(self.distance(dest, DEPOT)?);
        Ok(arrival + dest_stop.service_time() + back <= state.depot_due)
    }

    fn return_to_depot(&self, state: &mut DecodeState, source: usize) -> Result<(), DecodeError> {
        let distance = self.distance(source, DEPOT)?;
        state.drive(distance, self.params.travel_time(distance));
        state.close_trip();
        Ok(())
    }

    fn advance(
        &self,
        state: &mut DecodeState,
        dest: usize,
        dest_stop: &Stop,
        distance: f64,
        dispatched: bool,
        feasible: bool,
    ) {
        state.drive(distance, self.params.travel_time(distance));
        if dest == DEPOT {
            state.close_trip();
        } else {
            state.serve(dest, dest_stop.demand(), dispatched, feasible);
        }
    }

    fn stop(&self, id: usize) -> Result<&'a Stop, DecodeError> {
        self.catalog.stop(id).ok_or(DecodeError::UnknownStop(id))
    }

    fn distance(&self, from: usize, to: usize) -> Result<f64, DecodeError> {
        self.distances
            .distance(from, to)
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or(DecodeError::MissingDistance { from, to })
    }
}

/// Running totals of one decode pass.
struct DecodeState {
    plan: Plan,
    trip: Trip,
    elapsed: f64,
    load: u32,
    depot_due: f64,
}

impl DecodeState {
    fn new(depot_due: f64) -> Self {
        Self {
            plan: Plan::new(),
            trip: Trip::new(0, 0.0),
            elapsed: 0.0,
            load: 0,
            depot_due,
        }
    }

    fn fits(&self, demand: u32, capacity: u32) -> bool {
        self.load.saturating_add(demand) <= capacity
    }

    fn drive(&mut self, distance: f64, travel_time: f64) {
        self.plan.total_distance += distance;
        self.trip.add_distance(distance);
        self.elapsed += travel_time;
        self.plan.max_elapsed_time = self.plan.max_elapsed_time.max(self.elapsed);
    }

    fn serve(&mut self, stop_id: usize, demand: u32, dispatched: bool, feasible: bool) {
        self.load = self.load.saturating_add(demand);
        self.trip.push_visit(Visit {
            stop_id,
            arrival_time: self.elapsed,
            load_after: self.load,
            dispatched,
            feasible,
        });
    }

    fn close_trip(&mut self) {
        self.plan.depot_returns += 1;
        self.trip.set_return_time(self.elapsed);
        let next = Trip::new(self.trip.vehicle(), self.elapsed);
        let done = std::mem::replace(&mut self.trip, next);
        trace!(
            vehicle = done.vehicle(),
            stops = done.len(),
            load = done.load(),
            elapsed = self.elapsed,
            "depot return"
        );
        self.plan.trips.push(done);
        self.load = 0;
    }

    fn dispatch(&mut self) {
        self.plan.vehicles_count += 1;
        self.elapsed = 0.0;
        self.load = 0;
        self.trip.reassign(self.plan.vehicles_count - 1, 0.0);
        trace!(vehicle = self.plan.vehicles_count - 1, "vehicle dispatched");
    }

    fn finish(mut self) -> Plan {
        self.plan.elapsed_time = self.elapsed;
        self.plan.current_load = self.load;
        self.plan
    }
}
