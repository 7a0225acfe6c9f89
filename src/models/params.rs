//! Immutable cost and fleet parameters.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// What a vehicle does after returning to the depot because it ran out of
/// capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPolicy {
    /// Always dispatch a new vehicle for the next stop.
    #[default]
    NewVehicle,
    /// Reload and keep driving with the same vehicle (and its elapsed time)
    /// if the next stop is still reachable in time from the depot.
    ReuseVehicle,
}

/// Vehicle and cost parameters shared by every decode.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::CostParams;
///
/// let params = CostParams::default()
///     .with_vehicle_speed_avg(2.0)
///     .with_vehicle_capacity(200);
/// assert_eq!(params.travel_time(10.0), 5.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostParams {
    /// Average vehicle speed (distance per time unit).
    pub vehicle_speed_avg: f64,
    /// Cost per unit of distance.
    pub vehicle_cost_per_dist: f64,
    /// Load capacity of every vehicle.
    pub vehicle_capacity: u32,
    /// Weight of one vehicle relative to one unit of depot working hours.
    pub vehicles_count_over_deport_hours_preference: f64,
    /// Behavior after a capacity-forced depot return.
    pub reload: ReloadPolicy,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            vehicle_speed_avg: 1.0,
            vehicle_cost_per_dist: 1.0,
            vehicle_capacity: 100,
            vehicles_count_over_deport_hours_preference: 0.0,
            reload: ReloadPolicy::NewVehicle,
        }
    }
}

impl CostParams {
    /// Sets the average speed.
    pub fn with_vehicle_speed_avg(mut self, speed: f64) -> Self {
        self.vehicle_speed_avg = speed;
        self
    }

    /// Sets the cost per unit distance.
    pub fn with_vehicle_cost_per_dist(mut self, cost: f64) -> Self {
        self.vehicle_cost_per_dist = cost;
        self
    }

    /// Sets the vehicle capacity.
    pub fn with_vehicle_capacity(mut self, capacity: u32) -> Self {
        self.vehicle_capacity = capacity;
        self
    }

    /// Sets the fleet size vs. working hours weighting.
    pub fn with_vehicles_count_over_deport_hours_preference(mut self, weight: f64) -> Self {
        self.vehicles_count_over_deport_hours_preference = weight;
        self
    }

    /// Sets the reload policy.
    pub fn with_reload(mut self, reload: ReloadPolicy) -> Self {
        self.reload = reload;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if !self.vehicle_speed_avg.is_finite() || self.vehicle_speed_avg <= 0.0 {
            return Err(DecodeError::InvalidParams {
                field: "vehicle_speed_avg",
                value: self.vehicle_speed_avg,
            });
        }
        if !self.vehicle_cost_per_dist.is_finite() || self.vehicle_cost_per_dist < 0.0 {
            return Err(DecodeError::InvalidParams {
                field: "vehicle_cost_per_dist",
                value: self.vehicle_cost_per_dist,
            });
        }
        if self.vehicle_capacity == 0 {
            return Err(DecodeError::InvalidParams {
                field: "vehicle_capacity",
                value: 0.0,
            });
        }
        if !self.vehicles_count_over_deport_hours_preference.is_finite() {
            return Err(DecodeError::InvalidParams {
                field: "vehicles_count_over_deport_hours_preference",
                value: self.vehicles_count_over_deport_hours_preference,
            });
        }
        Ok(())
    }

    /// Time needed to cover `distance`.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.vehicle_speed_avg
    }

    /// Cost of covering `distance`.
    pub fn travel_cost(&self, distance: f64) -> f64 {
        distance * self.vehicle_cost_per_dist
    }
}
