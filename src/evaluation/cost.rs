//! Scalar fitness of a decoded plan.

use crate::models::{CostParams, Plan};

/// Fitness split into its two parts. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    /// `total_distance × vehicle_cost_per_dist`.
    pub travel_cost: f64,
    /// `weight × vehicles_count + max_elapsed_time`.
    pub fleet_cost: f64,
    /// `travel_cost + fleet_cost`.
    pub total: f64,
}

/// Reduces a [`Plan`] to a single comparable cost.
///
/// The weighting factor `vehicles_count_over_deport_hours_preference` prices
/// one vehicle in units of depot working hours, so raising it favors plans
/// with fewer vehicles over plans that finish earlier.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::{CostParams, Plan};
/// use u_route_decode::evaluation::CostEvaluator;
///
/// let params = CostParams::default().with_vehicles_count_over_deport_hours_preference(100.0);
/// let mut plan = Plan::new();
/// plan.total_distance = 50.0;
/// plan.vehicles_count = 2;
/// plan.max_elapsed_time = 30.0;
///
/// let cost = CostEvaluator::new(&params).breakdown(&plan);
/// assert_eq!(cost.travel_cost, 50.0);
/// assert_eq!(cost.fleet_cost, 230.0);
/// assert_eq!(cost.total, 280.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    params: &'a CostParams,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator for the given parameters.
    pub fn new(params: &'a CostParams) -> Self {
        Self { params }
    }

    /// Cost of fleet size and depot working hours.
    pub fn fleet_cost(&self, vehicles_count: usize, working_hours: f64) -> f64 {
        self.params.vehicles_count_over_deport_hours_preference * vehicles_count as f64
            + working_hours
    }

    /// Both cost components and their sum.
    pub fn breakdown(&self, plan: &Plan) -> CostBreakdown {
        let travel_cost = self.params.travel_cost(plan.total_distance);
        let fleet_cost = self.fleet_cost(plan.vehicles_count, plan.max_elapsed_time);
        CostBreakdown {
            travel_cost,
            fleet_cost,
            total: travel_cost + fleet_cost,
        }
    }

    /// Total fitness of `plan`.
    pub fn fitness(&self, plan: &Plan) -> f64 {
        self.breakdown(plan).total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(distance: f64, vehicles: usize, hours: f64) -> Plan {
        let mut p = Plan::new();
        p.total_distance = distance;
        p.vehicles_count = vehicles;
        p.max_elapsed_time = hours;
        p
    }

    #[test]
    fn test_baseline_plan() {
        let params = CostParams::default().with_vehicles_count_over_deport_hours_preference(100.0);
        let eval = CostEvaluator::new(&params);
        assert_eq!(eval.fitness(&Plan::new()), 100.0);
    }

    #[test]
    fn test_cost_per_distance() {
        let params = CostParams::default()
            .with_vehicle_cost_per_dist(2.5)
            .with_vehicles_count_over_deport_hours_preference(10.0);
        let b = CostEvaluator::new(&params).breakdown(&plan(40.0, 3, 12.0));
        assert!((b.travel_cost - 100.0).abs() < 1e-10);
        assert!((b.fleet_cost - 42.0).abs() < 1e-10);
        assert!((b.total - 142.0).abs() < 1e-10);
    }

    #[test]
    fn test_weight_trades_fleet_for_hours() {
        // Two vehicles finishing at 30 vs. one vehicle finishing at 50.
        let two = plan(50.0, 2, 30.0);
        let one = plan(50.0, 1, 50.0);

        let light = CostParams::default().with_vehicles_count_over_deport_hours_preference(5.0);
        let eval = CostEvaluator::new(&light);
        assert!(eval.fitness(&two) < eval.fitness(&one));

        let heavy = CostParams::default().with_vehicles_count_over_deport_hours_preference(100.0);
        let eval = CostEvaluator::new(&heavy);
        assert!(eval.fitness(&one) < eval.fitness(&two));
    }

    #[test]
    fn test_monotonic_in_each_component() {
        let params = CostParams::default().with_vehicles_count_over_deport_hours_preference(1.0);
        let eval = CostEvaluator::new(&params);
        let base = eval.fitness(&plan(10.0, 1, 10.0));
        assert!(eval.fitness(&plan(11.0, 1, 10.0)) > base);
        assert!(eval.fitness(&plan(10.0, 2, 10.0)) > base);
        assert!(eval.fitness(&plan(10.0, 1, 11.0)) > base);
    }
}
