//! Upstream validation of orderings.
//!
//! The decoder trusts its input. Callers that build orderings from outside
//! sources can check them here first.

use crate::error::DecodeError;
use crate::models::StopCatalog;

use super::decoder::DEPOT;

/// Checks that `ordering` is a permutation of all non-depot catalog stops.
///
/// Reports the depot appearing in the ordering, IDs missing from the catalog,
/// duplicates, and stops left out.
///
/// # Examples
///
/// ```
/// use u_route_decode::models::Stop;
/// use u_route_decode::evaluation::validate_ordering;
///
/// let stops = vec![
///     Stop::depot(0.0, 0.0, 100.0),
///     Stop::new(1, 1.0, 0.0, 1, 50.0, 0.0),
///     Stop::new(2, 2.0, 0.0, 1, 50.0, 0.0),
/// ];
/// assert!(validate_ordering(&[2, 1], &stops).is_ok());
/// assert!(validate_ordering(&[1, 1], &stops).is_err());
/// ```
pub fn validate_ordering<C>(ordering: &[usize], catalog: &C) -> Result<(), DecodeError>
where
    C: StopCatalog + ?Sized,
{
    let n = catalog.num_stops();
    let mut seen = vec![false; n];

    for &id in ordering {
        if id == DEPOT {
            return Err(DecodeError::MalformedOrdering(
                "depot must not appear in the ordering".to_string(),
            ));
        }
        if id >= n || catalog.stop(id).is_none() {
            return Err(DecodeError::UnknownStop(id));
        }
        if seen[id] {
            return Err(DecodeError::MalformedOrdering(format!(
                "stop {id} appears more than once"
            )));
        }
        seen[id] = true;
    }

    if n > 0 && ordering.len() != n - 1 {
        return Err(DecodeError::MalformedOrdering(format!(
            "expected {} stops, got {}",
            n - 1,
            ordering.len()
        )));
    }
    Ok(())
}
