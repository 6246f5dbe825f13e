use rayon::prelude::*;
use tracing::debug;

use super::{ValidateRing, ValidationParams, Violation};
use crate::error::Result;
use crate::math::Point3;
use crate::projection::{PlaneProjector, Projector};

/// Validates many independent rings in parallel.
///
/// Each ring gets its own [`ValidateRing`] run; one ring failing to validate
/// does not affect the others. Results come back in input order.
pub struct ValidateRings<'a, R, P = PlaneProjector> {
    rings: &'a [R],
    params: ValidationParams,
    projector: P,
}

impl<'a, R> ValidateRings<'a, R>
where
    R: AsRef<[Point3]> + Sync,
{
    /// Creates a new `ValidateRings` operation.
    #[must_use]
    pub fn new(rings: &'a [R]) -> Self {
        Self {
            rings,
            params: ValidationParams::default(),
            projector: PlaneProjector,
        }
    }
}

impl<'a, R, P> ValidateRings<'a, R, P>
where
    R: AsRef<[Point3]> + Sync,
    P: Projector + Sync,
{
    /// Sets custom comparison tolerances for every ring.
    #[must_use]
    pub fn with_params(mut self, params: ValidationParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the projector used for every ring.
    #[must_use]
    pub fn with_projector<Q: Projector + Sync>(self, projector: Q) -> ValidateRings<'a, R, Q> {
        ValidateRings {
            rings: self.rings,
            params: self.params,
            projector,
        }
    }

    /// Executes the validation, returning one result per ring.
    #[must_use]
    pub fn execute(&self) -> Vec<Result<Vec<Violation>>> {
        debug!(rings = self.rings.len(), "validating ring batch");
        self.rings
            .par_iter()
            .map(|ring| {
                ValidateRing::new(ring.as_ref())
                    .with_params(self.params)
                    .with_projector(&self.projector)
                    .execute()
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::validate::{validate_ring, RuleKind};
    use crate::projection::AxisDropProjector;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn rings() -> Vec<Vec<Point3>> {
        vec![
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)],
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)],
            vec![p(0.0, 0.0, 0.0), p(f64::INFINITY, 0.0, 0.0), p(0.0, 0.0, 0.0)],
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(0.0, 2.0, 0.0),
                p(0.0, 0.0, 0.0),
            ],
        ]
    }

    #[test]
    fn batch_matches_individual_runs_in_order() {
        let rings = rings();
        let batch = ValidateRings::new(&rings).execute();
        assert_eq!(batch.len(), rings.len());
        for (ring, result) in rings.iter().zip(&batch) {
            match (validate_ring(ring), result) {
                (Ok(expected), Ok(actual)) => assert_eq!(&expected, actual),
                (Err(_), Err(_)) => {}
                (expected, actual) => panic!("mismatch: {expected:?} vs {actual:?}"),
            }
        }
    }

    #[test]
    fn one_bad_ring_does_not_poison_the_batch() {
        let rings = rings();
        let batch = ValidateRings::new(&rings)
            .with_projector(AxisDropProjector::new())
            .execute();
        assert!(batch[0].as_ref().unwrap().is_empty());
        assert!(batch[2].is_err());
        let last: Vec<RuleKind> = batch[3].as_ref().unwrap().iter().map(|v| v.rule).collect();
        assert_eq!(last, vec![RuleKind::SelfIntersection]);
    }

    #[test]
    fn empty_batch() {
        let rings: Vec<Vec<Point3>> = Vec::new();
        assert!(ValidateRings::new(&rings).execute().is_empty());
    }
}
