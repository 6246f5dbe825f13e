use tracing::{debug, warn};

use super::{
    check_consecutive_points, check_not_closed, check_self_intersection, check_too_few_points,
    RuleKind, ValidationParams, Violation,
};
use crate::error::{Result, ValidationError};
use crate::math::Point3;
use crate::projection::{PlaneProjector, Projector};

/// Validates one ring against every implemented ring rule.
///
/// All checks run, whatever the earlier ones found. The result lists failures
/// in [`RuleKind::DEFAULT_CHECKS`] order; an empty list means the ring is
/// valid.
pub struct ValidateRing<'a, P = PlaneProjector> {
    points: &'a [Point3],
    params: ValidationParams,
    projector: P,
}

impl<'a> ValidateRing<'a> {
    /// Creates a new `ValidateRing` operation with exact comparisons and the
    /// plane projector.
    #[must_use]
    pub fn new(points: &'a [Point3]) -> Self {
        Self {
            points,
            params: ValidationParams::default(),
            projector: PlaneProjector,
        }
    }
}

impl<'a, P: Projector> ValidateRing<'a, P> {
    /// Sets custom comparison tolerances.
    #[must_use]
    pub fn with_params(mut self, params: ValidationParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the projector used by the self-intersection check.
    #[must_use]
    pub fn with_projector<Q: Projector>(self, projector: Q) -> ValidateRing<'a, Q> {
        ValidateRing {
            points: self.points,
            params: self.params,
            projector,
        }
    }

    /// Executes the validation, returning every violation found.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Aborted`] if a check could not run. The
    /// error carries the violations found by the checks before it.
    pub fn execute(&self) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();
        for rule in RuleKind::DEFAULT_CHECKS {
            match self.run(rule) {
                Ok(Some(violation)) => {
                    debug!(rule = %rule, points = self.points.len(), "ring check failed");
                    violations.push(violation);
                }
                Ok(None) => {}
                Err(source) => {
                    warn!(rule = %rule, error = %source, "ring check aborted");
                    return Err(ValidationError::Aborted {
                        rule,
                        completed: violations,
                        source: Box::new(source),
                    }
                    .into());
                }
            }
        }
        Ok(violations)
    }

    fn run(&self, rule: RuleKind) -> Result<Option<Violation>> {
        let tolerance = self.params.tolerance;
        match rule {
            RuleKind::TooFewPoints => Ok(check_too_few_points(self.points)),
            RuleKind::ConsecutivePointsSame => {
                Ok(check_consecutive_points(self.points, tolerance))
            }
            RuleKind::NotClosed => Ok(check_not_closed(self.points, tolerance)),
            RuleKind::SelfIntersection => {
                check_self_intersection(self.points, &self.projector, &self.params)
            }
            // Reserved, never scheduled.
            RuleKind::CollapsedToLine => Ok(None),
        }
    }
}
