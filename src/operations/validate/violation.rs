use std::fmt;

use super::RuleKind;
use crate::math::Point3;
use crate::operations::query::Intersection;

/// The offending geometry attached to a [`Violation`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationPayload {
    /// Ring points. The whole ring for too-few-points; `[first, last]` (or
    /// nothing, for an empty ring) for not-closed.
    Points(Vec<Point3>),
    /// Two equal neighbours starting at ring index `index`.
    ConsecutivePair {
        index: usize,
        first: Point3,
        second: Point3,
    },
    /// Crossings found in the projected ring.
    Intersections(Vec<Intersection>),
}

/// A failed ring rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule: RuleKind,
    pub message: String,
    pub payload: ViolationPayload,
}

impl Violation {
    /// Creates a violation of `rule` with the rule's standard message.
    #[must_use]
    pub fn new(rule: RuleKind, payload: ViolationPayload) -> Self {
        Self {
            rule,
            message: format!("{}: {}", rule.code(), rule.description()),
            payload,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_code_and_description() {
        let v = Violation::new(RuleKind::TooFewPoints, ViolationPayload::Points(Vec::new()));
        assert_eq!(v.to_string(), "GE_R_TOO_FEW_POINTS: A ring should have at least 3 points");
    }
}
