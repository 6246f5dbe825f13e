use std::fmt;

/// Ring rules from the QIE geometric validation catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `GE_R_TOO_FEW_POINTS` (101).
    TooFewPoints,
    /// `GE_R_CONSECUTIVE_POINTS_SAME` (102).
    ConsecutivePointsSame,
    /// `GE_R_NOT_CLOSED` (103).
    NotClosed,
    /// `GE_R_SELF_INTERSECTION` (104).
    SelfIntersection,
    /// `GE_R_COLLAPSED_TO_LINE` (105). Reserved: no check exists for it.
    CollapsedToLine,
}

impl RuleKind {
    /// The rules run by [`ValidateRing`](super::ValidateRing), in execution
    /// order.
    pub const DEFAULT_CHECKS: [RuleKind; 4] = [
        RuleKind::TooFewPoints,
        RuleKind::ConsecutivePointsSame,
        RuleKind::NotClosed,
        RuleKind::SelfIntersection,
    ];

    /// The catalogue code, e.g. `"GE_R_NOT_CLOSED"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TooFewPoints => "GE_R_TOO_FEW_POINTS",
            Self::ConsecutivePointsSame => "GE_R_CONSECUTIVE_POINTS_SAME",
            Self::NotClosed => "GE_R_NOT_CLOSED",
            Self::SelfIntersection => "GE_R_SELF_INTERSECTION",
            Self::CollapsedToLine => "GE_R_COLLAPSED_TO_LINE",
        }
    }

    /// The numeric catalogue identifier.
    #[must_use]
    pub fn id(self) -> u16 {
        match self {
            Self::TooFewPoints => 101,
            Self::ConsecutivePointsSame => 102,
            Self::NotClosed => 103,
            Self::SelfIntersection => 104,
            Self::CollapsedToLine => 105,
        }
    }

    /// Human-readable statement of the rule.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::TooFewPoints => "A ring should have at least 3 points",
            Self::ConsecutivePointsSame => "Consecutive points in a ring should not be the same",
            Self::NotClosed => "The first and last points have to be identical",
            Self::SelfIntersection => "A ring should be simple, ie. it should not self-intersect",
            Self::CollapsedToLine => "A ring should not collapse to a line",
        }
    }

    /// Whether a check exists for this rule.
    #[must_use]
    pub fn is_implemented(self) -> bool {
        !matches!(self, Self::CollapsedToLine)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
