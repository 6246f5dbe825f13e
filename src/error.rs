use thiserror::Error;

use crate::operations::validate::{RuleKind, Violation};

/// Top-level error type for ring validation.
///
/// None of these are rule violations: an `Err` means the ring could not be
/// validated, never that it was validated and found invalid.
#[derive(Debug, Error)]
pub enum RingError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while reading ring points out of their source encoding.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("no posList element found in ring")]
    MissingPosList,

    #[error("invalid coordinate token {token:?}")]
    InvalidNumber { token: String },

    #[error("{count} coordinates cannot be grouped into points of dimension {dimension}")]
    DimensionMismatch { count: usize, dimension: usize },

    #[error("unsupported srsDimension {0}")]
    UnsupportedDimension(String),
}

/// Errors raised by a projector.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("plane normal is zero-length")]
    DegenerateNormal,

    #[error("projector returned {actual} points for a ring of {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised by the validation orchestrator.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A check could not run to completion. `completed` holds the violations
    /// reported by the checks that ran before it.
    #[error("validation aborted during {rule}: {source}")]
    Aborted {
        rule: RuleKind,
        completed: Vec<Violation>,
        #[source]
        source: Box<RingError>,
    },
}

/// Convenience type alias for results using [`RingError`].
pub type Result<T> = std::result::Result<T, RingError>;
