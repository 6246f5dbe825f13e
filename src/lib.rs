pub mod error;
pub mod extraction;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod projection;

pub use error::{Result, RingError};
pub use operations::validate::{
    validate_gml_ring, validate_ring, RuleKind, ValidateRing, ValidateRings, ValidationParams,
    Violation, ViolationPayload,
};
