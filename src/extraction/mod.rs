//! Reading ring points out of their source encoding.
//!
//! Extraction keeps point order and exact coordinate values. Its failures are
//! [`ExtractionError`](crate::error::ExtractionError)s, never rule violations.

mod gml;
mod pos_list;

pub use gml::{extract_ring_points, GmlExtractor};
pub use pos_list::parse_pos_list;

use crate::error::Result;
use crate::math::Point3;

/// Turns a ring's native encoding into an ordered point sequence.
pub trait PointExtractor {
    /// The encoded ring.
    type Input: ?Sized;

    /// Extracts the ring points.
    ///
    /// # Errors
    ///
    /// Returns an extraction error if `input` is not a readable ring.
    fn extract(&self, input: &Self::Input) -> Result<Vec<Point3>>;
}
