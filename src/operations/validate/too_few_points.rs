use super::{RuleKind, Violation, ViolationPayload};
use crate::math::Point3;

/// `GE_R_TOO_FEW_POINTS`: a ring needs at least three vertices besides the
/// repeated closing point, i.e. four points.
///
/// Closure is not inspected: an open ring of four points passes.
#[must_use]
pub fn check_too_few_points(points: &[Point3]) -> Option<Violation> {
    // The closing point is not counted; an empty ring counts as -1 and fails.
    let vertex_count = points.len().checked_sub(1);
    if vertex_count.is_some_and(|count| count > 2) {
        return None;
    }
    Some(Violation::new(
        RuleKind::TooFewPoints,
        ViolationPayload::Points(points.to_vec()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(len: u32) -> Vec<Point3> {
        (0..len).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect()
    }

    #[test]
    fn four_points_pass() {
        assert!(check_too_few_points(&ring(4)).is_none());
        assert!(check_too_few_points(&ring(10)).is_none());
    }

    #[test]
    fn three_or_fewer_fail() {
        for len in 0..=3 {
            let v = check_too_few_points(&ring(len));
            assert!(v.is_some(), "len {len} should fail");
        }
    }

    #[test]
    fn payload_is_whole_ring() {
        let pts = ring(2);
        let v = check_too_few_points(&pts);
        assert_eq!(v.map(|v| v.payload), Some(ViolationPayload::Points(pts)));
    }
}
