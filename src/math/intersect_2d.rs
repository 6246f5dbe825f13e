use super::{cross_2d, Point2, Vector2};

/// A bounded segment-segment intersection.
///
/// `t` is the parameter on the first segment and `u` the parameter on the
/// second, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub point: Point2,
    pub t: f64,
    pub u: f64,
}

/// Bounded segment-segment intersection in 2D.
///
/// Solves `a0 + t * (a1 - a0) = b0 + u * (b1 - b0)` with the cross-product
/// method and reports a hit when both parameters lie in `[-eps, 1 + eps]`.
/// Endpoint touches count. Parallel segments only intersect when they are
/// collinear and overlap; the reported point is then the start of the shared
/// stretch along the first segment.
///
/// `eps = 0.0` gives exact comparisons. A positive `eps` widens the parameter
/// window and treats segments whose directions have `|sin| <= eps` as parallel.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<SegmentHit> {
    let da = a1 - a0;
    let db = b1 - b0;

    if da.norm_squared() == 0.0 {
        return point_on_segment(a0, b0, b1, eps).map(|u| SegmentHit {
            point: *a0,
            t: 0.0,
            u,
        });
    }
    if db.norm_squared() == 0.0 {
        return point_on_segment(b0, a0, a1, eps).map(|t| SegmentHit {
            point: *b0,
            t,
            u: 0.0,
        });
    }

    let denom = cross_2d(&da, &db);
    if denom.abs() <= eps * da.norm() * db.norm() {
        return collinear_overlap(a0, &da, b0, b1, eps);
    }

    let r = b0 - a0;
    let t = cross_2d(&r, &db) / denom;
    let u = cross_2d(&r, &da) / denom;

    if within_unit(t, eps) && within_unit(u, eps) {
        let t = t.clamp(0.0, 1.0);
        Some(SegmentHit {
            point: a0 + da * t,
            t,
            u: u.clamp(0.0, 1.0),
        })
    } else {
        None
    }
}

/// Parameter of `p` along the segment `s0 -> s1`, if `p` lies on it.
#[must_use]
pub fn point_on_segment(p: &Point2, s0: &Point2, s1: &Point2, eps: f64) -> Option<f64> {
    let d = s1 - s0;
    let len_sq = d.norm_squared();
    let r = p - s0;
    if len_sq == 0.0 {
        return (r.norm() <= eps).then_some(0.0);
    }
    if cross_2d(&r, &d).abs() > eps * r.norm() * d.norm() {
        return None;
    }
    let t = r.dot(&d) / len_sq;
    within_unit(t, eps).then_some(t.clamp(0.0, 1.0))
}

/// Overlap of two parallel segments. Returns `None` unless they share a line
/// and at least one point.
fn collinear_overlap(
    a0: &Point2,
    da: &Vector2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<SegmentHit> {
    let r = b0 - a0;
    if cross_2d(&r, da).abs() > eps * r.norm() * da.norm() {
        return None;
    }

    let len_sq = da.norm_squared();
    let t0 = r.dot(da) / len_sq;
    let t1 = (b1 - a0).dot(da) / len_sq;
    let start = t0.min(t1).max(0.0);
    let end = t0.max(t1).min(1.0);
    if start > end + eps {
        return None;
    }

    let t = start.min(1.0);
    let point = a0 + da * t;
    let db = b1 - b0;
    let u = ((point - b0).dot(&db) / db.norm_squared()).clamp(0.0, 1.0);
    Some(SegmentHit { point, t, u })
}

#[inline]
fn within_unit(value: f64, eps: f64) -> bool {
    value >= -eps && value <= 1.0 + eps
}
