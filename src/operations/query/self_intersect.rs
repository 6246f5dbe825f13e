use tracing::trace;

use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{points_equal_2d, Point2};

/// A self-intersection between two non-adjacent edges of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Ring index of the point the first edge starts at.
    pub seg_i: usize,
    /// Ring index of the point the second edge starts at (always > `seg_i`).
    pub seg_j: usize,
    /// Parameter on edge i (0..1).
    pub t_i: f64,
    /// Parameter on edge j (0..1).
    pub t_j: f64,
    /// Intersection point in projected coordinates.
    pub point: Point2,
}

/// Finds every crossing between non-adjacent edges of a closed 2D ring.
///
/// The points are read as the vertices of a closed polygon: consecutive
/// points are joined, and the last point is joined back to the first. Runs of
/// coincident consecutive points collapse to one vertex, and a repeated
/// closing point is dropped, so zero-length edges never make otherwise
/// separate edges adjacent or non-adjacent. An edge starting at a collapsed
/// run is indexed by the last point of the run.
///
/// Touches count as intersections, including a vertex visited twice and
/// collinear overlap. Naive O(n²) pairwise scan.
pub struct FindSelfIntersections<'a> {
    points: &'a [Point2],
    tolerance: f64,
    coincidence: f64,
}

impl<'a> FindSelfIntersections<'a> {
    /// Creates a new `FindSelfIntersections` query with exact arithmetic.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            tolerance: 0.0,
            coincidence: 0.0,
        }
    }

    /// Sets the parameter slack for the segment intersection test.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the distance below which consecutive points are merged.
    #[must_use]
    pub fn with_coincidence(mut self, coincidence: f64) -> Self {
        self.coincidence = coincidence;
        self
    }

    /// Executes the query, returning crossings ordered by edge pair.
    #[must_use]
    pub fn execute(&self) -> Vec<Intersection> {
        let vertices = self.distinct_vertices();
        let n = vertices.len();
        // A triangle has no non-adjacent edge pair.
        if n < 4 {
            return Vec::new();
        }

        let mut results = Vec::new();
        for i in 0..n {
            let (seg_i, a0) = vertices[i];
            let a1 = vertices[(i + 1) % n].1;

            for j in (i + 2)..n {
                // First and last edges share the closing vertex.
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (seg_j, b0) = vertices[j];
                let b1 = vertices[(j + 1) % n].1;

                if let Some(hit) = segment_segment_intersect_2d(&a0, &a1, &b0, &b1, self.tolerance)
                {
                    results.push(Intersection {
                        seg_i,
                        seg_j,
                        t_i: hit.t,
                        t_j: hit.u,
                        point: hit.point,
                    });
                }
            }
        }

        trace!(vertices = n, crossings = results.len(), "self-intersection scan");
        results
    }

    /// Vertices of the closed polygon, each tagged with its ring index.
    fn distinct_vertices(&self) -> Vec<(usize, Point2)> {
        let mut vertices: Vec<(usize, Point2)> = Vec::with_capacity(self.points.len());
        for (index, pt) in self.points.iter().enumerate() {
            if let Some(last) = vertices.last_mut() {
                if points_equal_2d(&last.1, pt, self.coincidence) {
                    last.0 = index;
                    continue;
                }
            }
            vertices.push((index, *pt));
        }
        while vertices.len() > 1 {
            let (first, last) = (vertices[0].1, vertices[vertices.len() - 1].1);
            if !points_equal_2d(&first, &last, self.coincidence) {
                break;
            }
            vertices.pop();
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_is_simple() {
        let sq = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0)];
        assert!(FindSelfIntersections::new(&sq).execute().is_empty());
    }

    #[test]
    fn unclosed_square_is_simple() {
        let sq = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!(FindSelfIntersections::new(&sq).execute().is_empty());
    }

    #[test]
    fn figure_eight_single_crossing() {
        let bowtie = [p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0), p(0.0, 0.0)];
        let hits = FindSelfIntersections::new(&bowtie).execute();
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert_eq!((hits[0].seg_i, hits[0].seg_j), (0, 2));
        assert_relative_eq!(hits[0].point.x, 1.0);
        assert_relative_eq!(hits[0].point.y, 1.0);
        assert_relative_eq!(hits[0].t_i, 0.5);
        assert_relative_eq!(hits[0].t_j, 0.5);
    }

    #[test]
    fn consecutive_duplicate_is_not_a_crossing() {
        let ring = [
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ];
        assert!(FindSelfIntersections::new(&ring).execute().is_empty());
    }

    #[test]
    fn duplicate_run_indexes_edge_by_last_point() {
        let ring = [
            p(0.0, 0.0),
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(2.0, 0.0),
            p(0.0, 2.0),
            p(0.0, 0.0),
        ];
        let hits = FindSelfIntersections::new(&ring).execute();
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].seg_i, hits[0].seg_j), (1, 3));
    }

    #[test]
    fn repeated_vertex_touch_counts() {
        // Two lobes meeting at (1, 1), visited at indices 2 and 5.
        let ring = [
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 1.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
        ];
        let hits = FindSelfIntersections::new(&ring).execute();
        assert!(!hits.is_empty());
        for hit in &hits {
            assert_relative_eq!(hit.point.x, 1.0);
            assert_relative_eq!(hit.point.y, 1.0);
        }
    }

    #[test]
    fn collinear_overlap_counts() {
        // Edge 0 runs (0,0)->(4,0); edge 3 doubles back over part of it.
        let ring = [p(0.0, 0.0), p(4.0, 0.0), p(4.0, 1.0), p(3.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        let hits = FindSelfIntersections::new(&ring).execute();
        assert!(hits.iter().any(|h| h.seg_i == 0 && h.seg_j == 3));
    }

    #[test]
    fn degenerate_inputs_have_no_crossings() {
        assert!(FindSelfIntersections::new(&[]).execute().is_empty());
        assert!(FindSelfIntersections::new(&[p(1.0, 1.0)]).execute().is_empty());
        let same = [p(1.0, 1.0); 5];
        assert!(FindSelfIntersections::new(&same).execute().is_empty());
        let tri = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)];
        assert!(FindSelfIntersections::new(&tri).execute().is_empty());
    }

    #[test]
    fn coincidence_merges_near_duplicates() {
        let ring = [
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1e-12),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ];
        let loose = FindSelfIntersections::new(&ring).with_coincidence(1e-9);
        assert!(loose.execute().is_empty());
    }
}
