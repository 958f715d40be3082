// Strategies and helpers shared by the property tests:
//  * convex polygons (counter-clockwise, y up)
//  * planar 3D loops
use crate::algorithms::triangulation::Triangulation;
use crate::data::{Point, TriangleView};

use proptest::collection::vec;
use proptest::prelude::*;
use std::f64::consts::TAU;
use std::ops::Range;

/// Counter-clockwise convex polygon with a vertex count drawn from `len`.
///
/// Vertices sit on a circle, each jittered by at most 30% of the even angular
/// spacing, so consecutive vertices never coincide or line up.
pub fn convex_polygon(len: Range<usize>) -> impl Strategy<Value = Vec<Point<f64, 2>>> {
  len
    .prop_flat_map(|n| {
      (
        vec(-0.3..0.3_f64, n),
        0.5..100.0_f64,
        -100.0..100.0_f64,
        -100.0..100.0_f64,
      )
    })
    .prop_map(|(jitter, radius, cx, cy)| {
      let n = jitter.len() as f64;
      jitter
        .iter()
        .enumerate()
        .map(|(k, j)| {
          let angle = TAU * (k as f64 + j) / n;
          Point::new([cx + radius * angle.cos(), cy + radius * angle.sin()])
        })
        .collect::<Vec<_>>()
    })
}

/// Place a 2D loop in the plane perpendicular to `axis` (0 = x, 1 = y, 2 = z)
/// at the given offset along that axis.
pub fn embed_in_axis_plane(pts: &[Point<f64, 2>], axis: usize, offset: f64) -> Vec<Point<f64, 3>> {
  pts
    .iter()
    .map(|pt| {
      let [u, v] = pt.array;
      match axis {
        0 => Point::new([offset, u, v]),
        1 => Point::new([u, offset, v]),
        _ => Point::new([u, v, offset]),
      }
    })
    .collect()
}

/// Shoelace area. Positive for counter-clockwise loops.
pub fn polygon_area(pts: &[Point<f64, 2>]) -> f64 {
  let n = pts.len();
  (0..n)
    .map(|i| {
      let [x0, y0] = pts[i].array;
      let [x1, y1] = pts[(i + 1) % n].array;
      x0 * y1 - x1 * y0
    })
    .sum::<f64>()
    / 2.0
}

/// Sum of the signed areas of all triangles.
pub fn triangulation_area(pts: &[Point<f64, 2>], trig: &Triangulation) -> f64 {
  trig
    .triangles()
    .map(|[a, b, c]| TriangleView::new([&pts[a], &pts[b], &pts[c]]).signed_area())
    .sum()
}
