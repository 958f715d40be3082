use num_traits::Float;

use super::{Point, PointLocation};
use crate::Orientation;

/// Three borrowed 2D points. Either winding is accepted.
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: Float,
{
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let [a, b, c] = self.0;
    let [px, py] = pt.array;
    let [ax, ay] = a.array;
    let [bx, by] = b.array;
    let [cx, cy] = c.array;

    // Barycentric coordinates scaled by the determinant `d`. The sign of `d`
    // flips with the winding, so compare against it rather than zero.
    let dx = px - cx;
    let dy = py - cy;
    let dx21 = cx - bx;
    let dy12 = by - cy;
    let d = dy12 * (ax - cx) + dx21 * (ay - cy);
    let s = dy12 * dx + dx21 * dy;
    let t = (cy - ay) * dx + (ax - cx) * dy;
    let (s, t, d) = if d < T::zero() { (-s, -t, -d) } else { (s, t, d) };

    if s < T::zero() || t < T::zero() || s + t > d {
      PointLocation::Outside
    } else if s == T::zero() || t == T::zero() || s + t == d {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  /// True unless `pt` lies strictly outside. Points on an edge or corner count
  /// as contained.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    self.locate(pt) != PointLocation::Outside
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    let ab = b - a;
    let ac = c - a;
    ab.perp_dot(&ac)
  }
}
