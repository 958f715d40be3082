use num_traits::Float;

use super::{Point, Vector};

/// Axis-aligned bounding box of a set of 3D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<T> {
  pub min: Point<T, 3>,
  pub max: Point<T, 3>,
}

impl<T> Aabb<T>
where
  T: Float,
{
  /// Returns the smallest box containing every point in `pts`, or `None` if
  /// there are no points.
  pub fn of<'a>(pts: impl IntoIterator<Item = &'a Point<T, 3>>) -> Option<Aabb<T>>
  where
    T: 'a,
  {
    let mut iter = pts.into_iter();
    let first = *iter.next()?;
    let bounds = iter.fold(Aabb { min: first, max: first }, |acc, pt| Aabb {
      min: Point::new([
        acc.min[0].min(pt[0]),
        acc.min[1].min(pt[1]),
        acc.min[2].min(pt[2]),
      ]),
      max: Point::new([
        acc.max[0].max(pt[0]),
        acc.max[1].max(pt[1]),
        acc.max[2].max(pt[2]),
      ]),
    });
    Some(bounds)
  }

  /// Size of the box along each axis.
  pub fn extent(&self) -> Vector<T, 3> {
    &self.max - &self.min
  }
}
