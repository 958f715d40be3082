//! Flattening of planar 3D point loops.
//!
//! The loop's bounding box is measured and its thinnest axis is taken as the
//! plane normal. Points are rotated so that this axis points up and the
//! remaining horizontal coordinates become the 2D position:
//!
//! | thinnest axis | direction    | 2D coordinate |
//! |---------------|--------------|---------------|
//! | x             | `Right`      | `(-y, z)`     |
//! | y             | `Down`       | `(-x, z)`     |
//! | z             | `Forward`    | `(x, -y)`     |
//!
//! A loop in the XY plane that runs clockwise with x to the right and y up
//! comes out counter-clockwise in 2D, which is the winding
//! [`triangulate`](crate::algorithms::triangulate) expects.
use crate::data::{Aabb, Point, Vector};
use crate::Error;
use crate::PolygonScalar;
use crate::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionAxis {
  /// Positive x.
  Right,
  /// Negative y.
  Down,
  /// Positive z.
  Forward,
}

impl ProjectionAxis {
  /// Pick the axis along which `points` are thinnest. Ties go to x, then y.
  pub fn of<T>(points: &[Point<T, 3>]) -> Result<ProjectionAxis, Error>
  where
    T: PolygonScalar,
  {
    if points.len() < 3 {
      return Err(Error::InvalidInput);
    }
    let extent = Aabb::of(points).ok_or(Error::InvalidInput)?.extent();
    let shortest = extent[0].min(extent[1]).min(extent[2]);
    Ok(if shortest == extent[0] {
      ProjectionAxis::Right
    } else if shortest == extent[1] {
      ProjectionAxis::Down
    } else {
      ProjectionAxis::Forward
    })
  }

  pub fn direction<T>(self) -> Vector<T, 3>
  where
    T: PolygonScalar,
  {
    let (o, l) = (T::zero(), T::one());
    match self {
      ProjectionAxis::Right => Vector([l, o, o]),
      ProjectionAxis::Down => -up(),
      ProjectionAxis::Forward => Vector([o, o, l]),
    }
  }

  /// Rotation taking this axis onto the up direction.
  pub fn rotation<T>(self) -> Transform<T>
  where
    T: PolygonScalar,
  {
    Transform::from_to_rotation(&self.direction(), &up())
  }
}

fn up<T: PolygonScalar>() -> Vector<T, 3> {
  Vector([T::zero(), T::one(), T::zero()])
}

/// Map every point onto the plane perpendicular to its thinnest axis.
///
/// The output has one 2D point per input point, in the same order.
///
/// # Errors
///
/// [`Error::InvalidInput`] if fewer than three points are given.
pub fn project<T>(points: &[Point<T, 3>]) -> Result<Vec<Point<T, 2>>, Error>
where
  T: PolygonScalar,
{
  let rotation: Transform<T> = ProjectionAxis::of(points)?.rotation();
  Ok(
    points
      .iter()
      .map(|pt| {
        let [x, _, z] = (&rotation * pt).array;
        Point::new([x, z])
      })
      .collect(),
  )
}
