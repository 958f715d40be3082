use array_init::array_init;
use num_traits::Float;
use std::ops::Mul;

use crate::data::Point;
use crate::data::Vector;

/// Linear transformation of 3D space, stored as a row-major 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform<T>([[T; 3]; 3]);

impl<T> Transform<T>
where
  T: Float,
{
  pub fn identity() -> Transform<T> {
    Transform(array_init(|row| {
      array_init(|col| if row == col { T::one() } else { T::zero() })
    }))
  }

  /// Shortest-arc rotation that turns direction `from` onto direction `to`.
  ///
  /// Opposite directions rotate half a turn around an axis perpendicular to
  /// `from`. A zero-length input yields the identity.
  pub fn from_to_rotation(from: &Vector<T, 3>, to: &Vector<T, 3>) -> Transform<T> {
    let from = from.normalize();
    let to = to.normalize();
    if from.squared_magnitude() == T::zero() || to.squared_magnitude() == T::zero() {
      return Transform::identity();
    }

    let cos = from.dot(&to);
    if T::one() + cos <= T::epsilon() {
      return Transform::half_turn(&from);
    }

    // Rodrigues' formula with the sine folded into the unnormalized axis.
    let [x, y, z] = from.cross(&to).0;
    let h = T::one() / (T::one() + cos);
    Transform([
      [cos + h * x * x, h * x * y - z, h * x * z + y],
      [h * x * y + z, cos + h * y * y, h * y * z - x],
      [h * x * z - y, h * y * z + x, cos + h * z * z],
    ])
  }

  // Rotation by pi around some axis perpendicular to `dir`: 2kk^T - I.
  fn half_turn(dir: &Vector<T, 3>) -> Transform<T> {
    let (o, l) = (T::zero(), T::one());
    let mut axis = dir.cross(&Vector([l, o, o]));
    if axis.squared_magnitude() <= T::epsilon() {
      axis = dir.cross(&Vector([o, l, o]));
    }
    let k = axis.normalize();
    let two = l + l;
    Transform(array_init(|row| {
      array_init(|col| {
        let diagonal = if row == col { l } else { o };
        two * k[row] * k[col] - diagonal
      })
    }))
  }

  pub fn apply(&self, v: &Vector<T, 3>) -> Vector<T, 3> {
    Vector(array_init(|row| {
      let [a, b, c] = self.0[row];
      a * v[0] + b * v[1] + c * v[2]
    }))
  }
}

impl<T> Mul<&Point<T, 3>> for &Transform<T>
where
  T: Float,
{
  type Output = Point<T, 3>;
  fn mul(self, other: &Point<T, 3>) -> Point<T, 3> {
    self.apply(&other.as_vec()).into()
  }
}

impl<T> Mul<Point<T, 3>> for &Transform<T>
where
  T: Float,
{
  type Output = Point<T, 3>;
  fn mul(self, other: Point<T, 3>) -> Point<T, 3> {
    self * &other
  }
}

impl<T> Mul<&Vector<T, 3>> for &Transform<T>
where
  T: Float,
{
  type Output = Vector<T, 3>;
  fn mul(self, other: &Vector<T, 3>) -> Vector<T, 3> {
    self.apply(other)
  }
}
