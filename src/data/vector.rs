use array_init::array_init;
use num_traits::Float;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Float,
{
  pub fn dot(&self, rhs: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(rhs.0.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> T {
    self.squared_magnitude().sqrt()
  }

  /// Unit vector pointing in the same direction. The zero vector is returned
  /// unchanged.
  #[must_use]
  pub fn normalize(&self) -> Vector<T, N> {
    let magnitude = self.magnitude();
    if magnitude == T::zero() {
      *self
    } else {
      Vector(array_init(|i| self.0[i] / magnitude))
    }
  }
}

impl<T> Vector<T, 2>
where
  T: Float,
{
  /// Z component of the cross product of two 2D vectors. Positive when `rhs`
  /// points to the left of `self`.
  pub fn perp_dot(&self, rhs: &Vector<T, 2>) -> T {
    self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
  }
}

impl<T> Vector<T, 3>
where
  T: Float,
{
  pub fn cross(&self, rhs: &Vector<T, 3>) -> Vector<T, 3> {
    let [ax, ay, az] = self.0;
    let [bx, by, bz] = rhs.0;
    Vector([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Vector<T, N>;
  fn neg(self) -> Vector<T, N> {
    Vector(array_init(|i| -self.0[i]))
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}
