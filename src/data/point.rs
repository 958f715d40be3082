use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use super::Vector;

mod sub;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Random sampling.
impl<T, const N: usize> Distribution<Point<T, N>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T, N> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn squared_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
  }

  /// Euclidean distance between two points.
  pub fn distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self.squared_distance(rhs).sqrt()
  }

  pub fn as_vec(&self) -> Vector<T, N>
  where
    T: Copy,
  {
    Vector(self.array)
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T> Point<T, 3> {
  pub fn z_coord(&self) -> &T {
    &self.array[2]
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<(T, T, T)> for Point<T, 3> {
  fn from(point: (T, T, T)) -> Point<T, 3> {
    Point {
      array: [point.0, point.1, point.2],
    }
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
  fn from(vector: Vector<T, N>) -> Point<T, N> {
    Point { array: vector.0 }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;

  #[test]
  fn distance_3d() {
    let p = Point::new([1.0, 2.0, 2.0]);
    assert_eq!(p.distance(&Point::new([0.0, 0.0, 0.0])), 3.0);
    assert_eq!(p.squared_distance(&p), 0.0);
  }

  #[test]
  fn tuple_conversion() {
    let p: Point<f32, 3> = (1.0, 2.0, 3.0).into();
    assert_eq!((*p.x_coord(), *p.y_coord(), *p.z_coord()), (1.0, 2.0, 3.0));
  }

  #[test]
  fn random_points_are_in_unit_range() {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    for _ in 0..100 {
      let p: Point<f64, 3> = rng.gen();
      assert!(p.array.iter().all(|c| (0.0..1.0).contains(c)));
    }
  }
}
