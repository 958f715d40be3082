use num_traits::Float;

use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is measured on the normalized edge directions, so the result
  /// does not depend on edge lengths. A zero-length edge is reported as
  /// [`Orientation::CoLinear`].
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use earclipper::data::Point;
  /// # use earclipper::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> Orientation
  where
    T: Float,
  {
    let incoming = (p2 - p1).normalize();
    let outgoing = (p3 - p2).normalize();
    let cross = incoming.perp_dot(&outgoing);
    if cross > T::zero() {
      Orientation::CounterClockWise
    } else if cross < T::zero() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Orientation::*;
  use super::*;

  fn pt(x: f64, y: f64) -> Point<f64, 2> {
    Point::new([x, y])
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Orientation::new(&pt(0.0, 0.0), &pt(1.0, 1.0), &pt(2.0, 2.0)),
      CoLinear
    );
    assert_eq!(
      Orientation::new(&pt(0.0, 0.0), &pt(0.0, 1.0), &pt(2.0, 2.0)),
      ClockWise
    );
    assert_eq!(
      Orientation::new(&pt(0.0, 0.0), &pt(0.0, 1.0), &pt(-2.0, 2.0)),
      CounterClockWise
    );
    assert_eq!(
      Orientation::new(&pt(0.0, 0.0), &pt(0.0, 0.0), &pt(0.0, 0.0)),
      CoLinear
    );
  }

  #[test]
  fn zero_length_edge_is_colinear() {
    assert_eq!(
      Orientation::new(&pt(1.0, 1.0), &pt(1.0, 1.0), &pt(5.0, 0.0)),
      CoLinear
    );
    assert_eq!(
      Orientation::new(&pt(1.0, 1.0), &pt(5.0, 0.0), &pt(5.0, 0.0)),
      CoLinear
    );
  }

  #[test]
  fn edge_length_does_not_matter() {
    let turn = Orientation::new(&pt(0.0, 0.0), &pt(1000.0, 0.0), &pt(1000.0, 0.001));
    assert_eq!(turn, CounterClockWise);
    assert_eq!(turn.reverse(), ClockWise);
    assert_eq!(CoLinear.reverse(), CoLinear);
  }
}
