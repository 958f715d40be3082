#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Ear-clipping triangulation of planar polygon outlines.
//!
//! A polygon is given as an ordered loop of 3D points (plus optional hole loops).
//! Holes are bridged into the boundary, the loop is projected onto its best-fit
//! axis plane and the resulting 2D loop is triangulated by clipping ears. Triangle
//! indices always refer to the (merged) 3D point array.
//!
//! ```rust
//! # use earclipper::data::{Outline, Point};
//! # use earclipper::algorithms::triangulation::Tessellate;
//! let wall = Outline::new(vec![
//!   Point::new([0.0, 0.0, 0.0]),
//!   Point::new([-1.0, 0.0, 0.0]),
//!   Point::new([-1.0, 1.0, 0.0]),
//!   Point::new([0.0, 1.0, 0.0]),
//! ]);
//! let mesh = wall.tessellate(false).unwrap();
//! assert_eq!(mesh.triangulation.indices(), &[3, 0, 1, 1, 2, 3]);
//! ```
use num_traits::Float;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod orientation;
mod transformation;

pub use orientation::Orientation;
pub use transformation::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three points were supplied for a polygon loop.
  InvalidInput,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput => write!(f, "Invalid input: a polygon needs at least 3 points"),
    }
  }
}

impl std::error::Error for Error {}

pub trait PolygonScalar: Float + Debug {
  /// Distance below which two projected points are considered the same point.
  fn coincidence_tolerance() -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn coincidence_tolerance() -> Self {
          0.0001
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests;
