mod bbox;
mod outline;
pub(crate) mod point;
mod triangle;
mod vector;

pub use bbox::*;
pub use outline::*;
pub use triangle::*;

pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
