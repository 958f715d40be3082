use crate::algorithms::hole_merge::merge_holes;
use crate::data::Point;
use crate::Error;
use crate::PolygonScalar;

/// A planar polygon in 3D: one boundary loop and any number of holes.
///
/// The boundary should run clockwise and every hole counter-clockwise, as seen
/// from the side the polygon faces. Holes are assumed to lie inside the
/// boundary and not to overlap; neither is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline<T> {
  boundary: Vec<Point<T, 3>>,
  holes: Vec<Vec<Point<T, 3>>>,
}

impl<T> Outline<T> {
  pub fn new(boundary: Vec<Point<T, 3>>) -> Outline<T> {
    Outline {
      boundary,
      holes: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_hole(mut self, hole: Vec<Point<T, 3>>) -> Outline<T> {
    self.add_hole(hole);
    self
  }

  pub fn add_hole(&mut self, hole: Vec<Point<T, 3>>) {
    self.holes.push(hole)
  }

  pub fn boundary(&self) -> &[Point<T, 3>] {
    &self.boundary
  }

  pub fn holes(&self) -> &[Vec<Point<T, 3>>] {
    &self.holes
  }

  /// Boundary with every hole bridged in, in the order they were added.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidInput`] if the boundary or any hole has fewer than three
  /// points.
  pub fn merged(&self) -> Result<Vec<Point<T, 3>>, Error>
  where
    T: PolygonScalar,
  {
    merge_holes(&self.boundary, &self.holes)
  }
}
