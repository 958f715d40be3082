use crate::algorithms::projection::project;
use crate::data::{Outline, Point};
use crate::Error;
use crate::PolygonScalar;

pub mod earclip;

pub use earclip::{Incomplete, Triangulation};

/// Triangles over a merged point array.
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation<T> {
  /// Boundary and hole points after bridging. `triangulation` indexes into this.
  pub points: Vec<Point<T, 3>>,
  pub triangulation: Triangulation,
}

pub trait Tessellate {
  type Scalar;
  fn tessellate(self, flipped: bool) -> Result<Tessellation<Self::Scalar>, Error>;
}

impl<'a, T: PolygonScalar> Tessellate for &'a Outline<T> {
  type Scalar = T;

  #[tracing::instrument(
    skip_all,
    fields(boundary = self.boundary().len(), holes = self.holes().len())
  )]
  fn tessellate(self, flipped: bool) -> Result<Tessellation<T>, Error> {
    let points = self.merged()?;
    let triangulation = earclip::triangulate(&project(&points)?, flipped)?;
    Ok(Tessellation {
      points,
      triangulation,
    })
  }
}
