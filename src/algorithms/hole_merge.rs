//! Folding holes into a polygon boundary.
//!
//! A hole is joined to the boundary through a zero-width bridge: the hole's
//! leftmost point is connected to the nearest boundary vertex, and both bridge
//! ends are visited twice. The result is a single loop that the ear clipper can
//! consume directly.
//!
//! The bridge vertex is picked by distance alone. Nothing checks that the
//! bridge stays inside the polygon, so a concave boundary can produce a bridge
//! that crosses it.
use std::cmp::Ordering;

use tracing::debug;

use crate::data::Point;
use crate::Error;
use crate::PolygonScalar;

/// Merge `hole` into `outer`.
///
/// The boundary should wind clockwise and the hole counter-clockwise (the
/// opposite of each other). The output holds `outer.len() + hole.len() + 2`
/// points: the boundary up to and including the bridge vertex, the full hole
/// cycle starting at its leftmost point, the hole's bridge point again, the
/// boundary bridge vertex again, and then the rest of the boundary.
///
/// # Errors
///
/// [`Error::InvalidInput`] if either loop has fewer than three points.
pub fn merge_hole<T>(
  outer: &[Point<T, 3>],
  hole: &[Point<T, 3>],
) -> Result<Vec<Point<T, 3>>, Error>
where
  T: PolygonScalar,
{
  if outer.len() < 3 || hole.len() < 3 {
    return Err(Error::InvalidInput);
  }
  let hole_idx = leftmost(hole).ok_or(Error::InvalidInput)?;
  let outer_idx = nearest(&hole[hole_idx], outer).ok_or(Error::InvalidInput)?;
  debug!(hole_idx, outer_idx, "bridging hole");

  let mut merged = Vec::with_capacity(outer.len() + hole.len() + 2);
  merged.extend_from_slice(&outer[..=outer_idx]);
  merged.extend(hole.iter().cycle().skip(hole_idx).take(hole.len()));
  merged.push(hole[hole_idx]);
  merged.push(outer[outer_idx]);
  merged.extend_from_slice(&outer[outer_idx + 1..]);
  Ok(merged)
}

/// Merge every hole into `outer`, one after the other. Each merge sees the
/// boundary produced by the previous one.
pub fn merge_holes<T, H>(outer: &[Point<T, 3>], holes: &[H]) -> Result<Vec<Point<T, 3>>, Error>
where
  T: PolygonScalar,
  H: AsRef<[Point<T, 3>]>,
{
  if outer.len() < 3 {
    return Err(Error::InvalidInput);
  }
  holes
    .iter()
    .try_fold(outer.to_vec(), |merged, hole| merge_hole(&merged, hole.as_ref()))
}

// Index of the point with the smallest x coordinate. First one wins ties.
fn leftmost<T: PolygonScalar>(pts: &[Point<T, 3>]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| float_cmp(a.x_coord(), b.x_coord()))
    .map(|(idx, _)| idx)
}

// Index of the point closest to `target`. First one wins ties.
fn nearest<T: PolygonScalar>(target: &Point<T, 3>, pts: &[Point<T, 3>]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| float_cmp(&a.distance(target), &b.distance(target)))
    .map(|(idx, _)| idx)
}

// Incomparable values count as equal.
fn float_cmp<T: PolygonScalar>(a: &T, b: &T) -> Ordering {
  a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
