use std::fmt;
use tracing::{debug, warn};

use crate::data::{Point, TriangleView};
use crate::Error;
use crate::PolygonScalar;

// Ear clipping over a circular linked list of the vertices that are still
// part of the polygon:
//
// While more than 3 vertices remain:
//   Walk the list from its head and take the first vertex that is an ear:
//     the turn prev -> vertex -> next is a left turn, and
//     no other remaining vertex lies in the triangle (prev, vertex, next).
//   If there is one:
//     Emit the triangle and unlink the vertex.
//   Otherwise:
//     Give up and keep what has been emitted so far.
// Emit the last 3 vertices as one triangle.
//
// Every pass is O(n^2), so the whole thing is O(n^3). Meant for hand-authored
// outlines, not large meshes.

/// Why a triangulation stopped before the polygon was fully covered.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incomplete {
  /// A full pass over the remaining vertices found no ear. These vertices were
  /// left out of the output.
  NoEarFound { remaining: usize },
}

impl fmt::Display for Incomplete {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Incomplete::NoEarFound { remaining } => write!(
        f,
        "No ear found with {} vertices left. Ensure points are ordered clockwise and holes are counter-clockwise",
        remaining
      ),
    }
  }
}

/// Triangle indices produced by [`triangulate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangulation {
  indices: Vec<usize>,
  incomplete: Option<Incomplete>,
}

impl Triangulation {
  /// Flat list of point indices, three per triangle.
  pub fn indices(&self) -> &[usize] {
    &self.indices
  }

  pub fn into_indices(self) -> Vec<usize> {
    self.indices
  }

  pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
    self
      .indices
      .chunks_exact(3)
      .map(|tri| [tri[0], tri[1], tri[2]])
  }

  /// Number of triangles.
  pub fn len(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.indices.is_empty()
  }

  /// False if clipping got stuck. The triangles produced before that point are
  /// still available.
  pub fn is_complete(&self) -> bool {
    self.incomplete.is_none()
  }

  pub fn incomplete(&self) -> Option<Incomplete> {
    self.incomplete
  }
}

// A clipped ear. `origin` is the vertex that was removed.
#[derive(Debug, Clone, Copy)]
struct Ear {
  origin: usize,
  prev: usize,
  next: usize,
}

/// Triangulate a simple polygon by ear clipping.
///
/// Convex vertices must turn left, i.e. `points` is counter-clockwise in a
/// y-up frame. [`project`](crate::algorithms::project) produces this winding
/// from a clockwise 3D outline. Vertices are examined in input order and the
/// first ear found is clipped, so the output is deterministic.
///
/// Each triangle is emitted as `(prev, ear, next)`. With `flipped` set, the
/// whole index list is reversed, which flips the winding of every triangle and
/// also reverses their order.
///
/// A polygon of `n` points yields `n - 2` triangles. If clipping gets stuck,
/// typically because of the wrong winding, the triangles found so far are
/// returned and [`Triangulation::incomplete`] says why.
///
/// # Errors
///
/// [`Error::InvalidInput`] if fewer than three points are given.
///
/// # Examples
///
/// ```rust
/// # use earclipper::algorithms::triangulate;
/// # use earclipper::data::Point;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([1.0, 1.0]),
///   Point::new([0.0, 1.0]),
/// ];
/// let triangulation = triangulate(&square, false).unwrap();
/// assert_eq!(triangulation.indices(), &[3, 0, 1, 1, 2, 3]);
/// ```
pub fn triangulate<T>(points: &[Point<T, 2>], flipped: bool) -> Result<Triangulation, Error>
where
  T: PolygonScalar,
{
  if points.len() < 3 {
    return Err(Error::InvalidInput);
  }

  let mut vertices = List::new(points.len());
  let mut ears = Vec::with_capacity(points.len() - 2);
  let mut incomplete = None;
  while vertices.len() > 3 {
    match find_ear(points, &vertices) {
      Some(ear) => {
        vertices.delete(ear.origin);
        ears.push(ear);
      }
      None => {
        let reason = Incomplete::NoEarFound {
          remaining: vertices.len(),
        };
        warn!(remaining = vertices.len(), clipped = ears.len(), "{}", reason);
        incomplete = Some(reason);
        break;
      }
    }
  }

  if vertices.len() == 3 {
    let [prev, origin, next] = vertices.first_three();
    ears.push(Ear { origin, prev, next });
  }

  let mut indices: Vec<usize> = ears
    .iter()
    .flat_map(|ear| [ear.prev, ear.origin, ear.next])
    .collect();
  if flipped {
    indices.reverse();
  }

  debug!(
    points = points.len(),
    triangles = ears.len(),
    "triangulated polygon"
  );
  Ok(Triangulation {
    indices,
    incomplete,
  })
}

fn find_ear<T>(points: &[Point<T, 2>], vertices: &List) -> Option<Ear>
where
  T: PolygonScalar,
{
  vertices.iter().find_map(|origin| {
    let prev = vertices.prev(origin);
    let next = vertices.next(origin);
    if is_ear(points, vertices, prev, origin, next) {
      Some(Ear { origin, prev, next })
    } else {
      None
    }
  })
}

fn is_ear<T>(points: &[Point<T, 2>], vertices: &List, a: usize, b: usize, c: usize) -> bool
where
  T: PolygonScalar,
{
  let trig = TriangleView::new([&points[a], &points[b], &points[c]]);
  if !trig.orientation().is_ccw() {
    return false;
  }
  // Points sitting on a corner are skipped. Bridges put two copies of the
  // same point in the polygon.
  let tolerance = T::coincidence_tolerance();
  let on_corner = |pt: &Point<T, 2>| {
    [a, b, c]
      .iter()
      .any(|&corner| pt.distance(&points[corner]) < tolerance)
  };
  vertices
    .iter()
    .filter(|&idx| idx != a && idx != b && idx != c)
    .map(|idx| &points[idx])
    .filter(|pt| !on_corner(*pt))
    .all(|pt| !trig.contains(pt))
}


///////////////////////////////////////////////////////////////////////////////
// Circular linked list of the vertices that are still part of the polygon.

struct List {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
  len: usize,
}

impl List {
  fn new(size: usize) -> List {
    let mut prev = vec![0; size];
    let mut next = vec![0; size];
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    List {
      prev,
      next,
      head: 0,
      len: size,
    }
  }

  fn len(&self) -> usize {
    self.len
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    if self.head == vertex {
      self.head = next;
    }
    self.len -= 1;
  }

  // Remaining vertices in their original relative order.
  fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(Some(self.head), move |&vertex| Some(self.next[vertex])).take(self.len)
  }

  fn first_three(&self) -> [usize; 3] {
    let a = self.head;
    let b = self.next(a);
    [a, b, self.next(b)]
  }
}
