#[cfg(test)]
mod tests {
  use crate::algorithms::triangulation::Tessellate;
  use crate::algorithms::*;
  use crate::data::*;
  use crate::testing::*;

  use proptest::prelude::*;

  // Lift a counter-clockwise 2D loop into the plane perpendicular to `axis`
  // so that projecting it gives the 2D loop back.
  fn lift(pts: &[Point<f64, 2>], axis: usize, offset: f64) -> Vec<Point<f64, 3>> {
    let mirrored: Vec<Point<f64, 2>> = pts
      .iter()
      .map(|pt| {
        let [u, v] = pt.array;
        match axis {
          0 | 1 => Point::new([-u, v]),
          _ => Point::new([u, -v]),
        }
      })
      .collect();
    embed_in_axis_plane(&mirrored, axis, offset)
  }

  #[test]
  fn lift_round_trips_through_projection() {
    let square = vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([2.0, 1.0]),
      Point::new([0.0, 1.0]),
    ];
    for axis in 0..3 {
      assert_eq!(project(&lift(&square, axis, 7.0)).unwrap(), square);
    }
  }

  proptest! {
    #[test]
    fn outline_matches_planar_triangulation(
      poly in convex_polygon(3..20),
      axis in 0..3_usize,
      offset in -10.0..10.0_f64,
      flipped in any::<bool>()
    ) {
      let outline = Outline::new(lift(&poly, axis, offset));
      let mesh = outline.tessellate(flipped).unwrap();
      prop_assert_eq!(&mesh.points[..], outline.boundary());
      prop_assert_eq!(mesh.triangulation, triangulate(&poly, flipped).unwrap());
    }
  }

  #[test]
  fn hole_with_too_few_points() {
    let outline = Outline::new(vec![
      Point::new([0.0, 0.0, 0.0]),
      Point::new([0.0, 1.0, 0.0]),
      Point::new([1.0, 1.0, 0.0]),
    ])
    .with_hole(vec![Point::new([0.2, 0.2, 0.0]), Point::new([0.3, 0.2, 0.0])]);
    assert_eq!(outline.tessellate(false), Err(crate::Error::InvalidInput));
  }
}
