use super::{check_distinct, record, IntersectionMap};
use crate::data::{Segment, SegmentIntersection};
use crate::Intersects;
use crate::{Error, SweepScalar};

/// Find every point where two or more segments meet, by probing all pairs.
///
/// Same contract and result as
/// [`bentley_ottmann::segment_intersections`](super::bentley_ottmann::segment_intersections):
/// point-form meetings are recorded at their point, collinear overlaps at
/// their two boundary points.
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_intersections<T: SweepScalar>(
  segments: &[Segment<T>],
) -> Result<IntersectionMap<T>, Error> {
  check_distinct(segments)?;
  let mut result = IntersectionMap::new();
  for a in 0..segments.len() {
    for b in 0..a {
      match (&segments[a]).intersect(&segments[b]) {
        Some(SegmentIntersection::Point(v)) => record(&mut result, v, &[b, a]),
        Some(SegmentIntersection::Overlap(overlap)) => {
          record(&mut result, overlap.upper().clone(), &[b, a]);
          record(&mut result, overlap.lower().clone(), &[b, a]);
        }
        None => {}
      }
    }
  }
  Ok(result)
}
