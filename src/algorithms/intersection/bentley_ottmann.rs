//! Bentley-Ottmann sweep-line intersection reporting.
//!
//! A conceptual horizontal line sweeps the plane top to bottom. Algorithm
//! state is defined relative to its current position:
//!
//! 1. **Event schedule** - the pending event points (segment endpoints plus
//!    discovered intersections), ordered by decreasing `y` and then
//!    increasing `x`, duplicate-free.
//! 2. **Status structure** - the segments currently crossing the sweep
//!    line, ordered left to right at the current position.
//! 3. **Processing** - each event point `p` is handled atomically: the
//!    segments through `p` are classified into those whose upper endpoint,
//!    lower endpoint, or interior meets `p`; the status structure is
//!    updated; and the segments that became adjacent are probed for future
//!    intersections, which are fed back into the schedule.
//! 4. **Reporting** - every event point with more than one segment through
//!    it becomes an entry of the result map, carrying all of them.
//!
//! With balanced containers backing both structures the classic bound is
//! `O((n + k) log n)` for `n` segments and `k` reported points; this
//! implementation keeps the status as an order-maintained vector, trading
//! the worst-case bound for simpler invariants (neighbor queries stay
//! logarithmic or better, membership updates are linear).
//!
//! Degenerate inputs are expected, not errors: vertical and horizontal
//! segments, shared endpoints, three or more segments through one point,
//! and collinear overlaps all take explicit branches. A collinear overlap
//! never schedules an event - only point-form intersections drive the
//! sweep - but its boundary points are still reported, because each is an
//! endpoint event whose segment census finds both segments.
use std::collections::BTreeMap;

use super::event_schedule::EventSchedule;
use super::sweep_status::SweepStatus;
use super::{check_distinct, record, IntersectionMap};
use crate::data::{Point, Segment, SegmentIntersection};
use crate::Intersects;
use crate::{Error, SweepScalar};

/// Find every point where two or more segments meet.
///
/// Returns a map from each such point to the indices of all input segments
/// through it (crossing, touching, or ending there). Fails before sweeping
/// on duplicate input segments, and aborts with
/// [`Error::InvariantViolation`] if the status structure ever contradicts
/// the event classification - a corrupted sweep order would silently
/// invalidate every later report.
///
/// ```rust
/// # use planesweep::data::{Point, Segment};
/// # use planesweep::algorithms::segment_intersections;
/// # use num_rational::Rational64;
/// let point = |x, y| Point::new(Rational64::from_integer(x), Rational64::from_integer(y));
/// let segments = vec![
///   Segment::new(point(0, 0), point(2, 2))?,
///   Segment::new(point(0, 2), point(2, 0))?,
/// ];
/// let found = segment_intersections(&segments)?;
/// assert_eq!(found[&point(1, 1)], vec![0, 1]);
/// # Ok::<(), planesweep::Error>(())
/// ```
pub fn segment_intersections<T: SweepScalar>(
  segments: &[Segment<T>],
) -> Result<IntersectionMap<T>, Error> {
  check_distinct(segments)?;

  let mut schedule = EventSchedule::new();
  let mut upper_index: BTreeMap<Point<T>, Vec<usize>> = BTreeMap::new();
  for (idx, seg) in segments.iter().enumerate() {
    schedule.insert_if_absent(seg.upper().clone());
    schedule.insert_if_absent(seg.lower().clone());
    upper_index.entry(seg.upper().clone()).or_default().push(idx);
  }

  let mut status = SweepStatus::new(segments);
  let mut result = IntersectionMap::new();

  while let Some(p) = schedule.pop_minimum() {
    status.set_sweep_point(p.clone());

    // U(p): segments whose upper endpoint is p. Not yet active.
    let uppers: &[usize] = upper_index.get(&p).map(Vec::as_slice).unwrap_or(&[]);

    // L(p) and I(p): active segments ending at, or passing through, p.
    let mut lowers = Vec::new();
    let mut interior = Vec::new();
    for idx in status.segments_containing(&p).collect::<Vec<usize>>() {
      if segments[idx].lower() == &p {
        lowers.push(idx);
      } else if segments[idx].upper() != &p {
        interior.push(idx);
      }
    }

    if uppers.len() + lowers.len() + interior.len() > 1 {
      let mut meeting = uppers.to_vec();
      meeting.extend_from_slice(&lowers);
      meeting.extend_from_slice(&interior);
      record(&mut result, p.clone(), &meeting);
    }

    // Segments through p leave the structure; those continuing below
    // re-enter at the position the new sweep line dictates. The ordering
    // key is never updated in place, so removal and re-insertion is
    // mandatory, not an optimization.
    for &idx in lowers.iter().chain(interior.iter()) {
      if !status.remove(idx) {
        return Err(Error::InvariantViolation);
      }
    }
    for &idx in uppers.iter().chain(interior.iter()) {
      if !status.insert(idx) {
        return Err(Error::InvariantViolation);
      }
    }

    if uppers.is_empty() && interior.is_empty() {
      // Pure lower-endpoint event: the departed segments expose their
      // former neighbors to each other.
      if let (Some(left), Some(right)) = status.straddling_neighbors(&p) {
        probe(segments, left, right, &p, &mut schedule);
      }
    } else {
      // The freshly placed block is contiguous at p; only its outer edges
      // can meet anything new.
      let mut fresh = uppers.to_vec();
      fresh.extend_from_slice(&interior);
      let leftmost = status.iter().find(|idx| fresh.contains(idx));
      let rightmost = status.iter().rev().find(|idx| fresh.contains(idx));
      if let Some(leftmost) = leftmost {
        if let Some(outer) = status.left_neighbor(leftmost) {
          probe(segments, outer, leftmost, &p, &mut schedule);
        }
      }
      if let Some(rightmost) = rightmost {
        if let Some(outer) = status.right_neighbor(rightmost) {
          probe(segments, rightmost, outer, &p, &mut schedule);
        }
      }
    }
  }

  Ok(result)
}

// Schedules the intersection of a newly adjacent pair, if there is one and
// the sweep has not passed it. Collinear overlaps never schedule events.
fn probe<T: SweepScalar>(
  segments: &[Segment<T>],
  a: usize,
  b: usize,
  current: &Point<T>,
  schedule: &mut EventSchedule<T>,
) {
  if let Some(SegmentIntersection::Point(v)) = (&segments[a]).intersect(&segments[b]) {
    let ahead = v.y < current.y || (v.y == current.y && v.x > current.x);
    if ahead {
      schedule.insert_if_absent(v);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::intersection::naive;
  use num::BigRational;
  use num_rational::Rational64;
  use proptest::prelude::*;
  use std::collections::{BTreeMap, BTreeSet};

  type Scalar = Rational64;

  fn point(coords: (i64, i64)) -> Point<Scalar> {
    let (x, y) = coords;
    Point::new(Scalar::from_integer(x), Scalar::from_integer(y))
  }

  fn segment(a: (i64, i64), b: (i64, i64)) -> Segment<Scalar> {
    Segment::new(point(a), point(b)).unwrap()
  }

  // Index-free view of a result map, for comparing runs over permuted
  // inputs.
  fn by_geometry(
    segments: &[Segment<Scalar>],
    found: &IntersectionMap<Scalar>,
  ) -> BTreeMap<Point<Scalar>, BTreeSet<(Point<Scalar>, Point<Scalar>)>> {
    found
      .iter()
      .map(|(point, ids)| {
        let set = ids
          .iter()
          .map(|&idx| (*segments[idx].upper(), *segments[idx].lower()))
          .collect();
        (point.clone(), set)
      })
      .collect()
  }

  #[test]
  fn disjoint_segments_yield_nothing() {
    let segments = vec![segment((0, 0), (1, 0)), segment((2, 0), (3, 0))];
    let found = segment_intersections(&segments).unwrap();
    assert!(found.is_empty());
  }

  #[test]
  fn single_segment_yields_nothing() {
    let segments = vec![segment((0, 0), (1, 1))];
    assert!(segment_intersections(&segments).unwrap().is_empty());
  }

  #[test]
  fn empty_input_yields_nothing() {
    let segments: Vec<Segment<Scalar>> = vec![];
    assert!(segment_intersections(&segments).unwrap().is_empty());
  }

  #[test]
  fn single_crossing() {
    let segments = vec![segment((0, 0), (2, 2)), segment((0, 2), (2, 0))];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> =
      vec![(point((1, 1)), vec![0, 1])].into_iter().collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn three_segments_through_one_point() {
    let segments = vec![
      segment((0, 0), (2, 2)),
      segment((0, 2), (2, 0)),
      segment((1, 1), (3, 1)),
    ];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> =
      vec![(point((1, 1)), vec![0, 1, 2])].into_iter().collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn t_junction_on_interior() {
    let segments = vec![segment((0, 0), (4, 0)), segment((2, 0), (2, 2))];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> =
      vec![(point((2, 0)), vec![0, 1])].into_iter().collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn duplicate_input_is_rejected() {
    let segments = vec![segment((0, 0), (2, 2)), segment((2, 2), (0, 0))];
    assert_eq!(segment_intersections(&segments), Err(Error::DuplicateSegment));
  }

  #[test]
  fn vertical_crossing() {
    let segments = vec![segment((1, -1), (1, 2)), segment((0, 0), (3, 0))];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> =
      vec![(point((1, 0)), vec![0, 1])].into_iter().collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn pairwise_distinct_crossings() {
    let segments = vec![
      segment((0, 6), (6, 0)),
      segment((0, 0), (6, 6)),
      segment((0, 4), (6, 4)),
    ];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> = vec![
      (point((2, 4)), vec![0, 2]),
      (point((3, 3)), vec![0, 1]),
      (point((4, 4)), vec![1, 2]),
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn collinear_overlap_reports_boundaries_only() {
    let segments = vec![segment((0, 0), (3, 0)), segment((1, 0), (4, 0))];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> = vec![
      (point((1, 0)), vec![0, 1]),
      (point((3, 0)), vec![0, 1]),
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn three_collinear_overlapping_segments() {
    let segments = vec![
      segment((0, 0), (2, 0)),
      segment((1, 0), (3, 0)),
      segment((2, 0), (4, 0)),
    ];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> = vec![
      (point((1, 0)), vec![0, 1]),
      (point((2, 0)), vec![0, 1, 2]),
      (point((3, 0)), vec![1, 2]),
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn crossing_found_through_neighbor_swap() {
    // The two crossing segments only become adjacent after the middle one
    // ends, so the event is discovered by the pure-lower probe.
    let segments = vec![
      segment((0, 4), (4, -4)),
      segment((2, 4), (2, 1)),
      segment((4, 4), (0, -4)),
    ];
    let found = segment_intersections(&segments).unwrap();
    let expected: IntersectionMap<Scalar> =
      vec![(point((2, 0)), vec![0, 2])].into_iter().collect();
    assert_eq!(found, expected);
  }

  #[test]
  fn input_order_does_not_matter() {
    let base = vec![
      segment((0, 0), (2, 2)),
      segment((0, 2), (2, 0)),
      segment((1, 1), (3, 1)),
      segment((0, 1), (3, 1)),
    ];
    let reference = by_geometry(&base, &segment_intersections(&base).unwrap());
    let permutations: Vec<Vec<usize>> = vec![
      vec![3, 2, 1, 0],
      vec![1, 3, 0, 2],
      vec![2, 0, 3, 1],
    ];
    for perm in permutations {
      let shuffled: Vec<Segment<Scalar>> = perm.iter().map(|&i| base[i]).collect();
      let found = by_geometry(&shuffled, &segment_intersections(&shuffled).unwrap());
      assert_eq!(found, reference);
    }
  }

  #[test]
  fn independent_runs_are_identical() {
    let segments = vec![
      segment((0, 0), (10, 10)),
      segment((0, 10), (10, 0)),
      segment((0, 5), (10, 5)),
      segment((2, 0), (2, 10)),
    ];
    let first = segment_intersections(&segments).unwrap();
    let second = segment_intersections(&segments).unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn every_report_lies_on_its_segments() {
    let segments = vec![
      segment((0, 0), (8, 8)),
      segment((0, 8), (8, 0)),
      segment((0, 3), (8, 3)),
      segment((5, 0), (5, 8)),
    ];
    let found = segment_intersections(&segments).unwrap();
    assert!(!found.is_empty());
    for (point, ids) in &found {
      assert!(ids.len() >= 2);
      for (idx, seg) in segments.iter().enumerate() {
        assert_eq!(ids.contains(&idx), seg.contains(point));
      }
    }
  }

  #[test]
  fn works_with_big_rationals() {
    let point = |x: i64, y: i64| Point::<BigRational>::from(Point::new(x, y));
    let segments = vec![
      Segment::new(point(0, 0), point(2, 2)).unwrap(),
      Segment::new(point(0, 2), point(2, 0)).unwrap(),
    ];
    let found = segment_intersections(&segments).unwrap();
    assert_eq!(found[&point(1, 1)], vec![0, 1]);
  }

  fn arb_segment() -> impl Strategy<Value = Segment<Scalar>> {
    let coord = -5..=5i64;
    (coord.clone(), coord.clone(), coord.clone(), coord).prop_filter_map(
      "non-degenerate segment",
      |(x1, y1, x2, y2)| Segment::new(point((x1, y1)), point((x2, y2))).ok(),
    )
  }

  proptest! {
    #[test]
    fn sweep_matches_naive(segments in prop::collection::vec(arb_segment(), 0..12)) {
      prop_assert_eq!(
        segment_intersections(&segments),
        naive::segment_intersections(&segments)
      );
    }

    #[test]
    fn reported_sets_are_exact(segments in prop::collection::vec(arb_segment(), 0..8)) {
      if let Ok(found) = segment_intersections(&segments) {
        for (point, ids) in &found {
          prop_assert!(ids.len() >= 2);
          for (idx, seg) in segments.iter().enumerate() {
            prop_assert_eq!(ids.contains(&idx), seg.contains(point));
          }
        }
      }
    }
  }
}
