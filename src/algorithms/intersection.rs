//! Line segment intersection reporting.
//!
//! Two interchangeable implementations over the same contract:
//! [`bentley_ottmann`] (the plane sweep) and [`naive`] (the quadratic
//! baseline the sweep is tested against). Both take the input segments by
//! slice and identify segments by their index into it.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::{Point, Segment};
use crate::{Error, SweepScalar};

pub mod bentley_ottmann;
pub mod naive;

mod event_schedule;
mod sweep_status;

/// Every point where at least two input segments meet, mapped to the
/// sorted, deduplicated indices of all segments through that point.
pub type IntersectionMap<T> = BTreeMap<Point<T>, Vec<usize>>;

// Input validation shared by both implementations. Zero-length segments are
// unrepresentable (rejected by `Segment::new`), so only duplicates remain
// to be checked.
pub(crate) fn check_distinct<T: SweepScalar>(segments: &[Segment<T>]) -> Result<(), Error> {
  let mut seen = BTreeSet::new();
  for seg in segments {
    if !seen.insert((seg.upper(), seg.lower())) {
      return Err(Error::DuplicateSegment);
    }
  }
  Ok(())
}

pub(crate) fn record<T: SweepScalar>(map: &mut IntersectionMap<T>, point: Point<T>, ids: &[usize]) {
  let entry = map.entry(point).or_default();
  entry.extend_from_slice(ids);
  entry.sort_unstable();
  entry.dedup();
}
