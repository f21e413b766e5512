use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::data::point::sweep_order;
use crate::data::Point;

// A point keyed by the order in which the sweep line reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SweepOrdered<T>(Point<T>);

impl<T: Ord> PartialOrd for SweepOrdered<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for SweepOrdered<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    sweep_order(&self.0, &other.0)
  }
}

/// The ordered, duplicate-free collection of pending event points.
///
/// Seeded with every segment endpoint and dynamically extended with
/// discovered intersection points. Events carry no payload: which segments
/// participate in an event is recomputed when the event is processed, so
/// scheduling the same point through several discovery paths is harmless -
/// membership is keyed on the point alone.
#[derive(Debug, Default)]
pub(crate) struct EventSchedule<T> {
  pending: BTreeSet<SweepOrdered<T>>,
}

impl<T: Ord + Clone> EventSchedule<T> {
  pub fn new() -> EventSchedule<T> {
    EventSchedule {
      pending: BTreeSet::new(),
    }
  }

  /// Schedules `point` unless an equal point is already pending. Returns
  /// whether the point was newly scheduled.
  pub fn insert_if_absent(&mut self, point: Point<T>) -> bool {
    self.pending.insert(SweepOrdered(point))
  }

  /// Removes and returns the pending point the sweep reaches first:
  /// greatest `y`, ties resolved toward smaller `x`. `None` once the
  /// schedule is exhausted.
  pub fn pop_minimum(&mut self) -> Option<Point<T>> {
    let next = self.pending.iter().next().cloned()?;
    self.pending.remove(&next);
    Some(next.0)
  }

  pub fn is_empty(&self) -> bool {
    self.pending.is_empty()
  }

  pub fn len(&self) -> usize {
    self.pending.len()
  }
}
