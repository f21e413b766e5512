use std::cmp::Ordering;

use super::point;
use super::Point;
use crate::Intersects;
use crate::{Error, SweepScalar};
use crate::Orientation::*;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// A closed, nondegenerate line segment.
///
/// Endpoints are normalized at construction so that `upper` is the endpoint
/// the sweep line reaches first: greater `y`, ties broken by smaller `x`.
/// Segments are immutable once constructed; the sweep only ever changes
/// their membership in the status structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<T> {
  upper: Point<T>,
  lower: Point<T>,
}

impl<T> Segment<T> {
  pub fn upper(&self) -> &Point<T> {
    &self.upper
  }

  pub fn lower(&self) -> &Point<T> {
    &self.lower
  }
}

impl<T: Ord> Segment<T> {
  /// Rejects coincident endpoints: the sweep's classification invariants
  /// assume every segment spans two distinct event points.
  pub fn new(a: Point<T>, b: Point<T>) -> Result<Segment<T>, Error> {
    if a == b {
      return Err(Error::ZeroLengthSegment);
    }
    Ok(Segment::new_unchecked(a, b))
  }

  /// Normalizing constructor without the zero-length check. The caller
  /// guarantees `a != b`.
  pub fn new_unchecked(a: Point<T>, b: Point<T>) -> Segment<T> {
    match point::sweep_order(&a, &b) {
      Ordering::Greater => Segment { upper: b, lower: a },
      _ => Segment { upper: a, lower: b },
    }
  }

  pub fn is_vertical(&self) -> bool {
    self.upper.x == self.lower.x
  }

  pub fn is_horizontal(&self) -> bool {
    self.upper.y == self.lower.y
  }

  // Endpoints in lexicographic order; for collinear points lexicographic
  // betweenness is betweenness along the segment, vertical included.
  fn lex_endpoints(&self) -> (&Point<T>, &Point<T>) {
    if self.upper <= self.lower {
      (&self.upper, &self.lower)
    } else {
      (&self.lower, &self.upper)
    }
  }

  fn between(&self, pt: &Point<T>) -> bool {
    let (min, max) = self.lex_endpoints();
    min <= pt && pt <= max
  }
}

impl<T: SweepScalar> Segment<T> {
  /// Exact containment, endpoints included.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    Point::orient(&self.upper, &self.lower, pt).is_collinear() && self.between(pt)
  }

  /// The x-coordinate where this segment crosses the horizontal line at
  /// `y`: the status structure's ordering key. Vertical segments report
  /// their fixed x. Horizontal segments meet their own sweep line in an
  /// interval and report `upper.x` as the deterministic representative.
  pub fn x_at(&self, y: &T) -> T {
    if self.upper.y == self.lower.y {
      return self.upper.x.clone();
    }
    let dy = self.upper.y.clone() - self.lower.y.clone();
    let run = self.lower.x.clone() - self.upper.x.clone();
    let drop = self.upper.y.clone() - y.clone();
    self.upper.x.clone() + drop * run / dy
  }

  // Line-line intersection by determinants. Only called for a proper
  // crossing, so the denominator is non-zero.
  fn crossing_point(&self, other: &Segment<T>) -> Point<T> {
    let p1 = &self.upper;
    let p2 = &self.lower;
    let q1 = &other.upper;
    let q2 = &other.lower;
    let denom = (p1.x.clone() - p2.x.clone()) * (q1.y.clone() - q2.y.clone())
      - (p1.y.clone() - p2.y.clone()) * (q1.x.clone() - q2.x.clone());
    let part_a = p1.x.clone() * p2.y.clone() - p1.y.clone() * p2.x.clone();
    let part_b = q1.x.clone() * q2.y.clone() - q1.y.clone() * q2.x.clone();
    let x_num =
      part_a.clone() * (q1.x.clone() - q2.x.clone()) - (p1.x.clone() - p2.x.clone()) * part_b.clone();
    let y_num =
      part_a * (q1.y.clone() - q2.y.clone()) - (p1.y.clone() - p2.y.clone()) * part_b;
    Point::new(x_num / denom.clone(), y_num / denom)
  }
}

///////////////////////////////////////////////////////////////////////////////
// SegmentIntersection

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentIntersection<T> {
  /// The segments meet in a single point: a proper crossing, an endpoint
  /// lying on the other segment, or a collinear overlap that degenerates to
  /// one shared point.
  Point(Point<T>),
  /// The segments are collinear and share more than one point.
  Overlap(Segment<T>),
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a, T> Intersects for &'a Segment<T>
where
  T: SweepScalar,
{
  type Result = SegmentIntersection<T>;
  fn intersect(self, other: &'a Segment<T>) -> Option<SegmentIntersection<T>> {
    let a1 = &self.upper;
    let a2 = &self.lower;
    let b1 = &other.upper;
    let b2 = &other.lower;
    let l1_to_b1 = Point::orient(a1, a2, b1);
    let l1_to_b2 = Point::orient(a1, a2, b2);
    let l2_to_a1 = Point::orient(b1, b2, a1);
    let l2_to_a2 = Point::orient(b1, b2, a2);
    if l1_to_b1 == Collinear && l1_to_b2 == Collinear {
      // Same supporting line; clamp to the shared extent.
      let (self_min, self_max) = self.lex_endpoints();
      let (other_min, other_max) = other.lex_endpoints();
      let c_min = self_min.max(other_min);
      let c_max = self_max.min(other_max);
      match c_min.cmp(c_max) {
        Ordering::Less => Some(SegmentIntersection::Overlap(Segment::new_unchecked(
          c_min.clone(),
          c_max.clone(),
        ))),
        Ordering::Equal => Some(SegmentIntersection::Point(c_min.clone())),
        Ordering::Greater => None,
      }
    } else if l1_to_b1 == Collinear {
      if self.between(b1) {
        Some(SegmentIntersection::Point(b1.clone()))
      } else {
        None
      }
    } else if l1_to_b2 == Collinear {
      if self.between(b2) {
        Some(SegmentIntersection::Point(b2.clone()))
      } else {
        None
      }
    } else if l2_to_a1 == Collinear {
      if other.between(a1) {
        Some(SegmentIntersection::Point(a1.clone()))
      } else {
        None
      }
    } else if l2_to_a2 == Collinear {
      if other.between(a2) {
        Some(SegmentIntersection::Point(a2.clone()))
      } else {
        None
      }
    } else if l1_to_b1 == l1_to_b2.reverse() && l2_to_a1 == l2_to_a2.reverse() {
      Some(SegmentIntersection::Point(self.crossing_point(other)))
    } else {
      None
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
