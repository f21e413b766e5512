use num_bigint::BigInt;
use num_rational::BigRational;
use std::cmp::Ordering;

use crate::Orientation;
use crate::SweepScalar;

/// A point in the plane.
///
/// Equality is exact value equality; there is no tolerance anywhere in this
/// crate. The derived `Ord` is lexicographic on `(x, y)` and is what orders
/// the keys of a result map. The sweep itself uses its own event ordering,
/// not this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point<T> {
  pub x: T,
  pub y: T,
}

impl<T> Point<T> {
  pub const fn new(x: T, y: T) -> Point<T> {
    Point { x, y }
  }

  /// Which way do you turn walking `p -> q -> r`?
  pub fn orient(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation
  where
    T: SweepScalar,
  {
    match T::cmp_slope(p, q, r) {
      Ordering::Less => Orientation::RightTurn,
      Ordering::Equal => Orientation::Collinear,
      Ordering::Greater => Orientation::LeftTurn,
    }
  }
}

/// The order in which the sweep line reaches points: decreasing `y`, then
/// increasing `x`. Shared by segment normalization and the event schedule
/// so the two can never disagree.
pub(crate) fn sweep_order<T: Ord>(a: &Point<T>, b: &Point<T>) -> Ordering {
  b.y.cmp(&a.y).then_with(|| a.x.cmp(&b.x))
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      x: point.0,
      y: point.1,
    }
  }
}

impl From<Point<i64>> for Point<BigRational> {
  fn from(point: Point<i64>) -> Point<BigRational> {
    Point {
      x: BigRational::from_integer(BigInt::from(point.x)),
      y: BigRational::from_integer(BigInt::from(point.y)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use num_rational::Rational64;

  fn point(x: i64, y: i64) -> Point<Rational64> {
    Point::new(Rational64::from_integer(x), Rational64::from_integer(y))
  }

  #[test]
  fn lexicographic_order() {
    assert!(point(0, 5) < point(1, 0));
    assert!(point(1, 0) < point(1, 1));
  }

  #[test]
  fn sweep_order_is_top_down_left_right() {
    assert_eq!(sweep_order(&point(9, 2), &point(0, 1)), Ordering::Less);
    assert_eq!(sweep_order(&point(1, 1), &point(2, 1)), Ordering::Less);
    assert_eq!(sweep_order(&point(2, 1), &point(2, 1)), Ordering::Equal);
  }

  #[test]
  fn turns() {
    assert_eq!(
      Point::orient(&point(0, 0), &point(1, 1), &point(2, 2)),
      Orientation::Collinear
    );
    assert_eq!(
      Point::orient(&point(0, 0), &point(0, 1), &point(2, 2)),
      Orientation::RightTurn
    );
    assert_eq!(
      Point::orient(&point(0, 0), &point(0, 1), &point(-2, 2)),
      Orientation::LeftTurn
    );
  }
}
