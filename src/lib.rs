//! Line segment intersection reporting via a Bentley-Ottmann plane sweep.
//!
//! The headline entry point is
//! [`algorithms::segment_intersections`](crate::algorithms::segment_intersections),
//! which takes a set of [`Segment`](crate::data::Segment)s and returns every
//! point where two or more of them meet, together with the segments meeting
//! there. A quadratic baseline lives in
//! [`algorithms::intersection::naive`](crate::algorithms::intersection::naive).
//!
//! All geometric decisions are delegated to the [`SweepScalar`] kernel. The
//! exact kernels (`BigRational`, `Rational64`, `Rational32`) guarantee the
//! reported points and their segment sets are exact; the wrapped floating
//! point kernels use adaptive-precision orientation tests but inexact
//! coordinate arithmetic, so degenerate inputs may be classified differently.
#![deny(clippy::cast_lossless)]
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;

pub mod algorithms;
pub mod data;
mod intersection;
mod orientation;

pub use intersection::Intersects;
pub use orientation::Orientation;

use data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A segment's endpoints coincide; the sweep invariants assume
  /// nondegenerate segments.
  ZeroLengthSegment,
  /// The same segment (after endpoint normalization) appears twice in the
  /// input.
  DuplicateSegment,
  /// The sweep state contradicted the event classification. The invocation
  /// is aborted: a corrupted status order would invalidate every subsequent
  /// step.
  InvariantViolation,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::ZeroLengthSegment => write!(f, "Zero-length segment"),
      Error::DuplicateSegment => write!(f, "Duplicate segment"),
      Error::InvariantViolation => write!(f, "Sweep invariant violation"),
    }
  }
}

/// Numeric kernel of the sweep.
///
/// `cmp_slope` is the orientation predicate: `Greater` means walking
/// `p -> q -> r` turns counter-clockwise (a left turn). Coordinate
/// arithmetic (ordering keys, intersection points) uses the `Div` impl, so
/// kernels are expected to be fields; integers are deliberately not
/// supported.
pub trait SweepScalar:
  Debug
  + Clone
  + Ord
  + Zero
  + Add<Output = Self>
  + Sub<Output = Self>
  + Mul<Output = Self>
  + Div<Output = Self>
  + Neg<Output = Self>
{
  fn cmp_slope(p: &Point<Self>, q: &Point<Self>, r: &Point<Self>) -> Ordering;
}

macro_rules! exact_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl SweepScalar for $ty {
        fn cmp_slope(p: &Point<$ty>, q: &Point<$ty>, r: &Point<$ty>) -> Ordering {
          let slope1 = (&r.y - &q.y) * (&q.x - &p.x);
          let slope2 = (&q.y - &p.y) * (&r.x - &q.x);
          slope1.cmp(&slope2)
        }
      }
    )*
  };
}

macro_rules! robust_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl SweepScalar for $ty {
        // Adaptive exact orientation; everything else in this kernel is
        // plain floating point arithmetic.
        fn cmp_slope(p: &Point<$ty>, q: &Point<$ty>, r: &Point<$ty>) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p.x.into_inner() as f64, p.y.into_inner() as f64],
            [q.x.into_inner() as f64, q.y.into_inner() as f64],
            [r.x.into_inner() as f64, r.y.into_inner() as f64],
          );
          if orient > 0.0 {
            Ordering::Greater
          } else if orient < 0.0 {
            Ordering::Less
          } else {
            Ordering::Equal
          }
        }
      }
    )*
  };
}

exact_precision!(num::BigRational, num_rational::Rational64, num_rational::Rational32);
robust_floating_precision!(ordered_float::OrderedFloat<f32>, ordered_float::OrderedFloat<f64>);
