/// Pairwise intersection test.
///
/// `None` means the two objects are disjoint; `Some` carries the shape of
/// the intersection. The segment impl lives in
/// [`data::line_segment`](crate::data).
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
