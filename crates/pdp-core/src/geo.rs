//! Planar coordinate type.
//!
//! `Point` uses `f64` coordinates expressed in the distance unit of the
//! scenario that owns it.  Unlike raw floats it has full value semantics
//! (`Eq + Hash`) so it can live inside hashed, comparable scenario values:
//! equality and hashing both go through the same canonical bit pattern, with
//! `-0.0` folded onto `0.0`.  NaN coordinates are rejected by every
//! validating constructor that stores a `Point`.

use std::hash::{Hash, Hasher};

/// A point in the plane.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `true` if `self` lies inside the rectangle spanned by `min` and `max`
    /// (inclusive on all edges).
    #[inline]
    pub fn within(self, min: Point, max: Point) -> bool {
        (min.x..=max.x).contains(&self.x) && (min.y..=max.y).contains(&self.y)
    }
}

/// Bit pattern used for both equality and hashing of `f64` fields.
#[inline]
pub fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.x) == canonical_bits(other.x)
            && canonical_bits(self.y) == canonical_bits(other.y)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
