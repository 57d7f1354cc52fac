//! Integer points and segments.
//!
//! Coordinates are `i64` but must have absolute value below [`COORD_LIMIT`]
//! so that differences and cross products fit in `i128`. The sweep rejects
//! points outside that range before doing any arithmetic.

use std::cmp::Ordering;
use std::fmt;

/// Points order lexicographically by `(x, y)`; the sweep runs in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// Exclusive bound on `|x|` and `|y|`.
pub const COORD_LIMIT: u64 = 1 << 62;

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Whether [`side`] can be evaluated on this point without overflow.
    pub fn in_range(&self) -> bool {
        self.x.unsigned_abs() < COORD_LIMIT && self.y.unsigned_abs() < COORD_LIMIT
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// `p - q` widened to `i128`.
#[inline]
pub fn minus(p: Point, q: Point) -> (i128, i128) {
    (p.x as i128 - q.x as i128, p.y as i128 - q.y as i128)
}

#[inline]
pub fn cross(p: (i128, i128), q: (i128, i128)) -> i128 {
    p.0 * q.1 - p.1 * q.0
}

/// Which side of the directed line `from -> to` the point `p` lies on:
/// `Greater` to the left, `Less` to the right, `Equal` on the line.
#[inline]
pub fn side(from: Point, to: Point, p: Point) -> Ordering {
    cross(minus(to, from), minus(p, from)).cmp(&0)
}

/// A segment stored as `(a, b)`. Sweep keys always have `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub const fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Whether the segment runs in sweep order.
    pub fn is_forward(&self) -> bool {
        self.a < self.b
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}
