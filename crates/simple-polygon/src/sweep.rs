//! Shamos-Hoey style sweep over polygon edges.
//!
//! Edges are swept left to right in `(x, y)` order. The active edges are
//! kept in a [`RbTree`] ordered by [`compare_segments`]; the comparator
//! itself reports intersections, so every insert and lookup doubles as an
//! intersection test against the edges it is compared with.

use std::cmp::Ordering;

use log::{debug, trace};
use redblack::RbTree;

use crate::error::{IntersectionError, PolygonError};
use crate::geometry::{side, Point, Segment};

/// Orders two co-active forward segments by height.
///
/// Both segments must run left to right and share a vertical line that
/// crosses both interiors, and every endpoint must satisfy
/// [`Point::in_range`]. Returns `Less` if `s1` lies below `s2`, `Greater`
/// if above, `Equal` if they are the same segment, and an error if they
/// overlap or cross anywhere other than at a shared endpoint.
pub fn compare_segments(s1: &Segment, s2: &Segment) -> Result<Ordering, IntersectionError> {
    if s1 == s2 {
        return Ok(Ordering::Equal);
    }
    let (a, b) = (s1.a, s1.b);
    let (c, d) = (s2.a, s2.b);
    let a_side = side(c, d, a);
    let b_side = side(c, d, b);
    let c_side = side(a, b, c);
    let d_side = side(a, b, d);

    let crossing = || IntersectionError {
        first: *s1,
        second: *s2,
    };

    if c_side == Ordering::Equal && d_side == Ordering::Equal {
        Err(crossing())
    } else if a == c {
        Ok(b_side)
    } else if b == d {
        Ok(a_side)
    } else if a_side == b_side {
        Ok(a_side)
    } else if c_side == d_side {
        Ok(c_side.reverse())
    } else {
        Err(crossing())
    }
}

/// Checks that `polygon` does not touch or cross itself.
///
/// Vertices are taken in order with an implicit closing edge; at least
/// three distinct vertices are required.
pub fn check_simple_polygon(polygon: &[Point]) -> Result<(), PolygonError> {
    let result = sweep(polygon);
    if let Err(err) = &result {
        debug!("polygon with {} vertices rejected: {err}", polygon.len());
    }
    result
}

fn sweep(polygon: &[Point]) -> Result<(), PolygonError> {
    let n = polygon.len();
    if n < 3 {
        return Err(PolygonError::TooFewVertices(n));
    }
    if let Some(p) = polygon.iter().find(|p| !p.in_range()) {
        return Err(PolygonError::CoordinateOutOfRange(*p));
    }
    check_distinct(polygon)?;

    // Each edge appears once per direction; forward copies open it, backward
    // copies close it. Sorting puts closes before opens at a shared point.
    let mut events = Vec::with_capacity(2 * n);
    for (i, &p) in polygon.iter().enumerate() {
        let q = polygon[(i + 1) % n];
        events.push(Segment::new(p, q));
        events.push(Segment::new(q, p));
    }
    events.sort_unstable();

    let mut active = RbTree::with_capacity_and_comparator(n, compare_segments);
    for event in events {
        if event.is_forward() {
            active.insert(event, ())?;
            continue;
        }

        let edge = event.reversed();
        let node = active
            .find_node(&edge)?
            .ok_or(PolygonError::LostSegment(edge))?;
        let above = active.next_node(node).and_then(|n| active.key(n)).copied();
        active.remove_node(Some(node));

        // The edges around the removed one are now adjacent. Re-inserting
        // the upper one compares it against the lower one. Removal can move
        // entries between nodes, so the upper edge is looked up again.
        if let Some(above) = above {
            let node = active.find_node(&above)?;
            active.remove_node(node);
            active.insert(above, ())?;
        }
    }

    trace!("swept {} edges without intersection", n);
    Ok(())
}

fn check_distinct(polygon: &[Point]) -> Result<(), PolygonError> {
    let mut sorted = polygon.to_vec();
    sorted.sort_unstable();
    match sorted.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(PolygonError::RepeatedVertex(w[0])),
        None => Ok(()),
    }
}
