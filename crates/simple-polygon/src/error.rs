use thiserror::Error;

use crate::geometry::{Point, Segment};

/// Two segments cross or overlap somewhere other than a shared endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("self-intersection: {first} {second}")]
pub struct IntersectionError {
    pub first: Segment,
    pub second: Segment,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("repeated vertex {0}")]
    RepeatedVertex(Point),
    #[error("vertex {0} is outside the supported coordinate range")]
    CoordinateOutOfRange(Point),
    #[error(transparent)]
    Intersection(#[from] IntersectionError),
    /// An edge closed without being found among the active edges. Only
    /// reachable if the comparator is inconsistent.
    #[error("edge {0} missing from the sweep line")]
    LostSegment(Segment),
}
