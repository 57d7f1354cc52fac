//! Self-intersection check for polygons with integer vertices.
//!
//! The active edges of a left-to-right sweep are kept in a
//! [`redblack::RbTree`] whose comparator fails when two edges cross, so the
//! tree operations themselves detect intersections.
//!
//! ```
//! use simple_polygon::{check_simple_polygon, Point, PolygonError};
//!
//! let square = [(0, 0), (2, 0), (2, 2), (0, 2)].map(Point::from);
//! assert!(check_simple_polygon(&square).is_ok());
//!
//! let bowtie = [(0, 0), (2, 2), (2, 0), (0, 2)].map(Point::from);
//! assert!(matches!(
//!     check_simple_polygon(&bowtie),
//!     Err(PolygonError::Intersection(_))
//! ));
//! ```

pub mod error;
pub mod geometry;
pub mod sweep;

pub use error::{IntersectionError, PolygonError};
pub use geometry::{Point, Segment, COORD_LIMIT};
pub use sweep::{check_simple_polygon, compare_segments};
