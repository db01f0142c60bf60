//! Pure geometry: point-in-ring containment and bounding rectangles.

mod bbox;
mod boundary;
mod contains;

pub use bbox::BoundingRectangle;
pub use boundary::rectangle_boundary;
pub use contains::{points_contain, ring_contains};
