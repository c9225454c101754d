//! Planar geometry primitives used for deposit outlines and queries.
pub mod point;
pub mod polygon;

pub use point::Point2;
pub use polygon::{Bounds, Polygon};
