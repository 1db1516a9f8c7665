//! Bezray curves: cubic Bezier segments and closest-point-to-ray projection.

pub mod curve;
pub mod projection;

pub use curve::{CubicSegment, Curve};
pub use projection::RayProjection;
