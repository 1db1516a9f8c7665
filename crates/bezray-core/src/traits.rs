use crate::error::Result;

/// Validate that an entity holds usable (finite, well-formed) data.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Point;
    fn bounding_box(&self) -> (Self::Point, Self::Point);
}

/// Squared distance from a point to some target (a ray, a line, another point).
///
/// This is the only capability the closest-point search needs from its target.
pub trait SquaredDistance {
    type Point;
    fn squared_distance(&self, point: Self::Point) -> f64;
}
