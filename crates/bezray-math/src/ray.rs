use bezray_core::{BezError, Result, SquaredDistance};
use serde::{Deserialize, Serialize};

use crate::{Point3, Vector3};

/// A half-line in 3D space: every point `origin + s * direction` with `s >= 0`.
///
/// `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Like [`Ray::new`], but rejects directions that cannot be normalized.
    pub fn try_new(origin: Point3, direction: Vector3) -> Result<Self> {
        match direction.try_normalize() {
            Some(direction) if origin.is_finite() => Ok(Self { origin, direction }),
            Some(_) => Err(BezError::Geometry(format!(
                "ray origin is not finite: {origin}"
            ))),
            None => Err(BezError::Geometry(format!(
                "ray direction cannot be normalized: {direction}"
            ))),
        }
    }

    /// Ray starting at `origin` and passing through `target`.
    pub fn through(origin: Point3, target: Point3) -> Result<Self> {
        Self::try_new(origin, target - origin)
    }

    pub fn at(&self, s: f64) -> Point3 {
        self.origin + self.direction * s
    }

    /// Ray parameter of the point on the ray nearest to `point`.
    pub fn project(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.direction).max(0.0)
    }

    pub fn closest_point(&self, point: Point3) -> Point3 {
        self.at(self.project(point))
    }

    pub fn distance_squared_to_point(&self, point: Point3) -> f64 {
        (point - self.closest_point(point)).length_squared()
    }

    pub fn distance_to_point(&self, point: Point3) -> f64 {
        self.distance_squared_to_point(point).sqrt()
    }
}

impl SquaredDistance for Ray {
    type Point = Point3;

    fn squared_distance(&self, point: Point3) -> f64 {
        self.distance_squared_to_point(point)
    }
}
