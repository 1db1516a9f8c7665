//! Cubic Bezier segment.

use bezray_core::{BezError, BoundingBox, ProjectionSettings, Result, SquaredDistance, Validate};
use bezray_math::{DMat4, Point3, Ray, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::projection::{self, RayProjection};

/// A cubic Bezier segment, parameterized over `[0, 1]`.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the handles. The control
/// points are fixed at construction; transforming a segment yields a new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    points: [Point3; 4],
}

impl CubicSegment {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    pub fn from_points(points: [Point3; 4]) -> Self {
        Self { points }
    }

    /// Build a segment from the xyz parts of the four matrix columns.
    pub fn from_matrix(m: &DMat4) -> Self {
        Self::new(
            m.x_axis.truncate(),
            m.y_axis.truncate(),
            m.z_axis.truncate(),
            m.w_axis.truncate(),
        )
    }

    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    pub fn start(&self) -> Point3 {
        self.points[0]
    }

    pub fn end(&self) -> Point3 {
        self.points[3]
    }

    /// Apply `m` to every control point.
    ///
    /// Bezier curves are affine invariant, so the result traces the transformed curve.
    pub fn transformed(&self, m: &DMat4) -> Self {
        Self {
            points: self.points.map(|p| m.transform_point3(p)),
        }
    }

    /// De Casteljau evaluation.
    pub fn position(&self, t: f64) -> Point3 {
        let [p0, p1, p2, p3] = self.points;
        let a = p0.lerp(p1, t);
        let b = p1.lerp(p2, t);
        let c = p2.lerp(p3, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// First derivative. Scaled by the parametric speed, not normalized.
    pub fn tangent(&self, t: f64) -> Vector3 {
        let [e0, e1, e2] = self.edges();
        let a = e0.lerp(e1, t);
        let b = e1.lerp(e2, t);
        a.lerp(b, t)
    }

    /// Second derivative.
    pub fn acceleration(&self, t: f64) -> Vector3 {
        let [a0, a1] = self.second_differences();
        a0.lerp(a1, t)
    }

    /// Third derivative, constant over the whole segment.
    pub fn jerk(&self) -> Vector3 {
        let [a0, a1] = self.second_differences();
        a1 - a0
    }

    /// Find the point on the segment nearest to `target` (usually a [`Ray`]).
    ///
    /// Runs exactly `iterations` bracket refinement rounds; see
    /// [`projection::project_ray`] for the search itself.
    pub fn project_ray<T>(&self, target: &T, iterations: u32) -> RayProjection
    where
        T: SquaredDistance<Point = Point3> + ?Sized,
    {
        projection::project_ray(self, target, iterations)
    }

    pub fn project_ray_with<T>(
        &self,
        target: &T,
        settings: &ProjectionSettings,
    ) -> RayProjection
    where
        T: SquaredDistance<Point = Point3> + ?Sized,
    {
        self.project_ray(target, settings.iterations)
    }

    /// Project many rays against this segment in parallel.
    pub fn project_rays(&self, rays: &[Ray], iterations: u32) -> Vec<RayProjection> {
        rays.par_iter()
            .map(|ray| self.project_ray(ray, iterations))
            .collect()
    }

    /// Hodograph control points: `3 * (p[i+1] - p[i])`.
    fn edges(&self) -> [Vector3; 3] {
        let [p0, p1, p2, p3] = self.points;
        [(p1 - p0) * 3.0, (p2 - p1) * 3.0, (p3 - p2) * 3.0]
    }

    fn second_differences(&self) -> [Vector3; 2] {
        let [e0, e1, e2] = self.edges();
        [(e1 - e0) * 2.0, (e2 - e1) * 2.0]
    }
}

impl From<[Point3; 4]> for CubicSegment {
    fn from(points: [Point3; 4]) -> Self {
        Self::from_points(points)
    }
}

impl TryFrom<&[Point3]> for CubicSegment {
    type Error = BezError;

    fn try_from(points: &[Point3]) -> Result<Self> {
        let points: [Point3; 4] = points.try_into().map_err(|_| {
            BezError::InvalidInput(format!(
                "cubic segment needs exactly 4 control points, got {}",
                points.len()
            ))
        })?;
        Ok(Self::from_points(points))
    }
}

impl Curve for CubicSegment {
    fn point_at(&self, t: f64) -> Point3 {
        self.position(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.tangent(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.start() == self.end()
    }
}

/// Box around the control polygon. The convex hull property makes it a bound
/// for every point on `[0, 1]`.
impl BoundingBox for CubicSegment {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let [p0, p1, p2, p3] = self.points;
        (p0.min(p1).min(p2).min(p3), p0.max(p1).max(p2).max(p3))
    }
}

impl Validate for CubicSegment {
    fn validate(&self) -> Result<()> {
        match self.points.iter().position(|p| !p.is_finite()) {
            Some(i) => Err(BezError::Geometry(format!(
                "control point p{} is not finite: {}",
                i, self.points[i]
            ))),
            None => Ok(()),
        }
    }
}
