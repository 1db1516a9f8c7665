//! Closest point on a cubic segment to a ray.

mod bracket;

use bezray_core::SquaredDistance;
use bezray_math::Point3;
use serde::{Deserialize, Serialize};

use crate::curve::CubicSegment;
use bracket::Bracket;

/// Result of projecting a ray onto a curve segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayProjection {
    /// Point on the segment at `time`.
    pub point: Point3,
    /// Distance from `point` to the ray.
    pub ray_distance: f64,
    /// Curve parameter in `[0, 1]`.
    pub time: f64,
}

/// Search the segment for the parameter whose point lies closest to `target`.
///
/// The search keeps a five-sample bracket over the parameter range, seeded at
/// `t = 0, 0.5, 1`. Every round samples the two midpoints, then narrows the
/// bracket to the best interior sample and its neighbours, halving its width.
/// Only distances are sampled, so the target's distance function need not be
/// differentiable.
///
/// Exactly `iterations` rounds run; there is no early exit. With zero rounds
/// the best of the three seeds is returned. The search is local: when the
/// distance along the curve has several minima it may settle on a worse one.
pub fn project_ray<T>(segment: &CubicSegment, target: &T, iterations: u32) -> RayProjection
where
    T: SquaredDistance<Point = Point3> + ?Sized,
{
    let sample = |t: f64| target.squared_distance(segment.position(t));

    let mut bracket = Bracket::seed(
        target.squared_distance(segment.start()),
        sample(0.5),
        target.squared_distance(segment.end()),
    );
    for _ in 0..iterations {
        bracket.fill_midpoints(sample);
        bracket.zoom();
    }

    let (time, distance_sq) = bracket.best();
    let ray_distance = distance_sq.sqrt();
    tracing::trace!(
        time,
        ray_distance,
        iterations,
        width = bracket.width(),
        "projected ray onto cubic segment"
    );

    RayProjection {
        point: segment.position(time),
        ray_distance,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezray_math::{DVec3, Ray};

    fn arch() -> CubicSegment {
        CubicSegment::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 2.0, 0.0),
            DVec3::new(2.0, 2.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        )
    }

    /// Squared distance to a fixed point, for checking the search against a known minimum.
    struct Target(Point3);

    impl SquaredDistance for Target {
        type Point = Point3;

        fn squared_distance(&self, point: Point3) -> f64 {
            (point - self.0).length_squared()
        }
    }

    #[test]
    fn test_vertical_ray_through_peak() {
        let ray = Ray::new(DVec3::new(1.5, -1.0, 0.0), DVec3::new(0.0, 1.0, 0.0));
        let result = arch().project_ray(&ray, 10);
        assert!((result.time - 0.5).abs() < 1e-3);
        assert!(result.ray_distance < 1e-6);
        assert!((result.point - DVec3::new(1.5, 1.5, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_zero_iterations_returns_best_seed() {
        let seg = arch();
        // Closest to p3 among the seeds.
        let target = Target(DVec3::new(3.0, -0.5, 0.0));
        let result = project_ray(&seg, &target, 0);
        assert_eq!(result.time, 1.0);
        assert!((result.ray_distance - 0.5).abs() < 1e-12);
        assert!((result.point - seg.end()).length() < 1e-10);
    }

    #[test]
    fn test_converges_to_point_target() {
        let seg = arch();
        let target = Target(seg.position(0.3));
        let result = project_ray(&seg, &target, 20);
        assert!((result.time - 0.3).abs() < 1e-5);
        assert!(result.ray_distance < 1e-4);
    }

    #[test]
    fn test_endpoint_minimum_is_kept() {
        let seg = arch();
        // Past p0 along the curve's backward extension: the best point is t = 0.
        let target = Target(DVec3::new(-2.0, -1.0, 0.0));
        let result = project_ray(&seg, &target, 12);
        assert_eq!(result.time, 0.0);
        assert!((result.ray_distance - 5.0_f64.sqrt()).abs() < 1e-12);
    }
}
