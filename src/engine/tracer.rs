//! Ray-sphere intersection.
//!
//! Only the near root of the quadratic is ever computed. A ray that has
//! no real root returns [`NO_HIT`]; a root behind the origin is returned
//! as-is (zero or negative), so callers gate on `t > 0` rather than on
//! the sentinel.

use super::types::{Ray, Sphere};

/// Returned when the ray's line misses the sphere entirely.
pub const NO_HIT: f64 = -1.0;

impl Sphere {
    /// Parametric distance to the near intersection, or [`NO_HIT`].
    pub fn hit(&self, ray: &Ray) -> f64 {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            NO_HIT
        } else {
            (-b - discriminant.sqrt()) / (2.0 * a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn test_hit_straight_on() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let t = unit_sphere().hit(&ray);
        assert!((t - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_hit_scales_with_direction_length() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        let t = unit_sphere().hit(&ray);
        assert!((t - 0.25).abs() < 1e-10);
        let p = ray.point_at(t);
        assert!((p.z + 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_miss_returns_sentinel() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(unit_sphere().hit(&ray), NO_HIT);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(-2.0, 1.0, -1.0));
        assert_eq!(unit_sphere().hit(&ray), NO_HIT);
    }

    #[test]
    fn test_surface_origin_pointing_away_is_not_positive() {
        // Origin on the surface, heading away from the center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -0.5), Vec3::new(0.0, 0.0, 1.0));
        let t = unit_sphere().hit(&ray);
        assert!(t <= 0.0);
    }

    #[test]
    fn test_sphere_behind_origin_gives_negative_root() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let t = unit_sphere().hit(&ray);
        assert!((t + 1.5).abs() < 1e-10);
        assert_ne!(t, NO_HIT);
    }

    #[test]
    fn test_origin_inside_returns_near_root_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let t = unit_sphere().hit(&ray);
        assert!((t + 0.5).abs() < 1e-10);
    }
}
