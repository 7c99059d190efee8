//! Scene-level ray intersection.
//!
//! The scene holds few spheres, so the nearest hit is found with a linear
//! scan. Shadow tests only need to know whether anything at all lies along
//! the ray, never how far, because lights are directional.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Pull-back applied to the hit point along the incoming ray so that
/// secondary rays do not re-intersect the surface they start on.
const SURFACE_NUDGE: f32 = 1e-4;

/// Result of a ray-scene intersection.
///
/// Only produced for genuine positive hits; misses are `None` at the call
/// sites, never sentinel values.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection.
    pub t: f32,
    /// The sphere that was struck.
    pub sphere: &'a Sphere,
    /// World-space hit point, pulled back slightly along the ray.
    pub p: Vec3A,
    /// Outward unit normal at the hit point.
    pub n: Vec3A,
}

/// Find the nearest sphere intersection along a ray.
///
/// Scans every sphere, shrinking the acceptance range to the best root so
/// far; the comparison is strict, so the first sphere in list order wins an
/// exact tie.
pub fn scene_hit<'a>(ray: &Ray, spheres: &'a [Sphere], range: Interval) -> Option<Hit<'a>> {
    let mut nearest: Option<(f32, &Sphere)> = None;

    for sphere in spheres {
        let closest = nearest.map_or(range.max, |(t, _)| t);
        if let Some(t) = sphere.intersection(ray, Interval::new(range.min, closest)) {
            nearest = Some((t, sphere));
        }
    }

    nearest.map(|(t, sphere)| {
        let p = ray.at(t - SURFACE_NUDGE);
        let n = (p - sphere.center).normalize();
        Hit { t, sphere, p, n }
    })
}

/// Whether anything blocks the ray toward a directional light.
///
/// Any strictly positive intersection counts; the light is infinitely far,
/// so occluder distance is never compared.
pub fn in_shadow(ray: &Ray, spheres: &[Sphere]) -> bool {
    spheres
        .iter()
        .any(|sphere| sphere.intersection(ray, Interval::positive()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Color;

    fn sphere_at(x: f32, id: u32) -> Sphere {
        Sphere::opaque(Vec3A::new(x, 0.0, 0.0), 1.0, Color::ONE, id)
    }

    #[test]
    fn nearest_sphere_wins() {
        let spheres = vec![sphere_at(-4.0, 0), sphere_at(0.0, 1)];
        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);

        let hit = scene_hit(&ray, &spheres, Interval::positive()).unwrap();
        assert_eq!(hit.sphere.id, 1);
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn normal_points_outward_toward_ray_origin() {
        let spheres = vec![sphere_at(0.0, 0)];
        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);

        let hit = scene_hit(&ray, &spheres, Interval::positive()).unwrap();
        assert!((hit.n - Vec3A::X).length() < 1e-3);
        assert!((hit.n.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn miss_returns_none() {
        let spheres = vec![sphere_at(0.0, 0)];
        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), Vec3A::X);

        assert!(scene_hit(&ray, &spheres, Interval::positive()).is_none());
    }

    #[test]
    fn occluder_casts_shadow() {
        let spheres = vec![sphere_at(0.0, 0)];
        let toward = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);
        let away = Ray::new(Vec3A::new(5.0, 0.0, 0.0), Vec3A::X);

        assert!(in_shadow(&toward, &spheres));
        assert!(!in_shadow(&away, &spheres));
    }
}
