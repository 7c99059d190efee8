//! Recursive shading: local illumination, shadows, reflection, refraction.
//!
//! `cast_ray` resolves a ray against the scene and hands genuine hits to
//! `shade`, which composes ambient, per-light diffuse/specular, and the
//! recursive reflection/transparency terms. The recursion budget threads
//! through every secondary ray and strictly decreases; at zero the locally
//! accumulated color is returned as-is.

use glam::Vec3A;

use crate::hittable::{self, Hit};
use crate::interval::Interval;
use crate::options::RenderOptions;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::sphere::Color;

/// Minimum accepted hit distance for primary and secondary rays, keeping
/// rays from resolving against the surface they just left.
pub const HIT_EPSILON: f32 = 1e-3;

/// Trace a ray into the scene and return its color.
///
/// Misses return the scene background. `depth` is the remaining recursion
/// budget for secondary rays spawned while shading the hit.
pub fn cast_ray(scene: &Scene, options: &RenderOptions, ray: &Ray, depth: u32) -> Color {
    let range = Interval::new(HIT_EPSILON, f32::INFINITY);
    match hittable::scene_hit(ray, &scene.spheres, range) {
        Some(hit) => shade(scene, options, &hit, ray, depth),
        None => scene.background,
    }
}

/// Compute the outgoing color at a hit point.
///
/// Transparency supersedes reflection: a sphere that is both reflective
/// and refractive gets the Fresnel blend, not an additional mirror term.
fn shade(scene: &Scene, options: &RenderOptions, hit: &Hit, ray: &Ray, depth: u32) -> Color {
    let mut color = options.ambient * hit.sphere.color;

    let active = options.active_lights.clamp(1, scene.lights.len());
    for light in scene.lights.iter().take(active) {
        let shadow_ray = Ray::new(hit.p, *light);
        if !hittable::in_shadow(&shadow_ray, &scene.spheres) {
            color += diffuse(scene, hit, *light);
            color += specular(scene, options, hit, ray, *light);
        }
    }

    if options.transparency && hit.sphere.refracts() && depth > 0 {
        return color + fresnel_blend(scene, options, hit, ray, depth);
    }

    if options.reflection && hit.sphere.reflective && depth > 0 {
        let reflected = Ray::new(hit.p, reflect(ray.direction, hit.n));
        color += options.reflection_weight * cast_ray(scene, options, &reflected, depth - 1);
    }

    color
}

/// Lambertian term for one light.
fn diffuse(scene: &Scene, hit: &Hit, light: Vec3A) -> Color {
    scene.light_intensity * hit.n.dot(light).max(0.0) * hit.sphere.color
}

/// Blinn specular term for one light.
fn specular(scene: &Scene, options: &RenderOptions, hit: &Hit, ray: &Ray, light: Vec3A) -> Color {
    let view = (-ray.direction).normalize();
    let half = (view + light).normalize();
    let highlight = hit.n.dot(half).max(0.0).powf(options.specular_exponent);

    scene.light_intensity * highlight * options.specular_color
}

/// Reflection/refraction blend for a transparent sphere.
///
/// Picks the relative index and cosine for the entering or exiting case,
/// then weights the two secondary rays by Schlick reflectance. Total
/// internal reflection drops the transmitted ray and returns the full
/// reflected contribution instead.
fn fresnel_blend(
    scene: &Scene,
    options: &RenderOptions,
    hit: &Hit,
    ray: &Ray,
    depth: u32,
) -> Color {
    let ri = hit.sphere.refractive_index;
    let reflected = Ray::new(hit.p, reflect(ray.direction, hit.n));

    let entering = ray.direction.dot(hit.n) < 0.0;
    let refraction = if entering {
        refract(ray.direction, hit.n, ri)
            .map(|t| (t, (-ray.direction).dot(hit.n).min(1.0)))
    } else {
        refract(ray.direction, -hit.n, 1.0 / ri).map(|t| (t, t.dot(hit.n).min(1.0)))
    };

    match refraction {
        Some((transmitted, cosine)) => {
            let refracted = Ray::new(hit.p, transmitted);
            let fresnel = reflectance(cosine, ri);
            fresnel * cast_ray(scene, options, &reflected, depth - 1)
                + (1.0 - fresnel) * cast_ray(scene, options, &refracted, depth - 1)
        }
        None => cast_ray(scene, options, &reflected, depth - 1),
    }
}

/// Mirror-reflect a direction about a surface normal.
///
/// The input is normalized first, so the result is a unit vector for any
/// unit normal. Symmetric in the sign of the normal.
pub fn reflect(direction: Vec3A, normal: Vec3A) -> Vec3A {
    let d = direction.normalize();
    d - 2.0 * d.dot(normal) * normal
}

/// Refract a direction through an interface with relative index `eta`.
///
/// Splits the incoming direction into tangential and normal parts per
/// Snell's law. Returns `None` when the radicand goes negative: total
/// internal reflection, a normal outcome rather than an error.
pub fn refract(direction: Vec3A, normal: Vec3A, eta: f32) -> Option<Vec3A> {
    let d = direction.normalize();
    let dn = d.dot(normal);

    let radicand = 1.0 - (1.0 - dn * dn) / (eta * eta);
    if radicand < 0.0 {
        return None;
    }

    let tangential = (d - dn * normal) / eta;
    Some((tangential - radicand.sqrt() * normal).normalize())
}

/// Schlick's approximation of the Fresnel reflectance coefficient.
pub fn reflectance(cosine: f32, eta: f32) -> f32 {
    let r0 = ((eta - 1.0) / (eta + 1.0)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, ImagePlane};
    use crate::sphere::Sphere;

    fn test_scene(spheres: Vec<Sphere>, lights: Vec<Vec3A>) -> Scene {
        let camera = Camera::new(
            Vec3A::new(5.0, 0.0, 0.0),
            Vec3A::new(-1.0, 0.0, 0.0),
            Vec3A::new(0.0, 0.0, 1.0),
            ImagePlane::square(4.0),
            10.0,
        )
        .unwrap();
        Scene::new(camera, lights, 0.7, Color::ZERO, spheres).unwrap()
    }

    #[test]
    fn reflect_preserves_unit_length() {
        let directions = [
            Vec3A::new(1.0, 2.0, -3.0),
            Vec3A::new(-0.3, 0.9, 0.1),
            Vec3A::X,
        ];
        let normal = Vec3A::new(1.0, 1.0, 1.0).normalize();

        for direction in directions {
            let reflected = reflect(direction, normal);
            assert!((reflected.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn reflect_at_normal_incidence_reverses() {
        let reflected = reflect(-Vec3A::Y, Vec3A::Y);
        assert!((reflected - Vec3A::Y).length() < 1e-6);
    }

    #[test]
    fn refract_at_normal_incidence_passes_straight() {
        let transmitted = refract(-Vec3A::Y, Vec3A::Y, 1.5).unwrap();
        assert!((transmitted + Vec3A::Y).length() < 1e-5);
    }

    #[test]
    fn refract_reports_total_internal_reflection() {
        // Shallow exit from a dense medium: the radicand goes negative.
        let grazing = Vec3A::new(0.98, -0.199, 0.0).normalize();
        assert!(refract(grazing, Vec3A::Y, 1.0 / 1.5).is_none());
    }

    #[test]
    fn reflectance_stays_in_unit_range() {
        for eta in [1.05_f32, 1.2, 1.5, 2.4] {
            for step in 0..=10 {
                let cosine = step as f32 / 10.0;
                let fresnel = reflectance(cosine, eta);
                assert!((0.0..=1.0).contains(&fresnel), "R={fresnel} out of range");
            }
        }
    }

    #[test]
    fn reflectance_approaches_base_value_head_on() {
        let eta = 1.5_f32;
        let r0 = ((eta - 1.0) / (eta + 1.0)).powi(2);
        assert!((reflectance(1.0, eta) - r0).abs() < 1e-6);
        // Grazing incidence reflects nearly everything.
        assert!(reflectance(0.0, eta) > 0.99);
    }

    #[test]
    fn miss_returns_background() {
        let mut scene = test_scene(
            vec![Sphere::opaque(Vec3A::ZERO, 1.0, Color::new(1.0, 0.0, 0.0), 0)],
            vec![Vec3A::Z],
        );
        scene.background = Color::new(0.1, 0.2, 0.3);

        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), Vec3A::X);
        let color = cast_ray(&scene, &RenderOptions::default(), &ray, 5);
        assert_eq!(color, scene.background);
    }

    #[test]
    fn lit_surface_is_brighter_than_ambient() {
        let base = Color::new(0.0, 1.0, 0.0);
        let scene = test_scene(
            vec![Sphere::opaque(Vec3A::ZERO, 1.0, base, 0)],
            // Light on the camera side: the front face is fully lit.
            vec![Vec3A::new(1.0, 0.0, 0.0)],
        );
        let options = RenderOptions::default();

        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);
        let color = cast_ray(&scene, &options, &ray, 5);

        let ambient_only = options.ambient * base;
        assert!(color.y > ambient_only.y);
    }

    #[test]
    fn shadowed_point_gets_ambient_only() {
        let base = Color::new(0.0, 1.0, 0.0);
        let light = Vec3A::new(1.0, 0.0, 1.0).normalize();
        // Blocker sits on the shadow ray from the front of the target.
        let blocker_center = Vec3A::new(1.0, 0.0, 0.0) + 3.0 * light;
        let scene = test_scene(
            vec![
                Sphere::opaque(Vec3A::ZERO, 1.0, base, 0),
                Sphere::opaque(blocker_center, 1.0, Color::ONE, 1),
            ],
            vec![light],
        );
        let options = RenderOptions::default();

        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);
        let color = cast_ray(&scene, &options, &ray, 5);

        let ambient_only = options.ambient * base;
        assert!((color - ambient_only).length() < 1e-5);
    }

    #[test]
    fn reflection_needs_budget() {
        let base = Color::new(0.0, 1.0, 0.0);
        // The mirror on sphere 0 bounces the camera ray straight back into
        // the white sphere sitting behind the camera.
        let scene = test_scene(
            vec![
                Sphere::new(Vec3A::ZERO, 1.0, base, 0, 1.0, true),
                Sphere::opaque(Vec3A::new(8.0, 0.0, 0.0), 1.0, Color::ONE, 1),
            ],
            vec![Vec3A::new(1.0, 0.0, 0.0)],
        );
        let mut options = RenderOptions::default();
        options.reflection = true;

        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);
        let with_budget = cast_ray(&scene, &options, &ray, 5);
        let exhausted = cast_ray(&scene, &options, &ray, 0);

        // At depth 0 the mirror term is dropped entirely; with budget it
        // picks up at least the ambient color of the white sphere.
        assert!(with_budget.x > exhausted.x);
        assert!(with_budget.y > exhausted.y);
        assert!(with_budget.z > exhausted.z);
    }

    #[test]
    fn transparency_supersedes_reflection() {
        let base = Color::new(0.2, 0.2, 0.8);
        // Both flags set on one sphere.
        let glass = Sphere::new(Vec3A::ZERO, 1.0, base, 0, 1.2, true);
        let scene = test_scene(vec![glass], vec![Vec3A::new(1.0, 0.0, 0.0)]);

        let mut both = RenderOptions::default();
        both.reflection = true;
        both.transparency = true;

        let mut transparency_only = both.clone();
        transparency_only.reflection = false;

        let ray = Ray::new(Vec3A::new(5.0, 0.0, 0.0), -Vec3A::X);
        let color_both = cast_ray(&scene, &both, &ray, 5);
        let color_transparency = cast_ray(&scene, &transparency_only, &ray, 5);

        // The mirror term never adds on top of the Fresnel blend.
        assert!((color_both - color_transparency).length() < 1e-6);
    }
}
