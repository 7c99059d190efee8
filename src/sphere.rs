//! Sphere primitive for ray tracing.
//!
//! Spheres are the only geometric primitive in the scene. Each one carries
//! its own surface properties: a base color, a reflectivity flag, and a
//! refractive index where 1.0 means opaque by convention. The two can
//! combine on a single sphere.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// RGB color with unbounded linear float channels.
///
/// Shading accumulates without clamping; conversion to a displayable range
/// is the output consumer's concern.
pub type Color = Vec3A;

/// Sphere primitive defined by center, radius, and surface properties.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere, always positive for a valid scene.
    pub radius: f32,

    /// Base surface color.
    pub color: Color,

    /// Unique identifier within a scene.
    pub id: u32,

    /// Index of refraction. 1.0 marks the sphere as opaque; any other
    /// value makes it participate in the transparency pass.
    pub refractive_index: f32,

    /// Whether the sphere contributes a mirror reflection term.
    pub reflective: bool,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(
        center: Vec3A,
        radius: f32,
        color: Color,
        id: u32,
        refractive_index: f32,
        reflective: bool,
    ) -> Self {
        Self {
            center,
            radius,
            color,
            id,
            refractive_index,
            reflective,
        }
    }

    /// Create an opaque, non-reflective sphere.
    pub fn opaque(center: Vec3A, radius: f32, color: Color, id: u32) -> Self {
        Self::new(center, radius, color, id, 1.0, false)
    }

    /// Whether this sphere participates in the transparency pass.
    pub fn refracts(&self) -> bool {
        self.refractive_index != 1.0
    }

    /// Smallest root of the ray-sphere quadratic accepted by `range`.
    ///
    /// Tries the near root first and falls back to the far one, so a ray
    /// whose origin is inside the sphere yields the positive exit root.
    /// Returns `None` on a miss (negative discriminant or no root in
    /// range).
    pub fn intersection(&self, ray: &Ray, range: Interval) -> Option<f32> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        let mut root = (h - sqrtd) / a;
        if !range.surrounds(root) {
            root = (h + sqrtd) / a;
            if !range.surrounds(root) {
                return None;
            }
        }

        Some(root)
    }
}
