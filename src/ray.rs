//! Ray representation for 3D ray tracing.
//!
//! A ray is the half-line r(t) = origin + t * direction used to sample the
//! scene, both for primary (camera) rays and secondary (shadow, reflection,
//! refraction) rays.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera eye for primary rays, or a surface point for secondary
    /// rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Normalized by convention at every construction site. The type does
    /// not enforce this; the intersection math is written for the general
    /// case.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
