//! Camera model and ray generation.
//!
//! The camera is a pinhole at `eye` looking down `-w` through a rectangular
//! image plane at focal distance. Pixel coordinates map linearly onto the
//! plane; every ray, primary or lens-perturbed, goes through the same
//! mapping.

use glam::Vec3A;

use crate::ray::Ray;
use crate::scene::SceneError;

/// Image-plane bounds in camera coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ImagePlane {
    /// Left edge (minimum u).
    pub left: f32,
    /// Right edge (maximum u).
    pub right: f32,
    /// Bottom edge (minimum v).
    pub bottom: f32,
    /// Top edge (maximum v).
    pub top: f32,
}

impl ImagePlane {
    /// Create image-plane bounds.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Square plane centered on the view axis with the given half-extent.
    pub fn square(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }
}

/// Camera with position, orthonormal basis, and image plane.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub eye: Vec3A,
    /// Image-plane bounds.
    pub plane: ImagePlane,
    /// Distance from the eye to the image plane along the view axis.
    pub focal: f32,

    // Orthonormal basis: w points opposite the view direction.
    w: Vec3A,
    u: Vec3A,
    v: Vec3A,
}

impl Camera {
    /// Build a camera from eye position, view direction, and up vector.
    ///
    /// The basis comes from Gram-Schmidt: `w = normalize(-view_direction)`,
    /// `u = normalize(up x w)`, `v = w x u`. Zero-length or parallel input
    /// vectors cannot produce a basis and are rejected.
    pub fn new(
        eye: Vec3A,
        view_direction: Vec3A,
        up: Vec3A,
        plane: ImagePlane,
        focal: f32,
    ) -> Result<Self, SceneError> {
        let w = (-view_direction)
            .try_normalize()
            .ok_or(SceneError::DegenerateBasis)?;
        let u = up.cross(w).try_normalize().ok_or(SceneError::DegenerateBasis)?;
        let v = w.cross(u);

        Ok(Self {
            eye,
            plane,
            focal,
            w,
            u,
            v,
        })
    }

    /// World-space point on the image plane for pixel (i, j) with a
    /// sub-pixel offset in [0, 1)^2.
    ///
    /// j runs bottom-up: j = 0 maps to the bottom plane edge.
    fn plane_point(&self, i: u32, j: u32, offset: (f32, f32), width: u32, height: u32) -> Vec3A {
        let us = self.plane.left
            + (self.plane.right - self.plane.left) * (i as f32 + offset.0) / width as f32;
        let vs = self.plane.bottom
            + (self.plane.top - self.plane.bottom) * (j as f32 + offset.1) / height as f32;

        self.eye - self.focal * self.w + us * self.u + vs * self.v
    }

    /// Generate the ray from `origin` through the image-plane point of
    /// pixel (i, j).
    ///
    /// Passing the eye as origin gives the plain pinhole ray; a perturbed
    /// origin (see [`Camera::lens_origin`]) gives the depth-of-field ray.
    /// The direction is always normalized. A degenerate ray for zero image
    /// dimensions is the caller's responsibility to avoid.
    pub fn ray_through(
        &self,
        i: u32,
        j: u32,
        offset: (f32, f32),
        origin: Vec3A,
        width: u32,
        height: u32,
    ) -> Ray {
        let target = self.plane_point(i, j, offset, width, height);
        Ray::new(origin, (target - origin).normalize())
    }

    /// Eye position displaced on the lens plane by the given offsets.
    ///
    /// Used for depth of field: the origin moves within the u/v plane while
    /// the image-plane target stays put, so points away from the focal
    /// plane smear across sub-samples.
    pub fn lens_origin(&self, offset: (f32, f32)) -> Vec3A {
        self.eye + offset.0 * self.u + offset.1 * self.v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3A::new(5.0, 0.0, 0.0),
            Vec3A::new(-1.0, 0.0, 0.0),
            Vec3A::new(0.0, 0.0, 1.0),
            ImagePlane::square(4.0),
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn basis_is_orthonormal() {
        let camera = test_camera();

        assert!((camera.w.length() - 1.0).abs() < 1e-6);
        assert!((camera.u.length() - 1.0).abs() < 1e-6);
        assert!((camera.v.length() - 1.0).abs() < 1e-6);
        assert!(camera.w.dot(camera.u).abs() < 1e-6);
        assert!(camera.w.dot(camera.v).abs() < 1e-6);
        assert!(camera.u.dot(camera.v).abs() < 1e-6);
    }

    #[test]
    fn center_pixel_ray_points_down_view_axis() {
        let camera = test_camera();

        // Odd dimensions put the middle pixel center exactly on the axis.
        let ray = camera.ray_through(4, 4, (0.5, 0.5), camera.eye, 9, 9);
        assert!((ray.direction - Vec3A::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(ray.origin, camera.eye);
    }

    #[test]
    fn lens_origin_moves_in_plane_normal_to_view() {
        let camera = test_camera();

        let origin = camera.lens_origin((0.5, 0.25));
        let displacement = origin - camera.eye;
        assert!(displacement.length() > 0.0);
        // Perpendicular to the view axis (x).
        assert!(displacement.dot(Vec3A::X).abs() < 1e-6);
    }

    #[test]
    fn zero_view_direction_is_rejected() {
        let result = Camera::new(
            Vec3A::ZERO,
            Vec3A::ZERO,
            Vec3A::Z,
            ImagePlane::square(1.0),
            1.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn up_parallel_to_view_is_rejected() {
        let result = Camera::new(
            Vec3A::ZERO,
            Vec3A::X,
            Vec3A::X,
            ImagePlane::square(1.0),
            1.0,
        );
        assert!(result.is_err());
    }
}
