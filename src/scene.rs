//! Scene description: camera, lights, and spheres.
//!
//! A scene is assembled once and read-only while a frame renders. All
//! precondition checks live here; the render path itself has no fatal
//! error cases.

use glam::Vec3A;
use thiserror::Error;

use crate::camera::Camera;
use crate::sphere::{Color, Sphere};

/// Invalid scene input detected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// Camera view/up vectors are zero-length or parallel.
    #[error("camera basis vectors are zero-length or parallel")]
    DegenerateBasis,
    /// A light direction has zero length and cannot be normalized.
    #[error("light direction has zero length")]
    ZeroLengthLight,
    /// A scene needs at least one light to shade anything.
    #[error("scene has no lights")]
    NoLights,
    /// Sphere radius must be positive.
    #[error("sphere {id} has non-positive radius")]
    InvalidRadius {
        /// Identifier of the offending sphere.
        id: u32,
    },
    /// Sphere identifiers must be unique within a scene.
    #[error("sphere id {id} appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: u32,
    },
}

/// Immutable per-frame input to the renderer.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Camera position, basis, and image plane.
    pub camera: Camera,
    /// Unit direction vectors pointing toward each light.
    ///
    /// Lights are directional (infinitely far): shadow rays travel along
    /// these vectors and never compare occluder distance.
    pub lights: Vec<Vec3A>,
    /// Scalar intensity applied to every diffuse and specular term.
    pub light_intensity: f32,
    /// Color returned for rays that leave the scene.
    pub background: Color,
    /// All spheres in the scene, scanned linearly on intersection.
    pub spheres: Vec<Sphere>,
}

impl Scene {
    /// Assemble and validate a scene.
    ///
    /// Light vectors are normalized here so shading can assume unit
    /// directions. Rejects zero-length lights, an empty light list,
    /// non-positive radii, and duplicate sphere ids.
    pub fn new(
        camera: Camera,
        lights: Vec<Vec3A>,
        light_intensity: f32,
        background: Color,
        spheres: Vec<Sphere>,
    ) -> Result<Self, SceneError> {
        if lights.is_empty() {
            return Err(SceneError::NoLights);
        }
        let lights = lights
            .into_iter()
            .map(|light| light.try_normalize().ok_or(SceneError::ZeroLengthLight))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = Vec::with_capacity(spheres.len());
        for sphere in &spheres {
            if sphere.radius <= 0.0 {
                return Err(SceneError::InvalidRadius { id: sphere.id });
            }
            if seen.contains(&sphere.id) {
                return Err(SceneError::DuplicateId { id: sphere.id });
            }
            seen.push(sphere.id);
        }

        Ok(Self {
            camera,
            lights,
            light_intensity,
            background,
            spheres,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ImagePlane;

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
    fn lights_are_normalized_on_construction() {
        let scene = Scene::new(
            test_camera(),
            vec![Vec3A::new(0.0, 3.0, 3.0)],
            0.7,
            Color::ZERO,
            vec![],
        )
        .unwrap();

        assert!((scene.lights[0].length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_light_list_is_rejected() {
        let result = Scene::new(test_camera(), vec![], 0.7, Color::ZERO, vec![]);
        assert_eq!(result.unwrap_err(), SceneError::NoLights);
    }

    #[test]
    fn zero_radius_is_rejected() {
        let result = Scene::new(
            test_camera(),
            vec![Vec3A::Z],
            0.7,
            Color::ZERO,
            vec![Sphere::opaque(Vec3A::ZERO, 0.0, Color::ONE, 7)],
        );
        assert_eq!(result.unwrap_err(), SceneError::InvalidRadius { id: 7 });
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Scene::new(
            test_camera(),
            vec![Vec3A::Z],
            0.7,
            Color::ZERO,
            vec![
                Sphere::opaque(Vec3A::ZERO, 1.0, Color::ONE, 2),
                Sphere::opaque(Vec3A::new(3.0, 0.0, 0.0), 1.0, Color::ONE, 2),
            ],
        );
        assert_eq!(result.unwrap_err(), SceneError::DuplicateId { id: 2 });
    }
}
