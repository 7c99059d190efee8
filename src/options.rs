//! Per-frame render configuration.
//!
//! Feature toggles and shading knobs live outside the scene so a caller
//! can flip them between frames without rebuilding geometry. Nothing here
//! mutates during a frame.

use crate::sphere::Color;

/// Toggles and tunables consulted by the shader and frame renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Jittered supersampling over an N x N grid per pixel.
    pub antialias: bool,
    /// Lens blur via per-sub-sample ray-origin jitter. Implies the
    /// supersampled path even when `antialias` is off.
    pub depth_of_field: bool,
    /// Mirror reflections on spheres flagged reflective.
    pub reflection: bool,
    /// Fresnel-blended refraction on spheres with a refractive index
    /// other than 1.0.
    pub transparency: bool,
    /// How many of the scene's lights to shade with, clamped to the
    /// scene's light count at use.
    pub active_lights: usize,
    /// Recursion budget for single-sample primary rays.
    pub primary_depth: u32,
    /// Reduced recursion budget used on the supersampled path.
    pub supersample_depth: u32,
    /// Supersample grid edge length N (N^2 sub-samples per pixel).
    pub supersample_grid: u32,
    /// Ambient coefficient applied to the sphere's base color.
    pub ambient: f32,
    /// Blinn specular exponent.
    pub specular_exponent: f32,
    /// Specular highlight color.
    pub specular_color: Color,
    /// Attenuation applied to the mirror-reflection contribution.
    pub reflection_weight: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            antialias: false,
            depth_of_field: false,
            reflection: false,
            transparency: false,
            active_lights: 1,
            primary_depth: 5,
            supersample_depth: 3,
            supersample_grid: 5,
            ambient: 0.2,
            specular_exponent: 40.0,
            specular_color: Color::splat(250.0 / 255.0),
            reflection_weight: 0.25,
        }
    }
}

impl RenderOptions {
    /// Whether the renderer should take the supersampled path.
    pub fn supersamples(&self) -> bool {
        self.antialias || self.depth_of_field
    }
}
