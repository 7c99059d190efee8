//! PrismRay recursive ray tracer
//!
//! Whitted-style renderer for sphere scenes: direct illumination with
//! shadows, mirror reflection, and Fresnel-blended refraction, with
//! optional supersampled anti-aliasing and depth of field. Frames are
//! rendered into a caller-owned HDR buffer; output formats are PNG, EXR,
//! and TEV streaming.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod options;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shade;
pub mod sphere;
