// src/lib.rs
//! Primscape
//!
//! Procedural primitive meshes, heightmap terrain and a free-look camera for
//! applications built on wgpu and winit.
//!
//! Geometry generation is pure and needs no graphics context; uploading and
//! drawing is left to [`gfx::resources::GpuMesh`].

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{GeometryError, Result};
pub use gfx::camera::FlyCamera;
pub use gfx::geometry::{HeightField, Mesh};
