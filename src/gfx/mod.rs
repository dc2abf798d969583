//! # Graphics Module
//!
//! Geometry, camera and GPU-facing types.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Procedural solids and heightmap terrain as [`Mesh`](geometry::Mesh)es
//! - **Camera System** ([`camera`]) - Free-look camera, input controller and projection
//! - **Scene Data** ([`scene`]) - Interleaved vertex format
//! - **Resource Management** ([`resources`]) - GPU buffers owned by uploaded meshes
//!
//! Geometry and camera math never need a device; only [`resources`] talks to wgpu.

pub mod camera;
pub mod geometry;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::fly_camera::FlyCamera;
pub use geometry::Mesh;
pub use resources::GpuMesh;
