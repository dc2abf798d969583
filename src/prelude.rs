//! # Primscape Prelude
//!
//! Commonly used types in one import:
//!
//! ```no_run
//! use primscape::prelude::*;
//!
//! let cylinder = generate_cylinder(16, 4, 1.0, 3.0)?;
//! let mut camera = CameraParams::default().build();
//! camera.apply_look_delta(12.0, -3.0);
//! let view = camera.view_matrix();
//! # Ok::<(), GeometryError>(())
//! ```

// Errors
pub use crate::error::GeometryError;

// Geometry
pub use crate::gfx::geometry::{
    build_terrain, generate_cone, generate_cylinder, generate_plane, generate_skybox_cube,
    generate_terrain, load_heightmap, HeightField, Mesh,
};
pub use crate::gfx::scene::Vertex3D;
pub use crate::gfx::resources::{DrawMesh, GpuMesh};

// Camera
pub use crate::gfx::camera::{
    Camera, CameraController, CameraManager, CameraUniform, FlyCamera, Movement, Projection,
};

// Parameters
pub use crate::config::{
    CameraParams, ConeParams, CylinderParams, PlaneParams, ProjectionParams, TerrainParams,
};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Matrix4, Vector3, Zero};
