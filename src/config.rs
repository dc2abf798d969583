//! # Scene Parameters
//!
//! Typed parameter sets for every generator and for the camera. The defaults
//! reproduce the demo scene: a 12x6 plane, a 10-sided cylinder and cone, a
//! 20x20 terrain and a camera standing at `(0, 3, 8)` looking down -Z.
//!
//! ```no_run
//! use primscape::config::{ConeParams, CameraParams};
//!
//! let cone = ConeParams { radial_segments: 32, ..Default::default() }.build()?;
//! let camera = CameraParams::default().build();
//! # Ok::<(), primscape::GeometryError>(())
//! ```

use std::path::Path;

use cgmath::{Deg, Vector3};

use crate::error::Result;
use crate::gfx::camera::{FlyCamera, Projection};
use crate::gfx::geometry::{self, HeightField, Mesh};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneParams {
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width_segments: 12,
            height_segments: 6,
        }
    }
}

impl PlaneParams {
    pub fn build(&self) -> Result<Mesh> {
        geometry::generate_plane(self.width_segments, self.height_segments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    pub radial_segments: u32,
    pub height_segments: u32,
    pub radius: f32,
    pub height: f32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radial_segments: 10,
            height_segments: 1,
            radius: 1.0,
            height: 3.0,
        }
    }
}

impl CylinderParams {
    pub fn build(&self) -> Result<Mesh> {
        geometry::generate_cylinder(
            self.radial_segments,
            self.height_segments,
            self.radius,
            self.height,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    pub radial_segments: u32,
    pub radius: f32,
    pub height: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radial_segments: 10,
            radius: 1.4,
            height: 3.0,
        }
    }
}

impl ConeParams {
    pub fn build(&self) -> Result<Mesh> {
        geometry::generate_cone(self.radial_segments, self.radius, self.height)
    }
}

/// World-space extent of a heightmap terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    pub width: f32,
    pub depth: f32,
    pub max_height: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 20.0,
            depth: 20.0,
            max_height: 0.5,
        }
    }
}

impl TerrainParams {
    pub fn build(&self, field: &HeightField) -> Result<Mesh> {
        geometry::generate_terrain(field, self.width, self.depth, self.max_height)
    }

    /// Decode the heightmap at `path` and build the terrain from it.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Mesh> {
        geometry::build_terrain(path, self.width, self.depth, self.max_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    pub position: Vector3<f32>,
    pub world_up: Vector3<f32>,
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 3.0, 8.0),
            world_up: Vector3::unit_y(),
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

impl CameraParams {
    pub fn build(&self) -> FlyCamera {
        let mut camera = FlyCamera::new(self.position, self.world_up, self.yaw, self.pitch);
        camera.set_speed(self.speed);
        camera.set_sensitivity(self.sensitivity);
        camera
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl ProjectionParams {
    pub fn build(&self, width: u32, height: u32) -> Projection {
        Projection::new(width, height, Deg(self.fovy_degrees), self.znear, self.zfar)
    }
}
