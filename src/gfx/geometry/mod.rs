//! # Procedural Geometry Generation
//!
//! This module provides functions that build meshes procedurally, so the
//! basic shapes of a scene never need external model files.
//!
//! ## Supported Geometry
//!
//! - **Plane**: regular grid in the XZ plane
//! - **Cylinder**: body with a duplicated UV seam plus two cap fans
//! - **Cone**: base fan plus lateral fan to the apex
//! - **Skybox cube**: 36 unindexed corners of the `[-1, 1]` cube
//! - **Terrain**: regular grid displaced by a [`HeightField`]
//!
//! ## Usage
//!
//! ```no_run
//! use primscape::gfx::geometry::{generate_cone, generate_plane};
//!
//! let plane = generate_plane(12, 6)?;
//! let cone = generate_cone(10, 1.4, 3.0)?;
//! assert_eq!(cone.vertex_count(), 12);
//! # Ok::<(), primscape::GeometryError>(())
//! ```

pub mod heightmap;
pub mod primitives;

pub use heightmap::{build_terrain, generate_terrain, load_heightmap, HeightField};
pub use primitives::*;

use crate::error::{GeometryError, Result};
use crate::gfx::scene::vertex::Vertex3D;

/// Geometry produced by a generator, ready to be interleaved and uploaded.
///
/// Attribute arrays are parallel to `positions`. An attribute a generator does
/// not produce stays empty rather than being padded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Start a mesh from positions and triangle indices.
    ///
    /// Nothing is checked until [`Mesh::validated`] is called;
    /// [`GpuMesh::upload`](crate::gfx::GpuMesh::upload) validates again before
    /// creating any buffer.
    pub fn new(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            ..Default::default()
        }
    }

    pub fn with_colors(mut self, colors: Vec<[f32; 3]>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_tex_coords(mut self, tex_coords: Vec<[f32; 2]>) -> Self {
        self.tex_coords = tex_coords;
        self
    }

    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        self.normals = normals;
        self
    }

    /// Consume the mesh, returning it only if [`Mesh::validate`] passes.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check the structural invariants every renderer relies on:
    /// whole triangles, in-range indices, parallel attributes and finite
    /// coordinates.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.positions.len();

        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCount(self.indices.len()));
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        check_attribute("colors", self.colors.len(), vertex_count)?;
        check_attribute("tex_coords", self.tex_coords.len(), vertex_count)?;
        check_attribute("normals", self.normals.len(), vertex_count)?;

        for (i, position) in self.positions.iter().enumerate() {
            let finite = position.iter().all(|c| c.is_finite())
                && self.colors.get(i).map_or(true, |c| c.iter().all(|v| v.is_finite()))
                && self.tex_coords.get(i).map_or(true, |t| t.iter().all(|v| v.is_finite()))
                && self.normals.get(i).map_or(true, |n| n.iter().all(|v| v.is_finite()));
            if !finite {
                return Err(GeometryError::NonFinite(i));
            }
        }

        Ok(())
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Positions as flattened `x, y, z` triples.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as index triples, in winding order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Interleave the attribute arrays into the vertex format used for upload.
    ///
    /// Missing attributes are filled with an up normal, a zero UV and white.
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.positions.len())
            .map(|i| Vertex3D {
                position: self.positions[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
                color: self.colors.get(i).copied().unwrap_or([1.0, 1.0, 1.0]),
            })
            .collect()
    }
}

fn check_attribute(name: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != 0 && actual != expected {
        return Err(GeometryError::AttributeLength {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}
