//! GPU mirror of a generated [`Mesh`].
//!
//! Generation never touches the GPU. A [`GpuMesh`] is created from a finished
//! mesh and owns its vertex and index buffers; they are released when the
//! handle is dropped, so buffer lifetime is tied 1:1 to the owning object.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::error::{index_budget, vertex_budget, Result};
use crate::gfx::geometry::Mesh;

pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    vertex_count: u32,
}

impl GpuMesh {
    /// Interleave `mesh` into [`Vertex3D`](crate::gfx::scene::Vertex3D)s and
    /// upload it alongside its index buffer.
    ///
    /// The mesh is validated first, so a hand-assembled [`Mesh`] with
    /// out-of-range indices never reaches the GPU.
    pub fn upload(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Result<Self> {
        let (index_count, vertex_count) = draw_counts(mesh)?;
        let vertices = mesh.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "Uploaded {}: {} vertices ({} bytes), {} indices",
            label,
            vertices.len(),
            vertex_buffer.size(),
            mesh.indices().len()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count,
            vertex_count,
        })
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.index_buffer
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

/// Index and vertex counts of a well-formed `mesh`, as `u32` draw ranges.
fn draw_counts(mesh: &Mesh) -> Result<(u32, u32)> {
    mesh.validate()?;
    let index_count = index_budget(mesh.indices().len())?;
    let vertex_count = vertex_budget(mesh.vertex_count() as u64)?;
    Ok((index_count, vertex_count))
}

/// Indexed draw calls for uploaded meshes.
pub trait DrawMesh {
    fn draw_mesh(&mut self, mesh: &GpuMesh);
    fn draw_mesh_instanced(&mut self, mesh: &GpuMesh, instances: Range<u32>);
}

impl DrawMesh for wgpu::RenderPass<'_> {
    fn draw_mesh(&mut self, mesh: &GpuMesh) {
        self.draw_mesh_instanced(mesh, 0..1);
    }

    fn draw_mesh_instanced(&mut self, mesh: &GpuMesh, instances: Range<u32>) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::gfx::geometry::generate_cone;

    #[test]
    fn test_draw_counts_of_generated_mesh() {
        let cone = generate_cone(8, 1.0, 2.0).unwrap();
        assert_eq!(draw_counts(&cone).unwrap(), (48, 10));
    }

    #[test]
    fn test_hand_built_mesh_is_validated_before_upload() {
        let mesh = Mesh::new(vec![[0.0; 3]; 3], vec![0, 1, 3]);
        assert!(matches!(
            draw_counts(&mesh),
            Err(GeometryError::IndexOutOfRange { index: 3, .. })
        ));

        let mesh = Mesh::new(vec![[0.0; 3]; 3], vec![0, 1]);
        assert!(matches!(draw_counts(&mesh), Err(GeometryError::IndexCount(2))));
    }
}
