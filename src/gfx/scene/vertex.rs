//! # Vertex Data Structures
//!
//! GPU-compatible interleaved vertex format shared by every generated mesh.

use std::mem;

/// A 3D vertex with position, normal, texture coordinates and color.
///
/// This is the interleaved form of a [`Mesh`](crate::gfx::geometry::Mesh),
/// produced by [`Mesh::to_vertices`](crate::gfx::geometry::Mesh::to_vertices).
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. The stride is 44
/// bytes.
///
/// # Examples
///
/// ```no_run
/// use primscape::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     tex_coords: [0.5, 0.5],
///     color: [1.0, 1.0, 1.0],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Normal vector [nx, ny, nz]
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
    /// Vertex color [r, g, b]
    pub color: [f32; 3],
}

impl Vertex3D {
    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x3)
    /// - Attribute 1: Normal (Float32x3)
    /// - Attribute 2: Texture coordinates (Float32x2)
    /// - Attribute 3: Color (Float32x3)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const VEC3: wgpu::BufferAddress = mem::size_of::<[f32; 3]>() as wgpu::BufferAddress;
        const VEC2: wgpu::BufferAddress = mem::size_of::<[f32; 2]>() as wgpu::BufferAddress;

        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex3D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: VEC3,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: VEC3 * 2,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: VEC3 * 2 + VEC2,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
