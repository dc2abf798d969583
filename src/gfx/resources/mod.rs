//! GPU resource management
//!
//! Owning handles for buffers uploaded from generated geometry.

pub mod gpu_mesh;

pub use gpu_mesh::{DrawMesh, GpuMesh};
