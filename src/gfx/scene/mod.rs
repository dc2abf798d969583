//! # Scene Data
//!
//! Vertex data structures handed to the rendering layer.
//!
//! - [`Vertex3D`] - interleaved position, normal, texture coordinates and color

pub mod vertex;

pub use vertex::Vertex3D;
