//! # Primitive Shape Generation
//!
//! Parametric solids built from integer segment counts and float dimensions.
//! All shapes are Y-up and sit on the `y = 0` plane.

use super::Mesh;
use crate::error::{check_positive, check_segments, vertex_budget, Result};
use std::f32::consts::PI;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const UV_CENTER: [f32; 2] = [0.5, 0.5];
const UP: [f32; 3] = [0.0, 1.0, 0.0];
const DOWN: [f32; 3] = [0.0, -1.0, 0.0];

/// Generate a grid plane lying in the XZ plane at height 0.
///
/// # Arguments
/// * `width_segments` - Number of cells along X (at least 1)
/// * `height_segments` - Number of cells along Z (at least 1)
///
/// Vertices sit on integer grid coordinates `(x, 0, y)`. Colors run from
/// `(0, 0, 1)` at the origin to `(1, 1, 1)` at the far corner and UVs follow
/// the same gradient.
pub fn generate_plane(width_segments: u32, height_segments: u32) -> Result<Mesh> {
    check_segments("width_segments", width_segments, 1)?;
    check_segments("height_segments", height_segments, 1)?;

    let w_segs = width_segments;
    let h_segs = height_segments;
    let vertex_count =
        vertex_budget((u64::from(w_segs) + 1) * (u64::from(h_segs) + 1))? as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;

            positions.push([x as f32, 0.0, y as f32]);
            colors.push([u, v, 1.0]);
            tex_coords.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity(6 * w_segs as usize * h_segs as usize);
    for y in 0..h_segs {
        for x in 0..w_segs {
            let top_left = y * (w_segs + 1) + x;
            let top_right = top_left + 1;
            let bottom_left = top_left + w_segs + 1;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    let mesh = Mesh::new(positions, indices)
        .with_colors(colors)
        .with_tex_coords(tex_coords)
        .with_normals(vec![UP; vertex_count])
        .validated()?;

    log::debug!(
        "Generated plane {}x{}: {} vertices, {} triangles",
        w_segs,
        h_segs,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Generate a capped cylinder standing on the origin.
///
/// # Arguments
/// * `radial_segments` - Number of segments around the circumference (at least 3)
/// * `height_segments` - Number of rings along the height (at least 1)
/// * `radius` - Radius of the cylinder
/// * `height` - Height of the cylinder (along +Y)
///
/// Each body ring carries `radial_segments + 1` vertices; the last one repeats
/// the first position so the UV seam can wrap. The two cap centers come last:
/// bottom at `(0, 0, 0)`, top at `(0, height, 0)`.
///
/// The cap fans wrap with `% radial_segments` and therefore never touch the
/// seam column, while the body quads do. Every triangle is counter-clockwise
/// seen from outside: the body faces away from the axis, the bottom cap faces
/// -Y and the top cap +Y, matching the stored normals.
pub fn generate_cylinder(
    radial_segments: u32,
    height_segments: u32,
    radius: f32,
    height: f32,
) -> Result<Mesh> {
    check_segments("radial_segments", radial_segments, 3)?;
    check_segments("height_segments", height_segments, 1)?;
    check_positive("radius", radius)?;
    check_positive("height", height)?;

    let r_segs = radial_segments;
    let h_segs = height_segments;
    let vertex_count =
        vertex_budget((u64::from(r_segs) + 1) * (u64::from(h_segs) + 1) + 2)? as usize;
    let ring = r_segs + 1;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);

    // Body
    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = height * v;

        for x in 0..=r_segs {
            let u = x as f32 / r_segs as f32;
            let angle = 2.0 * PI * u;
            let (sin_a, cos_a) = angle.sin_cos();

            positions.push([radius * cos_a, pos_y, radius * sin_a]);
            colors.push([u, v, 1.0]);
            tex_coords.push([u, v]);
            normals.push([cos_a, 0.0, sin_a]);
        }
    }

    // Cap centers
    let bottom_center = positions.len() as u32;
    positions.push([0.0, 0.0, 0.0]);
    colors.push(RED);
    tex_coords.push(UV_CENTER);
    normals.push(DOWN);

    let top_center = positions.len() as u32;
    positions.push([0.0, height, 0.0]);
    colors.push(GREEN);
    tex_coords.push(UV_CENTER);
    normals.push(UP);

    let mut indices = Vec::with_capacity(6 * r_segs as usize * (h_segs as usize + 1));

    for y in 0..h_segs {
        for x in 0..r_segs {
            let current = y * ring + x;
            let next = current + ring;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }

    let top_ring = h_segs * ring;
    for x in 0..r_segs {
        let wrapped = (x + 1) % r_segs;

        indices.extend_from_slice(&[bottom_center, x, wrapped]);
        indices.extend_from_slice(&[top_center, top_ring + wrapped, top_ring + x]);
    }

    let mesh = Mesh::new(positions, indices)
        .with_colors(colors)
        .with_tex_coords(tex_coords)
        .with_normals(normals)
        .validated()?;

    log::debug!(
        "Generated cylinder ({} radial, {} height segments): {} vertices, {} triangles",
        r_segs,
        h_segs,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Generate a cone with its base on the XZ plane and the apex on +Y.
///
/// # Arguments
/// * `radial_segments` - Number of base ring vertices (at least 3)
/// * `radius` - Radius of the base
/// * `height` - Distance from the base to the apex
///
/// Layout: `radial_segments` ring vertices, then the base center at index
/// `radial_segments`, then the apex at `radial_segments + 1`. The ring is
/// white, the base center red and the apex blue. Ring UVs map onto the unit
/// disk centered at `(0.5, 0.5)`.
pub fn generate_cone(radial_segments: u32, radius: f32, height: f32) -> Result<Mesh> {
    check_segments("radial_segments", radial_segments, 3)?;
    check_positive("radius", radius)?;
    check_positive("height", height)?;

    let segs = radial_segments;
    let vertex_count = vertex_budget(u64::from(segs) + 2)? as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut colors = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);

    // Side normals tilt outward by the slope of the lateral surface.
    let slant = (height * height + radius * radius).sqrt();

    for i in 0..segs {
        let angle = 2.0 * PI * i as f32 / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();

        positions.push([radius * cos_a, 0.0, radius * sin_a]);
        colors.push(WHITE);
        tex_coords.push([0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a]);
        normals.push([
            height * cos_a / slant,
            radius / slant,
            height * sin_a / slant,
        ]);
    }

    let base_center = segs;
    positions.push([0.0, 0.0, 0.0]);
    colors.push(RED);
    tex_coords.push(UV_CENTER);
    normals.push(DOWN);

    let apex = segs + 1;
    positions.push([0.0, height, 0.0]);
    colors.push(BLUE);
    tex_coords.push(UV_CENTER);
    normals.push(UP);

    let mut indices = Vec::with_capacity(6 * segs as usize);

    // Base fan
    for i in 0..segs {
        indices.extend_from_slice(&[base_center, i, (i + 1) % segs]);
    }

    // Lateral fan
    for i in 0..segs {
        indices.extend_from_slice(&[i, apex, (i + 1) % segs]);
    }

    let mesh = Mesh::new(positions, indices)
        .with_colors(colors)
        .with_tex_coords(tex_coords)
        .with_normals(normals)
        .validated()?;

    log::debug!(
        "Generated cone ({} segments): {} vertices, {} triangles",
        segs,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Corners of the skybox cube, two triangles per face.
#[rustfmt::skip]
const SKYBOX_POSITIONS: [[f32; 3]; 36] = [
    // -Z
    [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0],
    // -X
    [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
    [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0],
    // +X
    [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0],
    // +Z
    [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0],
    // +Y
    [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],
    // -Y
    [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0],
    [ 1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0],
];

/// Generate the unit skybox cube spanning `[-1, 1]` on every axis.
///
/// Faces are wound to be seen from inside. Every corner is its own vertex and
/// the indices are simply `0..36`; the cube map is sampled by direction, so
/// there are no UVs, colors or normals.
pub fn generate_skybox_cube() -> Mesh {
    Mesh::new(SKYBOX_POSITIONS.to_vec(), (0..36).collect())
}
