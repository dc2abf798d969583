//! Heightmap terrain: decode a grayscale image into a [`HeightField`] and
//! triangulate it as a regular grid.

use std::path::Path;

use image::DynamicImage;

use super::Mesh;
use crate::error::{check_positive, vertex_budget, GeometryError, Result};

/// Grid of elevation samples in `[0, 1]`, stored row-major.
///
/// Rows run along +Z and columns along +X once the field is turned into a
/// mesh. The field is read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    rows: u32,
    cols: u32,
    samples: Vec<f32>,
}

impl HeightField {
    /// Build a field from row-major samples.
    ///
    /// Fails if the sample count does not match `rows * cols` or any sample is
    /// outside `[0, 1]`.
    pub fn from_samples(rows: u32, cols: u32, samples: Vec<f32>) -> Result<Self> {
        let expected = rows as usize * cols as usize;
        if samples.len() != expected {
            return Err(GeometryError::SampleCount {
                expected,
                actual: samples.len(),
            });
        }

        if let Some((index, &value)) = samples
            .iter()
            .enumerate()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(GeometryError::InvalidSample { index, value });
        }

        Ok(Self {
            rows,
            cols,
            samples,
        })
    }

    /// Sample a decoded image: `rows` is the image height, `cols` its width
    /// and each intensity is the first channel of the pixel divided by 255.
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let samples = rgba.pixels().map(|p| f32::from(p.0[0]) / 255.0).collect();

        Self {
            rows: rgba.height(),
            cols: rgba.width(),
            samples,
        }
    }

    /// Decode an encoded image held in memory (PNG or JPEG).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&image))
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Intensity at `(row, col)`, or `None` outside the grid.
    pub fn intensity(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.samples
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}

/// Decode the heightmap image at `path`.
///
/// Unlike a renderer that logs and carries on, a decode failure here is an
/// error: there is no sensible grid size to fall back on.
pub fn load_heightmap(path: impl AsRef<Path>) -> Result<HeightField> {
    let path = path.as_ref();

    let image = image::open(path).map_err(|source| {
        log::warn!("Unable to load height map from {}: {}", path.display(), source);
        GeometryError::ImageLoad {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let field = HeightField::from_image(&image);
    log::info!(
        "Loaded height map {} ({}x{}, {} channels)",
        path.display(),
        field.cols(),
        field.rows(),
        image.color().channel_count()
    );
    Ok(field)
}

/// Triangulate a height field into a terrain mesh.
///
/// # Arguments
/// * `field` - Elevation samples, at least 2x2
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `max_height` - Elevation of an intensity of 1.0
///
/// Every sample becomes one vertex at
/// `(col * width / (cols - 1), intensity * max_height, row * depth / (rows - 1))`
/// with UV `(col / (cols - 1), row / (rows - 1))`. Normals are a flat `+Y`
/// placeholder; no slope is taken into account.
pub fn generate_terrain(
    field: &HeightField,
    width: f32,
    depth: f32,
    max_height: f32,
) -> Result<Mesh> {
    let (rows, cols) = (field.rows, field.cols);
    if rows < 2 || cols < 2 {
        return Err(GeometryError::HeightFieldTooSmall { rows, cols });
    }
    check_positive("width", width)?;
    check_positive("depth", depth)?;
    if !max_height.is_finite() || max_height < 0.0 {
        return Err(GeometryError::InvalidDimension {
            name: "max_height",
            value: max_height,
        });
    }

    let vertex_count = vertex_budget(u64::from(rows) * u64::from(cols))? as usize;
    let x_scale = width / (cols - 1) as f32;
    let z_scale = depth / (rows - 1) as f32;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut tex_coords = Vec::with_capacity(vertex_count);

    for row in 0..rows {
        for col in 0..cols {
            let intensity = field.samples[(row * cols + col) as usize];

            positions.push([
                col as f32 * x_scale,
                intensity * max_height,
                row as f32 * z_scale,
            ]);
            tex_coords.push([
                col as f32 / (cols - 1) as f32,
                row as f32 / (rows - 1) as f32,
            ]);
        }
    }

    let mut indices = Vec::with_capacity(6 * (rows as usize - 1) * (cols as usize - 1));
    for row in 0..rows - 1 {
        for col in 0..cols - 1 {
            let top_left = row * cols + col;
            let top_right = top_left + 1;
            let bottom_left = (row + 1) * cols + col;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }

    let mesh = Mesh::new(positions, indices)
        .with_tex_coords(tex_coords)
        .with_normals(vec![[0.0, 1.0, 0.0]; vertex_count])
        .validated()?;

    log::debug!(
        "Generated terrain {}x{} ({} x {} x {}): {} vertices, {} triangles",
        cols,
        rows,
        width,
        depth,
        max_height,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load a heightmap from disk and triangulate it in one step.
pub fn build_terrain(
    path: impl AsRef<Path>,
    width: f32,
    depth: f32,
    max_height: f32,
) -> Result<Mesh> {
    let field = load_heightmap(path)?;
    generate_terrain(&field, width, depth, max_height)
}
