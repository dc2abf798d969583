use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building geometry.
///
/// Generators validate their parameters up front and the finished [`Mesh`]
/// before handing it back, so a caller either gets a well-formed mesh or one
/// of these.
///
/// [`Mesh`]: crate::gfx::geometry::Mesh
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{name} must be at least {min}, got {value}")]
    InvalidSegments {
        name: &'static str,
        value: u32,
        min: u32,
    },
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("height field must have at least 2 rows and 2 columns, got {rows}x{cols}")]
    HeightFieldTooSmall { rows: u32, cols: u32 },
    #[error("height field expected {expected} samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },
    #[error("height sample {index} is outside [0, 1]: {value}")]
    InvalidSample { index: usize, value: f32 },
    #[error("Unable to load height map from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unable to decode height map: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("{requested} vertices do not fit in a 32-bit index buffer")]
    TooManyVertices { requested: u64 },
    #[error("{requested} indices do not fit in a 32-bit draw range")]
    TooManyIndices { requested: usize },
    #[error("index buffer length {0} is not a multiple of 3")]
    IndexCount(usize),
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("attribute {name} has {actual} entries, expected {expected}")]
    AttributeLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("vertex {0} has a non-finite component")]
    NonFinite(usize),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// Fails unless `value` is at least `min`.
pub(crate) fn check_segments(name: &'static str, value: u32, min: u32) -> Result<()> {
    if value < min {
        return Err(GeometryError::InvalidSegments { name, value, min });
    }
    Ok(())
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::InvalidDimension { name, value });
    }
    Ok(())
}

/// Converts a vertex count into a `u32`, failing when indices would overflow.
pub(crate) fn vertex_budget(requested: u64) -> Result<u32> {
    u32::try_from(requested).map_err(|_| GeometryError::TooManyVertices { requested })
}

/// Converts an index buffer length into a `u32` draw range.
pub(crate) fn index_budget(requested: usize) -> Result<u32> {
    u32::try_from(requested).map_err(|_| GeometryError::TooManyIndices { requested })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_check() {
        assert!(check_segments("width_segments", 1, 1).is_ok());
        let err = check_segments("radial_segments", 2, 3).unwrap_err();
        assert_eq!(err.to_string(), "radial_segments must be at least 3, got 2");
    }

    #[test]
    fn test_positive_check_rejects_nan_and_zero() {
        assert!(check_positive("radius", 0.5).is_ok());
        assert!(check_positive("radius", 0.0).is_err());
        assert!(check_positive("radius", -1.0).is_err());
        assert!(check_positive("radius", f32::NAN).is_err());
        assert!(check_positive("radius", f32::INFINITY).is_err());
    }

    #[test]
    fn test_vertex_budget() {
        assert_eq!(vertex_budget(42).unwrap(), 42);
        assert!(matches!(
            vertex_budget(u64::from(u32::MAX) + 1),
            Err(GeometryError::TooManyVertices { .. })
        ));
    }

    #[test]
    fn test_index_budget() {
        assert_eq!(index_budget(36).unwrap(), 36);
        assert!(matches!(
            index_budget(u32::MAX as usize + 1),
            Err(GeometryError::TooManyIndices { .. })
        ));
    }
}
