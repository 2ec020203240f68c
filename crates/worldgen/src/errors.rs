use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorldGenError {
    #[error("Invalid dimensions: {width}x{depth} (both must be greater than zero)")]
    InvalidDimensions { width: usize, depth: usize },

    #[error("Invalid octave count: {0} (at least one octave is required)")]
    InvalidOctaves(u32),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Grid too large: {width}x{depth} cells overflow the address space")]
    GridTooLarge { width: usize, depth: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorldGenError>;

/// Checks a parameter set the way both the generator and the config loader do.
pub(crate) fn validate_params(
    width: usize,
    depth: usize,
    frequency: f64,
    octaves: u32,
    redistribution: f64,
) -> Result<()> {
    if width == 0 || depth == 0 {
        return Err(WorldGenError::InvalidDimensions { width, depth });
    }
    if width.checked_mul(depth).is_none() {
        return Err(WorldGenError::GridTooLarge { width, depth });
    }
    if octaves == 0 {
        return Err(WorldGenError::InvalidOctaves(octaves));
    }
    if !frequency.is_finite() {
        return Err(WorldGenError::InvalidParameter {
            name: "frequency",
            value: frequency,
        });
    }
    if !redistribution.is_finite() {
        return Err(WorldGenError::InvalidParameter {
            name: "redistribution",
            value: redistribution,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            validate_params(0, 4, 1.0, 3, 1.0),
            Err(WorldGenError::InvalidDimensions { width: 0, depth: 4 })
        ));
        assert!(matches!(
            validate_params(4, 0, 1.0, 3, 1.0),
            Err(WorldGenError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_grid() {
        assert!(matches!(
            validate_params(usize::MAX, 2, 1.0, 3, 1.0),
            Err(WorldGenError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_parameters() {
        assert!(matches!(
            validate_params(4, 4, f64::NAN, 3, 1.0),
            Err(WorldGenError::InvalidParameter { name: "frequency", .. })
        ));
        assert!(matches!(
            validate_params(4, 4, 1.0, 3, f64::INFINITY),
            Err(WorldGenError::InvalidParameter { name: "redistribution", .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = WorldGenError::InvalidOctaves(0);
        assert_eq!(
            err.to_string(),
            "Invalid octave count: 0 (at least one octave is required)"
        );
    }
}
