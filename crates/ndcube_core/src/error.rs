//! Geometry error types
//!
//! The math kernel itself is total; the only user-facing failures are a
//! bad dimension request and an out-of-range basis selection.

use std::fmt;

/// Largest dimension the composer accepts
///
/// Vertex count is 2^n and edge indices are `u32`, so the cap keeps a
/// bundle in the tens of megabytes.
pub const MAX_DIMENSION: usize = 16;

/// Smallest dimension with a rotation plane
pub const MIN_DIMENSION: usize = 2;

/// Error type for bundle composition
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Dimension below 2 (no 2-plane to rotate in)
    InvalidDimension(i64),
    /// Dimension above [`MAX_DIMENSION`]
    DimensionTooLarge(usize),
    /// A composite rotation referenced a basis matrix that does not exist
    BasisIndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of matrices in the basis
        len: usize,
    },
    /// A deserialized bundle does not have the shape of a hypercube bundle
    MalformedBundle(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidDimension(n) => {
                write!(f, "Invalid dimension {}: must be at least {}", n, MIN_DIMENSION)
            }
            GeometryError::DimensionTooLarge(n) => {
                write!(f, "Dimension {} too large: at most {} is supported", n, MAX_DIMENSION)
            }
            GeometryError::BasisIndexOutOfRange { index, len } => {
                write!(f, "Basis index {} out of range for basis of {} rotations", index, len)
            }
            GeometryError::MalformedBundle(msg) => write!(f, "Malformed bundle: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Check an externally supplied dimension
///
/// Accepts any integer in `MIN_DIMENSION..=MAX_DIMENSION`.
pub fn validate_dimension(n: i64) -> Result<usize, GeometryError> {
    if n < MIN_DIMENSION as i64 {
        return Err(GeometryError::InvalidDimension(n));
    }
    let n = n as usize;
    if n > MAX_DIMENSION {
        return Err(GeometryError::DimensionTooLarge(n));
    }
    Ok(n)
}
