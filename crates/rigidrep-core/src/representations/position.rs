//! Position vectors
//!
//! A thin, dimension-checked wrapper around a 3-vector with no derived
//! state.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;

/// A 3D position vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    vector: Vector3<f64>,
}

impl Position {
    /// Wrap a 3-vector
    pub fn new(vector: Vector3<f64>) -> Self {
        Self { vector }
    }

    /// Construct from a slice of 3 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 3 elements.
    pub fn from_slice(data: &[f64]) -> Result<Self, RepresentationError> {
        if data.len() != 3 {
            return Err(RepresentationError::InvalidDimension {
                expected: "3x1 vector (3)",
                got: data.len(),
            });
        }

        Ok(Self::new(Vector3::from_row_slice(data)))
    }

    /// The position vector
    pub fn vector(&self) -> &Vector3<f64> {
        &self.vector
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position vector:\n{}", self.vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_slice() {
        let p = Position::from_slice(&[1.0, 2.0, 3.0]).unwrap();

        assert_relative_eq!(*p.vector(), Vector3::new(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        assert!(matches!(
            Position::from_slice(&[1.0, 2.0]),
            Err(RepresentationError::InvalidDimension { got: 2, .. })
        ));
    }
}
