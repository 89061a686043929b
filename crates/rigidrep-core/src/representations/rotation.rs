//! SO(3) rotation matrices and their exponential coordinates
//!
//! Implements the rotation-matrix exponential and logarithm maps:
//!
//! - Rodrigues' formula: R = I + sin(θ)[ω]× + (1 − cos θ)[ω]×²
//! - Logarithm: recovers (θ, ω) with θ ∈ [0, π], branching on the
//!   identity and trace ≈ −1 singularities
//!
//! The logarithm is computed once at construction and cached, so the
//! axis-angle accessors are O(1).

use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;
use crate::math::{skew, unskew};
use crate::{ANGLE_TOLERANCE, MATRIX_TOLERANCE};

/// Branch of the SO(3) logarithm map
///
/// Selected from the matrix before any extraction; the antipodal case
/// carries the index of the largest diagonal entry (lowest index wins on
/// exact ties).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogBranch {
    Identity,
    AntipodalAxis(usize),
    General,
}

impl LogBranch {
    fn classify(matrix: &Matrix3<f64>) -> Self {
        if (matrix - Matrix3::identity()).amax() <= MATRIX_TOLERANCE {
            return LogBranch::Identity;
        }

        if (matrix.trace() + 1.0).abs() <= MATRIX_TOLERANCE {
            let (r11, r22, r33) = (matrix[(0, 0)], matrix[(1, 1)], matrix[(2, 2)]);
            let axis = if r11 >= r22 && r11 >= r33 {
                0
            } else if r22 >= r33 {
                1
            } else {
                2
            };
            return LogBranch::AntipodalAxis(axis);
        }

        LogBranch::General
    }
}

/// A validated SO(3) rotation matrix
///
/// Invariant: R^T R = I within [`MATRIX_TOLERANCE`] and det(R) = +1.
/// The axis-angle pair (θ, ω) with θ ∈ [0, π] is computed at construction
/// by the logarithm map; ω is a unit vector, or zero when θ = 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rotation {
    matrix: Matrix3<f64>,
    theta: f64,
    omega: Vector3<f64>,
}

impl Rotation {
    /// Construct from a matrix, validating orthonormality and det = +1
    ///
    /// # Errors
    /// [`RepresentationError::InvalidRotation`] if R^T R differs from the
    /// identity by more than [`MATRIX_TOLERANCE`] in any entry, or if the
    /// determinant is not +1 (a determinant of −1 is a reflection, not a
    /// rotation).
    pub fn new(matrix: Matrix3<f64>) -> Result<Self, RepresentationError> {
        if (matrix.transpose() * matrix - Matrix3::identity()).amax() > MATRIX_TOLERANCE {
            return Err(RepresentationError::InvalidRotation {
                reason: "matrix is not orthonormal (R^T R != I)",
            });
        }
        if (matrix.determinant() - 1.0).abs() > MATRIX_TOLERANCE {
            return Err(RepresentationError::InvalidRotation {
                reason: "determinant must be +1",
            });
        }

        Ok(Self::new_unchecked(matrix))
    }

    /// Construct from a matrix the caller has already guaranteed valid
    ///
    /// Used for internally-generated matrices (results of the exponential
    /// map, transposes of validated rotations). Passing an invalid matrix
    /// produces an inconsistent but constructible object; the caller accepts
    /// responsibility for correctness.
    pub fn new_unchecked(matrix: Matrix3<f64>) -> Self {
        let (theta, omega) = Self::compute_log(&matrix);
        Self {
            matrix,
            theta,
            omega,
        }
    }

    /// The identity rotation (θ = 0, ω = 0)
    pub fn identity() -> Self {
        Self::new_unchecked(Matrix3::identity())
    }

    /// Exponential map from exponential coordinates r = ω·θ
    ///
    /// θ = ‖r‖; below [`ANGLE_TOLERANCE`] the result is the identity,
    /// otherwise Rodrigues' formula is applied to the normalized axis.
    /// The result is orthonormal by construction, so validation is skipped.
    pub fn from_exponential_coordinates(coordinates: &Vector3<f64>) -> Self {
        let theta = coordinates.norm();
        if theta < ANGLE_TOLERANCE {
            return Self::identity();
        }

        let omega = coordinates / theta;
        Self::new_unchecked(Self::matrix_exponential(theta, &omega))
    }

    /// Construct from a row-major slice of 9 elements, with validation
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 9 elements; otherwise as [`Rotation::new`].
    pub fn from_slice(data: &[f64]) -> Result<Self, RepresentationError> {
        if data.len() != 9 {
            return Err(RepresentationError::InvalidDimension {
                expected: "3x3 matrix (9)",
                got: data.len(),
            });
        }

        Self::new(Matrix3::from_row_slice(data))
    }

    /// Rodrigues' formula: R = I + sin(θ)[ω]× + (1 − cos θ)[ω]×²
    ///
    /// `omega` must be a unit vector.
    pub fn matrix_exponential(theta: f64, omega: &Vector3<f64>) -> Matrix3<f64> {
        let w_skew = skew(omega);
        Matrix3::identity() + theta.sin() * w_skew + (1.0 - theta.cos()) * w_skew * w_skew
    }

    /// The rotation matrix
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Rotation angle θ ∈ [0, π] [rad]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Unit rotation axis ω (zero vector when θ = 0)
    pub fn omega(&self) -> &Vector3<f64> {
        &self.omega
    }

    /// Exponential coordinates ω·θ as a single 3-vector
    pub fn exponential_coordinates(&self) -> Vector3<f64> {
        self.omega * self.theta
    }

    /// SO(3) logarithm map
    ///
    /// Three-way branch:
    /// - R ≈ I: θ = 0, ω = 0
    /// - trace(R) ≈ −1: θ = π; the skew-extraction formula is degenerate,
    ///   so ω is recovered from the largest diagonal entry
    /// - otherwise: θ = arccos((trace − 1)/2), [ω]× = (R − R^T)/(2 sin θ)
    fn compute_log(matrix: &Matrix3<f64>) -> (f64, Vector3<f64>) {
        match LogBranch::classify(matrix) {
            LogBranch::Identity => (0.0, Vector3::zeros()),
            LogBranch::AntipodalAxis(i) => (PI, Self::antipodal_axis(matrix, i)),
            LogBranch::General => {
                let theta = (0.5 * (matrix.trace() - 1.0)).clamp(-1.0, 1.0).acos();
                let skew_omega = (matrix - matrix.transpose()) / (2.0 * theta.sin());
                (theta, unskew(&skew_omega))
            }
        }
    }

    /// Axis recovery for the θ = π case from diagonal entry `i`
    ///
    /// At θ = π the matrix is symmetric, so the upper-triangle entries used
    /// here equal their lower-triangle counterparts.
    fn antipodal_axis(m: &Matrix3<f64>, i: usize) -> Vector3<f64> {
        let scale = 1.0 / (2.0 * (1.0 + m[(i, i)])).sqrt();
        let axis = match i {
            0 => Vector3::new(m[(0, 0)] + 1.0, m[(0, 1)], m[(0, 2)]),
            1 => Vector3::new(m[(0, 1)], m[(1, 1)] + 1.0, m[(1, 2)]),
            _ => Vector3::new(m[(0, 2)], m[(1, 2)], m[(2, 2)] + 1.0),
        };
        scale * axis
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation matrix:\n{}", self.matrix)
    }
}
