//! Skew-symmetric matrix utilities (hat and vee operators)
//!
//! One stateless module consumed by the rotation, pose, screw, and twist
//! representations.

use nalgebra::{Matrix3, Vector3};

/// Skew-symmetric matrix from vector (hat operator)
///
/// For v = [x, y, z]^T:
/// ```text
/// [v]× = [ 0  -z   y]
///        [ z   0  -x]
///        [-y   x   0]
/// ```
///
/// Satisfies [a]× * b = a × b.
pub fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y,
        v.z, 0.0, -v.x,
        -v.y, v.x, 0.0,
    )
}

/// Vector from skew-symmetric matrix (vee operator)
///
/// Inverse of [`skew`]: reads the (2,1), (0,2), (1,0) entries.
pub fn unskew(m: &Matrix3<f64>) -> Vector3<f64> {
    Vector3::new(m[(2, 1)], m[(0, 2)], m[(1, 0)])
}
