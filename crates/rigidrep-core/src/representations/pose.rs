//! Rigid-body poses (SE(3))
//!
//! A pose composes a [`Rotation`] and a [`Position`] and caches the derived
//! maps used by the twist and wrench representations:
//!
//! - homogeneous transform T = [[R, p], [0 0 0, 1]]
//! - closed-form inverse T⁻¹ = [[R^T, −R^T p], [0 0 0, 1]]
//! - adjoint Ad_T = [[R, 0], [[p]× R, R]] and its closed-form inverse
//!
//! The inverse transform and inverse adjoint are always built from their
//! closed forms, never by general matrix inversion.

use std::fmt;

use nalgebra::{Matrix3, Matrix4, Matrix6, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;
use crate::math::skew;
use crate::representations::{Position, Rotation};
use crate::ANGLE_TOLERANCE;

/// A rigid-body pose with cached transform and adjoint maps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pose {
    rotation: Rotation,
    position: Position,
    transform: Matrix4<f64>,
    transform_inverse: Matrix4<f64>,
    adjoint: Matrix6<f64>,
    adjoint_inverse: Matrix6<f64>,
}

impl Pose {
    /// Construct from a rotation matrix and origin position, with validation
    ///
    /// # Errors
    /// Propagates [`RepresentationError::InvalidRotation`] from
    /// [`Rotation::new`].
    pub fn new(
        rotation_matrix: Matrix3<f64>,
        origin_position: Vector3<f64>,
    ) -> Result<Self, RepresentationError> {
        let rotation = Rotation::new(rotation_matrix)?;
        Ok(Self::from_parts(rotation, Position::new(origin_position)))
    }

    /// Construct from a rotation matrix the caller has already guaranteed
    /// valid (results of the exponential map, transposes of validated
    /// rotations)
    pub fn new_unchecked(rotation_matrix: Matrix3<f64>, origin_position: Vector3<f64>) -> Self {
        Self::from_parts(
            Rotation::new_unchecked(rotation_matrix),
            Position::new(origin_position),
        )
    }

    /// Compose already-constructed leaves into a pose
    pub fn from_parts(rotation: Rotation, position: Position) -> Self {
        let r = rotation.matrix();
        let p = position.vector();

        let transform = Self::build_transform(r, p);
        let transform_inverse = Self::build_transform_inverse(r, p);
        let adjoint = Self::build_adjoint(r, p);
        let adjoint_inverse = Self::build_adjoint_inverse(r, p);

        Self {
            rotation,
            position,
            transform,
            transform_inverse,
            adjoint,
            adjoint_inverse,
        }
    }

    /// The identity pose (R = I, p = 0)
    pub fn identity() -> Self {
        Self::new_unchecked(Matrix3::identity(), Vector3::zeros())
    }

    /// Construct from a 4x4 homogeneous transform, with validation
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the bottom row is not
    /// `[0, 0, 0, 1]` within [`ANGLE_TOLERANCE`] (the matrix is structurally
    /// not a homogeneous transform); [`RepresentationError::InvalidRotation`]
    /// if the extracted rotation block fails validation.
    pub fn from_transform_matrix(transform: &Matrix4<f64>) -> Result<Self, RepresentationError> {
        let bottom = [0.0, 0.0, 0.0, 1.0];
        for (j, expected) in bottom.iter().enumerate() {
            if (transform[(3, j)] - expected).abs() > ANGLE_TOLERANCE {
                return Err(RepresentationError::InvalidDimension {
                    expected: "4x4 homogeneous transform with bottom row [0, 0, 0, 1]",
                    got: 16,
                });
            }
        }

        let (r, p) = Self::split_transform(transform);
        Self::new(r, p)
    }

    /// Construct from a 4x4 homogeneous transform the caller has already
    /// guaranteed valid; skips both the bottom-row and rotation checks
    pub fn from_transform_matrix_unchecked(transform: &Matrix4<f64>) -> Self {
        let (r, p) = Self::split_transform(transform);
        Self::new_unchecked(r, p)
    }

    /// Construct from a space-frame description (data used as-is)
    ///
    /// # Errors
    /// As [`Pose::new`].
    pub fn from_space_frame(
        rotation_matrix: Matrix3<f64>,
        origin_position: Vector3<f64>,
    ) -> Result<Self, RepresentationError> {
        Self::new(rotation_matrix, origin_position)
    }

    /// Construct from a body-frame description
    ///
    /// A body-frame description of a pose is the inverse transform relative
    /// to the space frame, so the data is inverted (R ← R^T, p ← −R^T p)
    /// before delegating to the primary constructor.
    ///
    /// # Errors
    /// As [`Pose::new`].
    pub fn from_body_frame(
        rotation_matrix: Matrix3<f64>,
        origin_position: Vector3<f64>,
    ) -> Result<Self, RepresentationError> {
        let r_t = rotation_matrix.transpose();
        let p = -(r_t * origin_position);
        Self::new(r_t, p)
    }

    /// The rotation component
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The position component
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The 3x3 rotation matrix
    pub fn rotation_matrix(&self) -> &Matrix3<f64> {
        self.rotation.matrix()
    }

    /// The origin position vector
    pub fn origin_position(&self) -> &Vector3<f64> {
        self.position.vector()
    }

    /// The homogeneous transform T
    pub fn transform(&self) -> &Matrix4<f64> {
        &self.transform
    }

    /// The closed-form inverse T⁻¹
    pub fn transform_inverse(&self) -> &Matrix4<f64> {
        &self.transform_inverse
    }

    /// The adjoint map Ad_T
    pub fn adjoint(&self) -> &Matrix6<f64> {
        &self.adjoint
    }

    /// The closed-form inverse adjoint Ad_T⁻¹ (the adjoint of T⁻¹)
    pub fn adjoint_inverse(&self) -> &Matrix6<f64> {
        &self.adjoint_inverse
    }

    /// Affine transform of a point: the top three rows of T·[v; 1]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation.matrix() * vector + self.position.vector()
    }

    fn split_transform(transform: &Matrix4<f64>) -> (Matrix3<f64>, Vector3<f64>) {
        let r = transform.fixed_view::<3, 3>(0, 0).into_owned();
        let p = transform.fixed_view::<3, 1>(0, 3).into_owned();
        (r, p)
    }

    fn build_transform(r: &Matrix3<f64>, p: &Vector3<f64>) -> Matrix4<f64> {
        let mut t = Matrix4::identity();
        t.fixed_view_mut::<3, 3>(0, 0).copy_from(r);
        t.fixed_view_mut::<3, 1>(0, 3).copy_from(p);
        t
    }

    fn build_transform_inverse(r: &Matrix3<f64>, p: &Vector3<f64>) -> Matrix4<f64> {
        let r_t = r.transpose();
        let mut t = Matrix4::identity();
        t.fixed_view_mut::<3, 3>(0, 0).copy_from(&r_t);
        t.fixed_view_mut::<3, 1>(0, 3).copy_from(&(-(r_t * p)));
        t
    }

    fn build_adjoint(r: &Matrix3<f64>, p: &Vector3<f64>) -> Matrix6<f64> {
        let mut ad = Matrix6::zeros();
        ad.fixed_view_mut::<3, 3>(0, 0).copy_from(r);
        ad.fixed_view_mut::<3, 3>(3, 0).copy_from(&(skew(p) * r));
        ad.fixed_view_mut::<3, 3>(3, 3).copy_from(r);
        ad
    }

    fn build_adjoint_inverse(r: &Matrix3<f64>, p: &Vector3<f64>) -> Matrix6<f64> {
        let r_t = r.transpose();
        let mut ad = Matrix6::zeros();
        ad.fixed_view_mut::<3, 3>(0, 0).copy_from(&r_t);
        ad.fixed_view_mut::<3, 3>(3, 0).copy_from(&(-(r_t * skew(p))));
        ad.fixed_view_mut::<3, 3>(3, 3).copy_from(&r_t);
        ad
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transformation matrix:\n{}", self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn rotation_z(angle: f64) -> Matrix3<f64> {
        Matrix3::new(
            angle.cos(), -angle.sin(), 0.0,
            angle.sin(), angle.cos(), 0.0,
            0.0, 0.0, 1.0,
        )
    }

    #[test]
    fn test_identity_rotation_translation() {
        let pose = Pose::new(Matrix3::identity(), Vector3::new(1.0, 2.0, 3.0)).unwrap();

        let t = pose.transform();
        assert_relative_eq!(t.fixed_view::<3, 3>(0, 0).into_owned(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(t[(0, 3)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(1, 3)], 2.0, epsilon = 1e-12);
        assert_relative_eq!(t[(2, 3)], 3.0, epsilon = 1e-12);

        let t_inv = pose.transform_inverse();
        assert_relative_eq!(t_inv[(0, 3)], -1.0, epsilon = 1e-12);
        assert_relative_eq!(t_inv[(1, 3)], -2.0, epsilon = 1e-12);
        assert_relative_eq!(t_inv[(2, 3)], -3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_times_inverse_is_identity() {
        let pose = Pose::new(rotation_z(0.7), Vector3::new(-0.5, 2.0, 1.5)).unwrap();

        assert_relative_eq!(
            pose.transform() * pose.transform_inverse(),
            Matrix4::identity(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_adjoint_times_inverse_is_identity() {
        let pose = Pose::new(rotation_z(1.3), Vector3::new(0.3, -1.0, 0.8)).unwrap();

        assert_relative_eq!(
            pose.adjoint() * pose.adjoint_inverse(),
            Matrix6::identity(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_adjoint_block_structure() {
        let r = rotation_z(PI / 3.0);
        let p = Vector3::new(1.0, 0.5, -2.0);
        let pose = Pose::new(r, p).unwrap();

        let ad = pose.adjoint();
        assert_relative_eq!(ad.fixed_view::<3, 3>(0, 0).into_owned(), r, epsilon = 1e-12);
        assert_relative_eq!(
            ad.fixed_view::<3, 3>(0, 3).into_owned(),
            Matrix3::zeros(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            ad.fixed_view::<3, 3>(3, 0).into_owned(),
            skew(&p) * r,
            epsilon = 1e-12
        );
        assert_relative_eq!(ad.fixed_view::<3, 3>(3, 3).into_owned(), r, epsilon = 1e-12);
    }

    #[test]
    fn test_from_transform_matrix_roundtrip() {
        let pose = Pose::new(rotation_z(0.4), Vector3::new(2.0, 0.0, -1.0)).unwrap();
        let rebuilt = Pose::from_transform_matrix(pose.transform()).unwrap();

        assert_relative_eq!(*rebuilt.transform(), *pose.transform(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_transform_matrix_rejects_bad_bottom_row() {
        let mut t = Matrix4::identity();
        t[(3, 0)] = 1e-6;

        assert!(matches!(
            Pose::from_transform_matrix(&t),
            Err(RepresentationError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_body_frame_inverts() {
        let r = rotation_z(0.9);
        let p = Vector3::new(1.0, -2.0, 0.5);

        let space = Pose::from_space_frame(r, p).unwrap();
        let body = Pose::from_body_frame(r, p).unwrap();

        // A body-frame description is the inverse transform
        assert_relative_eq!(*body.transform(), *space.transform_inverse(), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_vector() {
        let pose = Pose::new(rotation_z(PI / 2.0), Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let v = pose.transform_vector(&Vector3::new(1.0, 0.0, 0.0));

        // 90° about z maps x to y, then translate by [1, 0, 0]
        assert_relative_eq!(v, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
