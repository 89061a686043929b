//! Screw motions: exponential coordinates of a rigid motion
//!
//! A screw motion holds 6 exponential coordinates S·θ = (ω·θ, v·θ) together
//! with the derived magnitude θ, the unit screw axis S = (ω, v), and the
//! pose produced by the SE(3) exponential map:
//!
//! - forward: R = exp([ω]×θ), p = G(θ)·v with
//!   G(θ) = Iθ + (1 − cos θ)[ω]× + (θ − sin θ)[ω]×²
//! - inverse (from a pose): ω·θ from the SO(3) logarithm, then
//!   v·θ = θ·(G⁻¹(θ)·p) with
//!   G⁻¹(θ) = I/θ − ½[ω]× + (1/θ − ½·cot(θ/2))[ω]×²
//!
//! cot(θ/2) is undefined at θ = 0, so the pure-translation region is
//! branched on before the formula is applied.

use std::fmt;

use nalgebra::{Matrix3, Vector3, Vector6};
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;
use crate::math::skew;
use crate::representations::{Pose, Position, Rotation};
use crate::ANGLE_TOLERANCE;

/// Exponential coordinates of a rigid motion with the derived screw axis,
/// magnitude, and pose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrewMotion {
    exponential_coordinates: Vector6<f64>,
    theta: f64,
    screw_axis: Vector6<f64>,
    pose: Pose,
}

impl ScrewMotion {
    /// SE(3) exponential map from coordinates e = (ω·θ, v·θ)
    ///
    /// A rotational magnitude below [`ANGLE_TOLERANCE`] is the
    /// pure-translation case: R = I, p = v·θ, and θ is the translation
    /// magnitude (with the screw axis purely linear, or the zero 6-vector
    /// when the coordinates are all zero). The produced pose is valid by
    /// construction, so rotation validation is skipped.
    pub fn from_exponential_coordinates(coordinates: &Vector6<f64>) -> Self {
        let (w_theta, v_theta) = split_coordinates(coordinates);
        let theta_rot = w_theta.norm();

        let pose = if theta_rot < ANGLE_TOLERANCE {
            Pose::from_parts(Rotation::identity(), Position::new(v_theta))
        } else {
            let omega = w_theta / theta_rot;
            let v = v_theta / theta_rot;
            let rotation = Rotation::from_exponential_coordinates(&w_theta);
            let p = g_matrix(theta_rot, &omega) * v;
            Pose::from_parts(rotation, Position::new(p))
        };

        let (theta, screw_axis) = axis_and_theta(coordinates);
        Self {
            exponential_coordinates: *coordinates,
            theta,
            screw_axis,
            pose,
        }
    }

    /// SE(3) logarithm: recover the exponential coordinates of a pose
    ///
    /// θ ≈ 0 means no angular component, and the linear part is the
    /// position directly.
    pub fn from_pose(pose: &Pose) -> Self {
        let w_theta = pose.rotation().exponential_coordinates();
        let theta = w_theta.norm();
        let p = pose.origin_position();

        let mut coordinates = Vector6::zeros();
        if theta < ANGLE_TOLERANCE {
            coordinates.fixed_rows_mut::<3>(3).copy_from(p);
        } else {
            let omega = w_theta / theta;
            let v_theta = theta * (g_matrix_inverse(theta, &omega) * p);
            coordinates.fixed_rows_mut::<3>(0).copy_from(&w_theta);
            coordinates.fixed_rows_mut::<3>(3).copy_from(&v_theta);
        }

        let (theta, screw_axis) = axis_and_theta(&coordinates);
        Self {
            exponential_coordinates: coordinates,
            theta,
            screw_axis,
            pose: pose.clone(),
        }
    }

    /// Construct from a slice of 6 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 6 elements.
    pub fn from_slice(data: &[f64]) -> Result<Self, RepresentationError> {
        if data.len() != 6 {
            return Err(RepresentationError::InvalidDimension {
                expected: "6x1 vector (6)",
                got: data.len(),
            });
        }

        Ok(Self::from_exponential_coordinates(&Vector6::from_row_slice(
            data,
        )))
    }

    /// The exponential coordinates S·θ = (ω·θ, v·θ)
    pub fn exponential_coordinates(&self) -> &Vector6<f64> {
        &self.exponential_coordinates
    }

    /// The motion magnitude θ
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The unit screw axis S = (ω, v), with ‖ω‖ = 1, or ‖v‖ = 1 and ω = 0
    /// in the pure-translation case, or the zero 6-vector for the all-zero
    /// coordinates
    pub fn screw_axis(&self) -> &Vector6<f64> {
        &self.screw_axis
    }

    /// The pose produced by the screw exponential
    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}

impl fmt::Display for ScrewMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Screw motion (exponential coordinates):\n{}",
            self.exponential_coordinates
        )
    }
}

fn split_coordinates(e: &Vector6<f64>) -> (Vector3<f64>, Vector3<f64>) {
    (
        e.fixed_rows::<3>(0).into_owned(),
        e.fixed_rows::<3>(3).into_owned(),
    )
}

/// Screw magnitude and unit axis from exponential coordinates
fn axis_and_theta(e: &Vector6<f64>) -> (f64, Vector6<f64>) {
    let (w_theta, v_theta) = split_coordinates(e);
    let theta_rot = w_theta.norm();

    if theta_rot < ANGLE_TOLERANCE {
        let theta = v_theta.norm();
        if theta < ANGLE_TOLERANCE {
            return (0.0, Vector6::zeros());
        }
        let mut axis = Vector6::zeros();
        axis.fixed_rows_mut::<3>(3).copy_from(&(v_theta / theta));
        return (theta, axis);
    }

    (theta_rot, e / theta_rot)
}

/// G(θ) = Iθ + (1 − cos θ)[ω]× + (θ − sin θ)[ω]×²
///
/// `omega` must be a unit vector.
fn g_matrix(theta: f64, omega: &Vector3<f64>) -> Matrix3<f64> {
    let w_skew = skew(omega);
    Matrix3::identity() * theta
        + (1.0 - theta.cos()) * w_skew
        + (theta - theta.sin()) * (w_skew * w_skew)
}

/// G⁻¹(θ) = I/θ − ½[ω]× + (1/θ − ½·cot(θ/2))[ω]×²
///
/// Undefined at θ = 0; callers branch on the pure-translation case first.
fn g_matrix_inverse(theta: f64, omega: &Vector3<f64>) -> Matrix3<f64> {
    let w_skew = skew(omega);
    Matrix3::identity() / theta - 0.5 * w_skew
        + (1.0 / theta - 0.5 / (theta / 2.0).tan()) * (w_skew * w_skew)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_quarter_turn_about_z() {
        let e = Vector6::new(0.0, 0.0, PI / 2.0, 1.0, 0.0, 0.0);
        let screw = ScrewMotion::from_exponential_coordinates(&e);

        assert_relative_eq!(screw.theta(), PI / 2.0, epsilon = 1e-12);

        let expected_r = Matrix3::new(
            0.0, -1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        assert_relative_eq!(*screw.pose().rotation_matrix(), expected_r, epsilon = 1e-12);

        // p = G(π/2)·v with v = [2/π, 0, 0]
        let expected_p = Vector3::new(2.0 / PI, 2.0 / PI, 0.0);
        assert_relative_eq!(*screw.pose().origin_position(), expected_p, epsilon = 1e-12);
    }

    #[test]
    fn test_pure_translation() {
        let e = Vector6::new(0.0, 0.0, 0.0, 1.0, 2.0, 2.0);
        let screw = ScrewMotion::from_exponential_coordinates(&e);

        assert_relative_eq!(screw.theta(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            *screw.pose().rotation_matrix(),
            Matrix3::identity(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            *screw.pose().origin_position(),
            Vector3::new(1.0, 2.0, 2.0),
            epsilon = 1e-12
        );

        let axis = screw.screw_axis();
        assert_relative_eq!(
            axis.fixed_rows::<3>(0).into_owned(),
            Vector3::zeros(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            axis.fixed_rows::<3>(3).into_owned(),
            Vector3::new(1.0, 2.0, 2.0) / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_all_zero_coordinates() {
        let screw = ScrewMotion::from_exponential_coordinates(&Vector6::zeros());

        assert_relative_eq!(screw.theta(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(*screw.screw_axis(), Vector6::zeros(), epsilon = 1e-12);
        assert_relative_eq!(
            *screw.pose().transform(),
            *Pose::identity().transform(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unit_screw_axis() {
        let e = Vector6::new(0.2, -0.4, 0.6, 1.0, 0.0, -1.0);
        let screw = ScrewMotion::from_exponential_coordinates(&e);

        let w = screw.screw_axis().fixed_rows::<3>(0).into_owned();
        assert_relative_eq!(w.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            *screw.screw_axis() * screw.theta(),
            e,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_exp_log_roundtrip() {
        let e = Vector6::new(0.3, 0.5, -0.2, 1.5, -0.7, 0.9);
        let screw = ScrewMotion::from_exponential_coordinates(&e);
        let recovered = ScrewMotion::from_pose(screw.pose());

        assert_relative_eq!(*recovered.exponential_coordinates(), e, epsilon = 1e-9);
    }

    #[test]
    fn test_pure_translation_roundtrip() {
        let pose = Pose::new(Matrix3::identity(), Vector3::new(4.0, -1.0, 0.5)).unwrap();
        let screw = ScrewMotion::from_pose(&pose);

        assert_relative_eq!(
            *screw.exponential_coordinates(),
            Vector6::new(0.0, 0.0, 0.0, 4.0, -1.0, 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_from_slice_wrong_length() {
        assert!(matches!(
            ScrewMotion::from_slice(&[1.0; 7]),
            Err(RepresentationError::InvalidDimension { got: 7, .. })
        ));
    }
}
