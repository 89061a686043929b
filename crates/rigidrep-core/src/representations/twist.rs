//! Twists: rigid-body velocities in body and space frames
//!
//! A motion holds a pose together with the body-frame and space-frame
//! 6-vectors of one instantaneous velocity, related through the pose's
//! adjoint map:
//!
//! - V_space = Ad_T · V_body
//! - V_body = Ad_T⁻¹ · V_space
//!
//! Constructing from either frame derives the other, so the pair is always
//! mutually consistent with the held pose.

use std::fmt;

use nalgebra::{Matrix4, Vector6};
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;
use crate::math::skew;
use crate::representations::{Pose, ScrewMotion};

/// A twist (ω, v) with its dual body/space representations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    pose: Pose,
    body_twist: Vector6<f64>,
    space_twist: Vector6<f64>,
}

impl Motion {
    /// Construct from a body-frame twist; derives V_space = Ad_T · V_body
    pub fn from_body_twist(body_twist: Vector6<f64>, pose: Pose) -> Self {
        let space_twist = pose.adjoint() * body_twist;
        Self {
            pose,
            body_twist,
            space_twist,
        }
    }

    /// Construct from a space-frame twist; derives V_body = Ad_T⁻¹ · V_space
    pub fn from_space_twist(space_twist: Vector6<f64>, pose: Pose) -> Self {
        let body_twist = pose.adjoint_inverse() * space_twist;
        Self {
            pose,
            body_twist,
            space_twist,
        }
    }

    /// Construct from exponential coordinates e = (ω·θ, v·θ)
    ///
    /// The pose is built by the screw exponential and `e` is wrapped as the
    /// space-frame twist; the body-frame twist follows via the adjoint
    /// inverse.
    pub fn from_exponential_coordinates(coordinates: &Vector6<f64>) -> Self {
        let screw = ScrewMotion::from_exponential_coordinates(coordinates);
        Self::from_space_twist(*coordinates, screw.pose().clone())
    }

    /// Construct a body-frame twist from a slice of 6 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 6 elements.
    pub fn from_body_slice(data: &[f64], pose: Pose) -> Result<Self, RepresentationError> {
        Ok(Self::from_body_twist(twist_from_slice(data)?, pose))
    }

    /// Construct a space-frame twist from a slice of 6 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 6 elements.
    pub fn from_space_slice(data: &[f64], pose: Pose) -> Result<Self, RepresentationError> {
        Ok(Self::from_space_twist(twist_from_slice(data)?, pose))
    }

    /// The body-frame twist
    pub fn body_twist(&self) -> &Vector6<f64> {
        &self.body_twist
    }

    /// The space-frame twist
    pub fn space_twist(&self) -> &Vector6<f64> {
        &self.space_twist
    }

    /// The pose relating the two frames
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// 4x4 matrix form of the body twist: [[[ω]×, v], [0, 0, 0, 0]]
    pub fn body_twist_matrix(&self) -> Matrix4<f64> {
        twist_matrix(&self.body_twist)
    }

    /// 4x4 matrix form of the space twist: [[[ω]×, v], [0, 0, 0, 0]]
    pub fn space_twist_matrix(&self) -> Matrix4<f64> {
        twist_matrix(&self.space_twist)
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body twist:\n{}\nSpace twist:\n{}",
            self.body_twist, self.space_twist
        )
    }
}

fn twist_from_slice(data: &[f64]) -> Result<Vector6<f64>, RepresentationError> {
    if data.len() != 6 {
        return Err(RepresentationError::InvalidDimension {
            expected: "6x1 vector (6)",
            got: data.len(),
        });
    }

    Ok(Vector6::from_row_slice(data))
}

/// se(3) matrix form of a twist 6-vector
fn twist_matrix(twist: &Vector6<f64>) -> Matrix4<f64> {
    let w = twist.fixed_rows::<3>(0).into_owned();
    let v = twist.fixed_rows::<3>(3).into_owned();

    let mut m = Matrix4::zeros();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(&skew(&w));
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(&v);
    m
}
