//! Wrenches: force/torque pairs in body and space frames
//!
//! A load holds a pose together with the body-frame and space-frame
//! 6-vectors of one wrench (moment, force), related through the *transpose*
//! of the adjoint map:
//!
//! - F_body = Ad_T^T · F_space
//! - F_space = Ad_T⁻¹^T · F_body
//!
//! The transpose (not the inverse) appears because wrenches transform as
//! covectors, the duals of twists; this keeps the power F^T·V invariant
//! across frames.

use std::fmt;

use nalgebra::Vector6;
use serde::{Deserialize, Serialize};

use crate::error::RepresentationError;
use crate::representations::Pose;

/// A wrench (m, f) with its dual body/space representations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pose: Pose,
    body_wrench: Vector6<f64>,
    space_wrench: Vector6<f64>,
}

impl Load {
    /// Construct from a body-frame wrench; derives F_space = Ad_T⁻¹^T · F_body
    pub fn from_body_wrench(body_wrench: Vector6<f64>, pose: Pose) -> Self {
        let space_wrench = pose.adjoint_inverse().transpose() * body_wrench;
        Self {
            pose,
            body_wrench,
            space_wrench,
        }
    }

    /// Construct from a space-frame wrench; derives F_body = Ad_T^T · F_space
    pub fn from_space_wrench(space_wrench: Vector6<f64>, pose: Pose) -> Self {
        let body_wrench = pose.adjoint().transpose() * space_wrench;
        Self {
            pose,
            body_wrench,
            space_wrench,
        }
    }

    /// Construct a body-frame wrench from a slice of 6 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 6 elements.
    pub fn from_body_slice(data: &[f64], pose: Pose) -> Result<Self, RepresentationError> {
        Ok(Self::from_body_wrench(wrench_from_slice(data)?, pose))
    }

    /// Construct a space-frame wrench from a slice of 6 elements
    ///
    /// # Errors
    /// [`RepresentationError::InvalidDimension`] if the slice does not hold
    /// exactly 6 elements.
    pub fn from_space_slice(data: &[f64], pose: Pose) -> Result<Self, RepresentationError> {
        Ok(Self::from_space_wrench(wrench_from_slice(data)?, pose))
    }

    /// The body-frame wrench
    pub fn body_wrench(&self) -> &Vector6<f64> {
        &self.body_wrench
    }

    /// The space-frame wrench
    pub fn space_wrench(&self) -> &Vector6<f64> {
        &self.space_wrench
    }

    /// The pose relating the two frames
    pub fn pose(&self) -> &Pose {
        &self.pose
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body wrench:\n{}\nSpace wrench:\n{}",
            self.body_wrench, self.space_wrench
        )
    }
}

fn wrench_from_slice(data: &[f64]) -> Result<Vector6<f64>, RepresentationError> {
    if data.len() != 6 {
        return Err(RepresentationError::InvalidDimension {
            expected: "6x1 vector (6)",
            got: data.len(),
        });
    }

    Ok(Vector6::from_row_slice(data))
}
