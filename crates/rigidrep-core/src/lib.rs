//! # rigidrep-core
//!
//! Rigid-body representations following screw-theory (Lie-group SE(3))
//! conventions as used in robot kinematics.
//!
//! The library provides five cooperating value types, built bottom-up:
//!
//! - [`Rotation`]: validated SO(3) rotation matrix with its cached
//!   exponential coordinates (axis-angle)
//! - [`Position`]: 3D position vector
//! - [`Pose`]: rigid-body pose with cached homogeneous transform, closed-form
//!   inverse, and adjoint map
//! - [`ScrewMotion`]: exponential coordinates of a rigid motion (screw axis
//!   and magnitude) with the derived pose
//! - [`Motion`] / [`Load`]: twist and wrench 6-vectors with dual body/space
//!   frame representations via the pose's adjoint map
//!
//! All types are immutable once constructed; derived quantities are computed
//! eagerly at construction so accessors are O(1) and side-effect-free.
//!
//! ## Modules
//!
//! - [`math`]: skew-matrix utilities shared by the representations
//! - [`representations`]: the value types listed above
//! - [`error`]: construction-time validation errors

pub mod error;
pub mod math;
pub mod representations;

pub use error::RepresentationError;
pub use representations::{Load, Motion, Pose, Position, Rotation, ScrewMotion};

// Common type aliases
use nalgebra::{Matrix3, Matrix4, Matrix6, Vector3, Vector6};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 6D vector type (angular part first, linear part second)
pub type Vec6 = Vector6<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// 4x4 matrix type (homogeneous transforms)
pub type Mat4 = Matrix4<f64>;

/// 6x6 matrix type (adjoint maps)
pub type Mat6 = Matrix6<f64>;

/// Absolute tolerance for angle-near-zero and bottom-row checks
pub const ANGLE_TOLERANCE: f64 = 1e-12;

/// Absolute tolerance for orthonormality, identity, and trace checks
pub const MATRIX_TOLERANCE: f64 = 1e-8;
