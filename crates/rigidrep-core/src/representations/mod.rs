//! Rigid-body representation value types
//!
//! Built bottom-up: [`Rotation`] and [`Position`] are leaves; [`Pose`]
//! composes both; [`Motion`], [`ScrewMotion`], and [`Load`] depend on
//! [`Pose`]. All types are immutable after construction with their derived
//! quantities cached.

pub mod position;
pub mod pose;
pub mod rotation;
pub mod screw;
pub mod twist;
pub mod wrench;

pub use position::Position;
pub use pose::Pose;
pub use rotation::Rotation;
pub use screw::ScrewMotion;
pub use twist::Motion;
pub use wrench::Load;
