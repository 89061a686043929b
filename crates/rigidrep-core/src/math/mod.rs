//! Mathematical utilities shared by the representation types

pub mod skew;

pub use skew::*;
