//! Numeric types for the Morphosis mesher
//!
//! ## Core Types
//!
//! - [`Quaternion`] - 4-component hypercomplex number used by the Julia iteration
//! - [`Complex`] - 2D complex number utilities
//! - [`Vec3`] - 3D position used for lattice points and mesh vertices

mod vec3;
mod quaternion;
pub mod complex;

pub use vec3::Vec3;
pub use quaternion::Quaternion;
pub use complex::Complex;
