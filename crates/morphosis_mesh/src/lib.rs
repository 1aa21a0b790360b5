//! Marching-cubes meshing for Morphosis
//!
//! This crate turns sampled cubes into triangles and stores them:
//!
//! - [`lookup_tables`] - Static edge and triangle tables for the 256 cube cases
//! - [`CubeSample`] / [`polygonise`] - Per-cube polygonization
//! - [`TriangleBuffer`] - Growable, contiguous triangle storage
//! - [`AllocError`] - Reported when triangle storage cannot grow

pub mod lookup_tables;
mod error;
mod polygonize;
mod triangle;

pub use error::AllocError;
pub use lookup_tables::{EdgeMask, EDGES, EDGE_TABLE, TRI_TABLE, MAX_CUBE_TRIANGLES};
pub use polygonize::{interpolate, polygonise, polygonise_into, CubeSample};
pub use triangle::{Bounds, Triangle, TriangleBatch, TriangleBuffer};

// Re-export the vector type used for all positions
pub use morphosis_math::Vec3;
