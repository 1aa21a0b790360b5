//! Fractal mesh generation for Morphosis
//!
//! This crate turns quaternion Julia set parameters into a triangle mesh:
//!
//! - [`FractalParams`] - Step size, quaternion constant, `w` slice and iteration cap
//! - [`Grid`] - Sampling lattice over `[-1.5, 1.5]^3` and the voxel corner template
//! - [`SamplingStrategy`] - Escape-time membership test
//! - [`FractalBuilder`] - Sequential or z-slice parallel build
//! - [`FractalMesh`] - Finished triangles, bounds and build statistics
//! - [`FractalSession`] - Current parameters plus the published mesh
//! - [`Preset`] - Built-in and RON-file parameter presets

mod error;
mod params;
mod grid;
mod sampler;
mod builder;
mod mesh;
mod session;
mod preset;

pub use error::{ParamError, BuildError, PresetError};
pub use params::{
    FractalParams, JuliaParams, validate_step_size,
    MIN_STEP_SIZE, MAX_STEP_SIZE, SMALL_STEP_SIZE, ESCAPE_THRESHOLD, BOUNDS_MIN, BOUNDS_MAX,
};
pub use grid::{Grid, VoxelTemplate, subdiv_axis};
pub use sampler::{SamplingStrategy, sample_julia, sample_julia_early_exit, INSIDE, OUTSIDE};
pub use builder::{BuildOptions, FractalBuilder};
pub use mesh::{BuildStats, FractalMesh, DISPLAY_HALF_EXTENT};
pub use session::FractalSession;
pub use preset::{Preset, BUILTIN_PRESETS};

// Re-export commonly used types for convenience
pub use morphosis_math::{Quaternion, Vec3};
pub use morphosis_mesh::{Bounds, Triangle, TriangleBuffer};
