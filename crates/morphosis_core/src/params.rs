//! Fractal parameters
//!
//! The sampling volume is fixed at `[-1.5, 1.5]^3`; callers choose the step
//! size, the quaternion constant, the `w` slice and the iteration cap.

use morphosis_math::{Quaternion, Vec3};
use serde::{Serialize, Deserialize};

use crate::error::ParamError;

/// Smallest accepted step size (exclusive)
pub const MIN_STEP_SIZE: f32 = 0.00001;
/// Largest accepted step size (inclusive)
pub const MAX_STEP_SIZE: f32 = 0.5;
/// Step sizes below this produce very large meshes
pub const SMALL_STEP_SIZE: f32 = 0.02;
/// Modulus above which an iterate counts as escaped
pub const ESCAPE_THRESHOLD: f32 = 2.0;

/// Lower corner of the sampling volume
pub const BOUNDS_MIN: Vec3 = Vec3::splat(-1.5);
/// Upper corner of the sampling volume
pub const BOUNDS_MAX: Vec3 = Vec3::splat(1.5);

/// Julia iteration parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JuliaParams {
    /// Constant added after every squaring
    pub c: Quaternion,
    /// Fourth coordinate of every sampled point
    #[serde(default)]
    pub w: f32,
    /// Maximum number of iterations per point
    pub max_iter: u32,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c: Quaternion::new(-0.2, 0.8, 0.0, 0.0),
            w: 0.0,
            max_iter: 6,
        }
    }
}

/// Complete input to a fractal build
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Distance between lattice samples
    pub step_size: f32,
    /// Julia iteration parameters
    pub julia: JuliaParams,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            step_size: 0.05,
            julia: JuliaParams::default(),
        }
    }
}

impl FractalParams {
    /// Create validated parameters
    pub fn new(step_size: f32, c: Quaternion, max_iter: u32) -> Result<Self, ParamError> {
        let params = Self {
            step_size,
            julia: JuliaParams { c, w: 0.0, max_iter },
        };
        params.validate()?;
        Ok(params)
    }

    /// Set the `w` slice
    pub fn with_w(mut self, w: f32) -> Self {
        self.julia.w = w;
        self
    }

    /// Check every field against its accepted domain
    pub fn validate(&self) -> Result<(), ParamError> {
        validate_step_size(self.step_size)?;
        if self.julia.max_iter == 0 {
            return Err(ParamError::ZeroIterations);
        }
        if !self.julia.c.to_array().iter().all(|v| v.is_finite()) {
            return Err(ParamError::NonFinite("c"));
        }
        if !self.julia.w.is_finite() {
            return Err(ParamError::NonFinite("w"));
        }
        Ok(())
    }

    /// Whether the step size is small enough to warrant a warning
    pub fn is_small_step(&self) -> bool {
        self.step_size < SMALL_STEP_SIZE
    }

    /// Side length of the sampling volume
    #[inline]
    pub fn grid_length(&self) -> f32 {
        BOUNDS_MAX.x - BOUNDS_MIN.x
    }

    /// Number of lattice cells per axis as a real number
    #[inline]
    pub fn grid_size(&self) -> f32 {
        self.grid_length() / self.step_size
    }
}

/// Check that `step_size` lies in `(MIN_STEP_SIZE, MAX_STEP_SIZE]`
pub fn validate_step_size(step_size: f32) -> Result<f32, ParamError> {
    if step_size > MIN_STEP_SIZE && step_size <= MAX_STEP_SIZE {
        Ok(step_size)
    } else {
        Err(ParamError::StepSize(step_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = FractalParams::default();
        assert_eq!(params.step_size, 0.05);
        assert_eq!(params.julia.max_iter, 6);
        assert_eq!(params.julia.c, Quaternion::new(-0.2, 0.8, 0.0, 0.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_step_size_domain() {
        assert!(validate_step_size(0.5).is_ok());
        assert!(validate_step_size(0.02).is_ok());
        assert_eq!(validate_step_size(0.50001), Err(ParamError::StepSize(0.50001)));
        assert!(validate_step_size(MIN_STEP_SIZE).is_err());
        assert!(validate_step_size(0.0).is_err());
        assert!(validate_step_size(-0.1).is_err());
        assert!(validate_step_size(f32::NAN).is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = FractalParams::new(0.1, Quaternion::ZERO, 0).unwrap_err();
        assert_eq!(err, ParamError::ZeroIterations);
    }

    #[test]
    fn test_non_finite_constant_rejected() {
        let c = Quaternion::new(f32::INFINITY, 0.0, 0.0, 0.0);
        assert_eq!(FractalParams::new(0.1, c, 3).unwrap_err(), ParamError::NonFinite("c"));

        let params = FractalParams::default().with_w(f32::NAN);
        assert_eq!(params.validate(), Err(ParamError::NonFinite("w")));
    }

    #[test]
    fn test_grid_size() {
        let params = FractalParams::new(0.5, Quaternion::ZERO, 1).unwrap();
        assert_eq!(params.grid_length(), 3.0);
        assert_eq!(params.grid_size(), 6.0);
    }

    #[test]
    fn test_small_step_warning() {
        assert!(FractalParams::new(0.01, Quaternion::ZERO, 1).unwrap().is_small_step());
        assert!(!FractalParams::new(0.05, Quaternion::ZERO, 1).unwrap().is_small_step());
    }
}
