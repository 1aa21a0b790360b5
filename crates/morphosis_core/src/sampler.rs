//! Escape-time membership test for the quaternion Julia set
//!
//! Each point `(x, y, z)` is lifted to `z0 = (x, y, z, w)` and iterated as
//! `z = z*z + c`. The result is binary: 1.0 if the iterate stays within the
//! escape threshold for every iteration, 0.0 otherwise.

use morphosis_math::{Quaternion, Vec3};
use serde::{Serialize, Deserialize};

use crate::params::{JuliaParams, ESCAPE_THRESHOLD};

/// Tighter bound used by [`SamplingStrategy::EarlyExit`]
pub const EARLY_EXIT_THRESHOLD: f32 = 1.5;
/// Iterations that must pass before the early-exit bound applies
pub const EARLY_EXIT_MIN_ITER: u32 = 2;

pub const INSIDE: f32 = 1.0;
pub const OUTSIDE: f32 = 0.0;

/// How a point is classified
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingStrategy {
    /// Escape only past the 2.0 threshold
    #[default]
    Standard,
    /// Also escape past 1.5 once more than two iterations have run;
    /// faster, slightly thinner mesh near the boundary
    EarlyExit,
}

impl SamplingStrategy {
    /// Membership value of `pos` (0.0 outside, 1.0 inside)
    #[inline]
    pub fn sample(self, julia: &JuliaParams, pos: Vec3) -> f32 {
        match self {
            SamplingStrategy::Standard => sample_julia(julia, pos),
            SamplingStrategy::EarlyExit => sample_julia_early_exit(julia, pos),
        }
    }

    /// Strategy name as used in config files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            SamplingStrategy::Standard => "standard",
            SamplingStrategy::EarlyExit => "early-exit",
        }
    }
}

/// Parses the names returned by [`SamplingStrategy::name`]
impl std::str::FromStr for SamplingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(SamplingStrategy::Standard),
            "early-exit" => Ok(SamplingStrategy::EarlyExit),
            other => Err(format!("unknown sampling strategy '{}'", other)),
        }
    }
}

/// Escape-time test with the 2.0 threshold
pub fn sample_julia(julia: &JuliaParams, pos: Vec3) -> f32 {
    let mut z = Quaternion::from_position(pos, julia.w);
    for _ in 0..julia.max_iter {
        z = z.square() + julia.c;
        if z.modulus() > ESCAPE_THRESHOLD {
            return OUTSIDE;
        }
    }
    INSIDE
}

/// Escape-time test that also bails out past 1.5 after the first iterations
pub fn sample_julia_early_exit(julia: &JuliaParams, pos: Vec3) -> f32 {
    let mut z = Quaternion::from_position(pos, julia.w);
    for iter in 0..julia.max_iter {
        z = z.square() + julia.c;
        let m = z.modulus();
        if m > ESCAPE_THRESHOLD {
            return OUTSIDE;
        }
        if m > EARLY_EXIT_THRESHOLD && iter > EARLY_EXIT_MIN_ITER {
            return OUTSIDE;
        }
    }
    INSIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn julia(c: Quaternion, max_iter: u32) -> JuliaParams {
        JuliaParams { c, w: 0.0, max_iter }
    }

    #[test]
    fn test_origin_with_zero_constant_is_inside() {
        let j = julia(Quaternion::ZERO, 50);
        assert_eq!(sample_julia(&j, Vec3::ZERO), INSIDE);
        assert_eq!(sample_julia_early_exit(&j, Vec3::ZERO), INSIDE);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let j = julia(Quaternion::ZERO, 1);
        // |(1.5,1.5,1.5)|^2 = 6.75 > 2
        assert_eq!(sample_julia(&j, Vec3::splat(1.5)), OUTSIDE);
    }

    #[test]
    fn test_unit_sphere_boundary_for_zero_constant() {
        // With c = 0 the iterate's modulus is |p|^(2^n): points inside the
        // unit ball never escape, points outside eventually do.
        let j = julia(Quaternion::ZERO, 20);
        assert_eq!(sample_julia(&j, Vec3::new(0.9, 0.0, 0.0)), INSIDE);
        assert_eq!(sample_julia(&j, Vec3::new(1.1, 0.0, 0.0)), OUTSIDE);
    }

    #[test]
    fn test_w_offset_is_used() {
        let j = JuliaParams { c: Quaternion::ZERO, w: 1.2, max_iter: 10 };
        assert_eq!(sample_julia(&j, Vec3::ZERO), OUTSIDE);
    }

    #[test]
    fn test_monotone_in_iteration_cap() {
        let c = Quaternion::new(-0.2, 0.8, 0.0, 0.0);
        let points = [
            Vec3::new(0.3, -0.2, 0.1),
            Vec3::new(0.75, 0.25, -0.5),
            Vec3::new(-1.0, 0.5, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.25, -1.25, 0.25),
        ];
        for strategy in [SamplingStrategy::Standard, SamplingStrategy::EarlyExit] {
            for p in points {
                for n in 1..12 {
                    if strategy.sample(&julia(c, n), p) == OUTSIDE {
                        for m in n..16 {
                            assert_eq!(
                                strategy.sample(&julia(c, m), p),
                                OUTSIDE,
                                "{:?} {:?} escaped at cap {} but not at {}",
                                strategy, p, n, m
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_early_exit_never_adds_points() {
        let c = Quaternion::new(-0.4, 0.6, 0.0, 0.0);
        let j = julia(c, 8);
        for i in -6..=6 {
            for k in -6..=6 {
                let p = Vec3::new(i as f32 * 0.25, k as f32 * 0.25, 0.0);
                if sample_julia(&j, p) == OUTSIDE {
                    assert_eq!(sample_julia_early_exit(&j, p), OUTSIDE);
                }
            }
        }
    }

    #[test]
    fn test_early_exit_drops_slow_escapers() {
        // moduli 1.02, 0.87, 0.98, 1.78: never past 2.0, past 1.5 at index 3
        let j = julia(Quaternion::new(-0.2, 0.8, 0.0, 0.0), 4);
        let p = Vec3::new(0.125, 0.5, 0.0);
        assert_eq!(sample_julia(&j, p), INSIDE);
        assert_eq!(sample_julia_early_exit(&j, p), OUTSIDE);
        assert_ne!(
            SamplingStrategy::Standard.sample(&j, p),
            SamplingStrategy::EarlyExit.sample(&j, p)
        );
    }

    #[test]
    fn test_early_exit_bound_starts_after_index_two() {
        // moduli 0.72, 0.96, 1.64: past 1.5 only at index 2, which is exempt
        let p = Vec3::new(-0.5, 0.875, 0.0);
        let j = julia(Quaternion::new(-0.2, 0.8, 0.0, 0.0), 3);
        assert_eq!(sample_julia_early_exit(&j, p), INSIDE);
        assert_eq!(sample_julia(&j, p), INSIDE);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("standard".parse::<SamplingStrategy>(), Ok(SamplingStrategy::Standard));
        assert_eq!("early-exit".parse::<SamplingStrategy>(), Ok(SamplingStrategy::EarlyExit));
        assert!("fast".parse::<SamplingStrategy>().is_err());
        assert!("optimized".parse::<SamplingStrategy>().is_err());
        for strategy in [SamplingStrategy::Standard, SamplingStrategy::EarlyExit] {
            assert_eq!(strategy.name().parse::<SamplingStrategy>(), Ok(strategy));
        }
    }
}
