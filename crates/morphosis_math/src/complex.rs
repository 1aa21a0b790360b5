//! Complex number utilities
//!
//! A general-purpose 2D layer alongside the quaternion type. The Julia
//! sampler itself only uses [`Quaternion`](crate::Quaternion).

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::f32::consts::PI;

/// Complex number `x + y*i`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Complex {
    pub x: f32,
    pub y: f32,
}

impl Complex {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 0.0 };
    pub const I: Self = Self { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn real(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn imag(self) -> f32 {
        self.y
    }

    /// Modulus `|z|`
    #[inline]
    pub fn modulus(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product of the two numbers viewed as 2D vectors
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn mult(self, other: Self) -> Self {
        Self::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    /// Integer power by repeated squaring
    ///
    /// Negative exponents invert the positive power. `z.pow(0)` is one.
    pub fn pow(self, exp: i32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut n = exp.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mult(base);
            }
            base = base.mult(base);
            n >>= 1;
        }
        if exp < 0 {
            Self::ONE.div(result)
        } else {
            result
        }
    }

    /// Complex division `self / other`
    ///
    /// Division by zero yields non-finite components, as with `f32`.
    #[inline]
    pub fn div(self, other: Self) -> Self {
        let divisor = other.x * other.x + other.y * other.y;
        Self::new(
            (self.x * other.x + self.y * other.y) / divisor,
            (self.y * other.x - self.x * other.y) / divisor,
        )
    }

    /// Argument in `(-PI, PI]`; zero for the origin
    pub fn arg(self) -> f32 {
        if self.x > 0.0 {
            (self.y / self.x).atan()
        } else if self.x < 0.0 && self.y >= 0.0 {
            (self.y / self.x).atan() + PI
        } else if self.x < 0.0 {
            (self.y / self.x).atan() - PI
        } else if self.y > 0.0 {
            PI / 2.0
        } else if self.y < 0.0 {
            -PI / 2.0
        } else {
            0.0
        }
    }

    /// Principal square root
    pub fn sqrt(self) -> Self {
        let sm = self.modulus().sqrt();
        let half = self.arg() / 2.0;
        Self::new(sm * half.cos(), sm * half.sin())
    }

    /// Complex exponential `e^z`
    pub fn exp(self) -> Self {
        let e = self.x.exp();
        Self::new(e * self.y.cos(), e * self.y.sin())
    }

    /// Principal natural logarithm
    pub fn ln(self) -> Self {
        Self::new(self.modulus().ln(), self.arg())
    }
}
