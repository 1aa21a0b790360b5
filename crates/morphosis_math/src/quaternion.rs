//! Quaternion arithmetic for the 4D Julia iteration
//!
//! Components are stored as (x, y, z, w) with `x` the real part and
//! `y`, `z`, `w` the i, j, k parts.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec3;

/// Quaternion with x, y, z, w components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const I: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const J: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const K: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new quaternion
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Lift a 3D position into quaternion space with the given `w` slice
    #[inline]
    pub fn from_position(pos: Vec3, w: f32) -> Self {
        Self::new(pos.x, pos.y, pos.z, w)
    }

    /// Create a quaternion from an `[x, y, z, w]` array
    #[inline]
    pub fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Components as an `[x, y, z, w]` array
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component-wise sum
    #[inline]
    pub fn sum(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    /// Quaternion product `self * other`
    ///
    /// Not commutative: `I.mult(J) == K` but `J.mult(I) == -K`.
    #[inline]
    pub fn mult(self, other: Self) -> Self {
        let (q1, q2) = (self, other);
        Self::new(
            q1.x * q2.x - q1.y * q2.y - q1.z * q2.z - q1.w * q2.w,
            q1.x * q2.y + q1.y * q2.x + q1.z * q2.w - q1.w * q2.z,
            q1.x * q2.z + q1.z * q2.x + q1.w * q2.y - q1.y * q2.w,
            q1.x * q2.w + q1.w * q2.x + q1.y * q2.z - q1.z * q2.y,
        )
    }

    /// Square of the quaternion, `self * self`
    #[inline]
    pub fn square(self) -> Self {
        self.mult(self)
    }

    /// Conjugate: negates the imaginary parts
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.x, -self.y, -self.z, -self.w)
    }

    /// Squared Euclidean norm of the 4-tuple
    #[inline]
    pub fn modulus_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Euclidean norm of the 4-tuple
    #[inline]
    pub fn modulus(self) -> f32 {
        self.modulus_squared().sqrt()
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.sum(other)
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.mult(other)
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}
