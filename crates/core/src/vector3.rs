//! Three-component double precision vector.
//!
//! `Vector3` is a plain value type: every operation takes its operands by
//! value and produces a fresh vector, so an output can never alias an input.
//! No operation validates its inputs. Division by a zero component or a zero
//! scalar produces IEEE-754 infinities or NaN, which then propagate.
//!
//! # Usage
//! ```
//! use vector3_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::new(4.0, 5.0, 6.0);
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(a.dot(b), 32.0);
//! assert_eq!(Vector3::UNIT_X.cross(Vector3::UNIT_Y), Vector3::UNIT_Z);
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use tracing::trace;

/// 3D vector of `f64` components.
///
/// Components are reachable by name (`v.x`) or by index (`v[0]`).
/// NaN and infinite components are allowed everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component (index 0)
    pub x: f64,
    /// Y component (index 1)
    pub y: f64,
    /// Z component (index 2)
    pub z: f64,
}

impl Vector3 {
    /// All components zero
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// All components one
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    /// Unit vector along the X axis
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along the Y axis
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along the Z axis
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its three components. No validation.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Create a vector with every component set to `value`.
    #[inline]
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Vector3::new(value, value, value)
    }

    /// Overwrite this vector with the components of `src`.
    #[inline]
    pub fn set(&mut self, src: Vector3) {
        *self = src;
    }

    /// Components as `[x, y, z]`
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product `x*x' + y*y' + z*z'`, summed left to right.
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Vector3) -> f64 {
        (self.x * rhs.x) + (self.y * rhs.y) + (self.z * rhs.z)
    }

    /// Right-handed cross product `self × rhs`.
    ///
    /// Anticommutative: `a.cross(b) == -b.cross(a)`.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Vector3) -> Self {
        Vector3::new(
            (self.y * rhs.z) - (self.z * rhs.y),
            (self.z * rhs.x) - (self.x * rhs.z),
            (self.x * rhs.y) - (self.y * rhs.x),
        )
    }

    /// Squared Euclidean norm, `self.dot(self)`.
    #[inline]
    #[must_use]
    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Unit vector pointing the same way as `self`.
    ///
    /// A vector whose length is exactly `0.0` or exactly `1.0` is returned
    /// unchanged. Any other length, including one that is only close to 1,
    /// is divided through.
    ///
    /// ```
    /// use vector3_core::Vector3;
    ///
    /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).normalize(), Vector3::new(0.6, 0.8, 0.0));
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        let magnitude = self.length();
        if magnitude == 0.0 || magnitude == 1.0 {
            trace!(vector = %self, magnitude, "normalize: returning input unchanged");
            return self;
        }
        self / magnitude
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: the len is 3 but the index is {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: the len is 3 but the index is {index}"),
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

// ============================================================================
// COMPONENT-WISE VECTOR ARITHMETIC
// ============================================================================

impl Add<Vector3> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Hadamard (component-wise) product, not the dot or cross product.
impl Mul<Vector3> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<Vector3> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl MulAssign<Vector3> for Vector3 {
    fn mul_assign(&mut self, rhs: Vector3) {
        *self = *self * rhs;
    }
}

impl DivAssign<Vector3> for Vector3 {
    fn div_assign(&mut self, rhs: Vector3) {
        *self = *self / rhs;
    }
}

// ============================================================================
// SCALAR ARITHMETIC
// ============================================================================

impl Add<f64> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<f64> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign<f64> for Vector3 {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign<f64> for Vector3 {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
