//! Free-function form of every vector operation.
//!
//! Each function is a thin wrapper over the operator impls and methods on
//! [`Vector3`], for callers that prefer `ops::cross_product(a, b)` over
//! `a.cross(b)`. Results are always fresh values.

use crate::vector3::Vector3;

/// Create a vector from three components.
#[inline]
pub const fn init(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Component-wise duplicate of `src`.
#[inline]
pub const fn copy(src: Vector3) -> Vector3 {
    src
}

/// Component-wise sum.
#[inline]
pub fn add(lhs: Vector3, rhs: Vector3) -> Vector3 {
    lhs + rhs
}

/// Component-wise difference `lhs - rhs`.
#[inline]
pub fn subtract(lhs: Vector3, rhs: Vector3) -> Vector3 {
    lhs - rhs
}

/// Component-wise (Hadamard) product.
#[inline]
pub fn multiply(lhs: Vector3, rhs: Vector3) -> Vector3 {
    lhs * rhs
}

/// Component-wise quotient `lhs / rhs`. Zero components of `rhs` yield
/// infinities or NaN.
#[inline]
pub fn divide(lhs: Vector3, rhs: Vector3) -> Vector3 {
    lhs / rhs
}

/// Add `scl` to every component.
#[inline]
pub fn scalar_add(src: Vector3, scl: f64) -> Vector3 {
    src + scl
}

/// Subtract `scl` from every component.
#[inline]
pub fn scalar_subtract(src: Vector3, scl: f64) -> Vector3 {
    src - scl
}

/// Multiply every component by `scl`.
#[inline]
pub fn scalar_multiply(src: Vector3, scl: f64) -> Vector3 {
    src * scl
}

/// Divide every component by `scl`.
#[inline]
pub fn scalar_divide(src: Vector3, scl: f64) -> Vector3 {
    src / scl
}

/// Euclidean norm.
#[inline]
pub fn length(src: Vector3) -> f64 {
    src.length()
}

/// Squared Euclidean norm.
#[inline]
pub fn squared_length(src: Vector3) -> f64 {
    src.squared_length()
}

/// See [`Vector3::normalize`] for the exact-zero and exact-one rule.
#[inline]
pub fn normalize(src: Vector3) -> Vector3 {
    src.normalize()
}

/// Dot product.
#[inline]
pub fn dot_product(lhs: Vector3, rhs: Vector3) -> f64 {
    lhs.dot(rhs)
}

/// Cross product `lhs × rhs`.
#[inline]
pub fn cross_product(lhs: Vector3, rhs: Vector3) -> Vector3 {
    lhs.cross(rhs)
}
