//! Vector3 Core Library
//!
//! Fixed-size three-component `f64` vector arithmetic: construction,
//! component-wise arithmetic against another vector or a scalar, length,
//! normalization, dot product and cross product.
//!
//! Every operation is a pure value-in/value-out computation. Nothing is
//! validated: NaN and infinities are accepted as inputs and division by zero
//! yields the IEEE-754 result instead of an error.
//!
//! ## Layout
//! - [`vector3`]: the [`Vector3`] type, operator impls and methods
//! - [`ops`]: free functions (`add`, `cross_product`, ...) over the same type
//! - [`convert`]: conversions to and from arrays, tuples and `nalgebra`

pub mod convert;
pub mod ops;
pub mod vector3;

pub use vector3::Vector3;
