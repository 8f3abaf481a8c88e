//! C ABI over `vector3_core::ops`.
//!
//! A C `Vector` is a pointer to three contiguous doubles `{x, y, z}`. Every
//! function reads all of its inputs before writing `dst`, so any argument may
//! point at the same storage as any other, e.g. `vector_cross_product(a, a, b)`.
//!
//! Division by zero and NaN inputs are not errors; the IEEE-754 result is
//! written. The only failure is a null pointer, reported as
//! `VectorErrorCode::NullPointer` with `dst` left untouched.

use vector3_core::{ops, Vector3};

use crate::error::VectorErrorCode;
use crate::helpers::{
    handle_ffi_result_error, handle_ffi_scalar_error, non_null, read_vector, write_vector,
};

unsafe fn apply_binary(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
    op: fn(Vector3, Vector3) -> Vector3,
) -> VectorErrorCode {
    handle_ffi_result_error(|| {
        non_null(dst, "dst")?;
        non_null(lhs, "lhs")?;
        non_null(rhs, "rhs")?;

        // Both inputs are copied out before dst is touched
        unsafe {
            let (lhs, rhs) = (read_vector(lhs), read_vector(rhs));
            write_vector(dst, op(lhs, rhs));
        }
        Ok(())
    })
}

unsafe fn apply_scalar(
    dst: *mut f64,
    src: *const f64,
    scl: f64,
    op: fn(Vector3, f64) -> Vector3,
) -> VectorErrorCode {
    handle_ffi_result_error(|| {
        non_null(dst, "dst")?;
        non_null(src, "src")?;

        unsafe {
            let src = read_vector(src);
            write_vector(dst, op(src, scl));
        }
        Ok(())
    })
}

/// Set `dst` to `{x, y, z}`.
///
/// # Safety
/// `dst` must be null or valid for writing three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_init(dst: *mut f64, x: f64, y: f64, z: f64) -> VectorErrorCode {
    handle_ffi_result_error(|| {
        non_null(dst, "dst")?;
        unsafe {
            write_vector(dst, ops::init(x, y, z));
        }
        Ok(())
    })
}

/// Copy `src` into `dst`. `dst == src` is a no-op.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_copy(dst: *mut f64, src: *const f64) -> VectorErrorCode {
    handle_ffi_result_error(|| {
        non_null(dst, "dst")?;
        non_null(src, "src")?;
        unsafe {
            let src = read_vector(src);
            write_vector(dst, ops::copy(src));
        }
        Ok(())
    })
}

/// `dst = lhs + rhs`, component-wise.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_add(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
) -> VectorErrorCode {
    unsafe { apply_binary(dst, lhs, rhs, ops::add) }
}

/// `dst = lhs - rhs`, component-wise.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_subtract(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
) -> VectorErrorCode {
    unsafe { apply_binary(dst, lhs, rhs, ops::subtract) }
}

/// `dst = lhs * rhs`, component-wise (Hadamard product).
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_multiply(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
) -> VectorErrorCode {
    unsafe { apply_binary(dst, lhs, rhs, ops::multiply) }
}

/// `dst = lhs / rhs`, component-wise. Zero components of `rhs` produce
/// infinities or NaN.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_divide(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
) -> VectorErrorCode {
    unsafe { apply_binary(dst, lhs, rhs, ops::divide) }
}

/// `dst = src + scl` on every component.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_scalar_add(
    dst: *mut f64,
    src: *const f64,
    scl: f64,
) -> VectorErrorCode {
    unsafe { apply_scalar(dst, src, scl, ops::scalar_add) }
}

/// `dst = src - scl` on every component.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_scalar_subtract(
    dst: *mut f64,
    src: *const f64,
    scl: f64,
) -> VectorErrorCode {
    unsafe { apply_scalar(dst, src, scl, ops::scalar_subtract) }
}

/// `dst = src * scl` on every component.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_scalar_multiply(
    dst: *mut f64,
    src: *const f64,
    scl: f64,
) -> VectorErrorCode {
    unsafe { apply_scalar(dst, src, scl, ops::scalar_multiply) }
}

/// `dst = src / scl` on every component. A zero `scl` produces infinities
/// or NaN.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_scalar_divide(
    dst: *mut f64,
    src: *const f64,
    scl: f64,
) -> VectorErrorCode {
    unsafe { apply_scalar(dst, src, scl, ops::scalar_divide) }
}

/// Euclidean length of `src`, or NaN if `src` is null.
///
/// # Safety
/// `src` must be null or valid for reading three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_length(src: *const f64) -> f64 {
    handle_ffi_scalar_error(|| {
        non_null(src, "src")?;
        Ok(ops::length(unsafe { read_vector(src) }))
    })
}

/// Squared Euclidean length of `src`, or NaN if `src` is null.
///
/// # Safety
/// `src` must be null or valid for reading three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_squared_length(src: *const f64) -> f64 {
    handle_ffi_scalar_error(|| {
        non_null(src, "src")?;
        Ok(ops::squared_length(unsafe { read_vector(src) }))
    })
}

/// Write the unit vector of `src` into `dst`. A `src` of length exactly 0
/// or exactly 1 is copied verbatim.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_normalize(dst: *mut f64, src: *const f64) -> VectorErrorCode {
    handle_ffi_result_error(|| {
        non_null(dst, "dst")?;
        non_null(src, "src")?;
        unsafe {
            let src = read_vector(src);
            write_vector(dst, ops::normalize(src));
        }
        Ok(())
    })
}

/// Dot product of `lhs` and `rhs`, or NaN if either is null.
///
/// # Safety
/// Each pointer must be null or valid for reading three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_dot_product(lhs: *const f64, rhs: *const f64) -> f64 {
    handle_ffi_scalar_error(|| {
        non_null(lhs, "lhs")?;
        non_null(rhs, "rhs")?;
        let (lhs, rhs) = unsafe { (read_vector(lhs), read_vector(rhs)) };
        Ok(ops::dot_product(lhs, rhs))
    })
}

/// `dst = lhs × rhs`. `dst` may be `lhs` or `rhs`; the result is computed
/// from the values they held before the call.
///
/// # Safety
/// Each pointer must be null or valid for three consecutive doubles.
#[no_mangle]
pub unsafe extern "C" fn vector_cross_product(
    dst: *mut f64,
    lhs: *const f64,
    rhs: *const f64,
) -> VectorErrorCode {
    unsafe { apply_binary(dst, lhs, rhs, ops::cross_product) }
}
