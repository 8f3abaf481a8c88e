use crate::error::{with_last_error_mut, DefaultVectorError, VectorError, VectorErrorCode};
use std::ffi::CString;
use std::ptr;
use tracing::debug;
use vector3_core::Vector3;

/// Set the thread-local error message and code.
/// Accepts any type implementing `VectorError` trait.
pub(crate) fn set_last_error(error: &impl VectorError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl VectorError) -> VectorErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on every successful operation.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = VectorErrorCode::Ok;
    });
}

/// Run an FFI body and convert its result into a status code, recording
/// the error on failure and clearing it on success.
pub(crate) fn handle_ffi_result_error<F>(f: F) -> VectorErrorCode
where
    F: FnOnce() -> Result<(), DefaultVectorError>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            VectorErrorCode::Ok
        }
        Err(e) => track_error(&e),
    }
}

/// Like `handle_ffi_result_error` for scalar-returning functions.
/// Failure yields NaN; the caller inspects `vector_get_last_error_code`.
pub(crate) fn handle_ffi_scalar_error<F>(f: F) -> f64
where
    F: FnOnce() -> Result<f64, DefaultVectorError>,
{
    match f() {
        Ok(value) => {
            clear_last_error();
            value
        }
        Err(e) => {
            set_last_error(&e);
            f64::NAN
        }
    }
}

/// Reject a null pointer argument.
pub(crate) fn non_null(ptr: *const f64, param_name: &str) -> Result<(), DefaultVectorError> {
    if ptr.is_null() {
        debug!(param_name, "rejecting null vector pointer");
        return Err(DefaultVectorError::null_pointer(param_name));
    }
    Ok(())
}

/// Read the three doubles at `src` into a fresh value.
///
/// # Safety
/// `src` must be non-null, aligned for `f64` and valid for reading three
/// consecutive `f64`s.
#[inline]
pub(crate) unsafe fn read_vector(src: *const f64) -> Vector3 {
    unsafe { Vector3::from(ptr::read(src.cast::<[f64; 3]>())) }
}

/// Write `value` as three consecutive doubles at `dst`.
///
/// # Safety
/// `dst` must be non-null, aligned for `f64` and valid for writing three
/// consecutive `f64`s.
#[inline]
pub(crate) unsafe fn write_vector(dst: *mut f64, value: Vector3) {
    unsafe {
        ptr::write(dst.cast::<[f64; 3]>(), value.to_array());
    }
}
