use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait VectorError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> VectorErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `VectorError` for the FFI failure cases.
///
/// Numeric results (infinity, NaN) are never errors; only invalid pointers
/// handed in from C end up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVectorError {
    code: VectorErrorCode,
    msg: String,
}

impl DefaultVectorError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"dst"`, `"lhs"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: VectorErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl VectorError for DefaultVectorError {
    fn code(&self) -> VectorErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,
}

impl From<DefaultVectorError> for VectorErrorCode {
    fn from(error: DefaultVectorError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is owned here so the pointer handed out by
    /// `vector_get_last_error` stays valid until the next call on this thread.
    static LAST_ERROR: RefCell<(Option<CString>, VectorErrorCode)> = const { RefCell::new((None, VectorErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, VectorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, VectorErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made yet.
///
/// # Lifetime
/// The returned pointer is valid until the next vector call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// if (vector_add(dst, lhs, rhs) != VectorErrorCode_Ok) {
///     const char* error = vector_get_last_error();
///     if (error) {
///         fprintf(stderr, "vector_add failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
///
/// Scalar-returning functions (`vector_length`, `vector_dot_product`, ...)
/// return NaN on failure, so this is the only way to tell a rejected pointer
/// from a NaN input.
#[no_mangle]
pub extern "C" fn vector_get_last_error_code() -> VectorErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_message_names_parameter() {
        let err = DefaultVectorError::null_pointer("rhs");
        assert_eq!(err.code(), VectorErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'rhs' cannot be null");
        assert_eq!(VectorErrorCode::from(err), VectorErrorCode::NullPointer);
    }

    #[test]
    fn test_fresh_thread_has_no_error() {
        std::thread::spawn(|| {
            assert!(vector_get_last_error().is_null());
            assert_eq!(vector_get_last_error_code(), VectorErrorCode::Ok);
        })
        .join()
        .unwrap();
    }
}
