//! C ABI for `vector3-core`.
//!
//! Exposes the `vector_*` out-parameter functions over `double[3]` storage
//! and the thread-local last-error accessors. The C header `Vector3FFI.h`
//! is generated by `build.rs` through cbindgen.
//!
//! ```c
//! double a[3], b[3], n[3];
//! vector_init(a, 1.0, 0.0, 0.0);
//! vector_init(b, 0.0, 1.0, 0.0);
//! vector_cross_product(a, a, b);   /* a is now {0, 0, 1} */
//! vector_normalize(n, a);
//! ```

mod error;
mod helpers;
mod vector;

pub use error::{vector_get_last_error, vector_get_last_error_code, VectorErrorCode};
pub use vector::{
    vector_add, vector_copy, vector_cross_product, vector_divide, vector_dot_product,
    vector_init, vector_length, vector_multiply, vector_normalize, vector_scalar_add,
    vector_scalar_divide, vector_scalar_multiply, vector_scalar_subtract, vector_squared_length,
    vector_subtract,
};
