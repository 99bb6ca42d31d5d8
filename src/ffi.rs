//! C-compatible Foreign Function Interface (FFI) for linkdist
//!
//! Lets C, C++, Python (via ctypes/numpy) and other callers hand over raw
//! `int` buffers and have them filled in place.
//!
//! # Memory Management
//!
//! - All matrices are caller-owned, contiguous, row-major `int[N*N]` buffers
//! - The library never retains a pointer after a call returns
//! - The version string is static and must not be freed
//!
//! # Error Handling
//!
//! `fill_distance_matrix` keeps the classic unchecked contract and returns
//! nothing. `linkdist_fill_checked` validates first and returns a
//! LinkdistResult code:
//! - 0: Success
//! - 1: Invalid parameter (null pointer, N <= 0)
//! - 2: Reverse matrix is not the transpose of the forward matrix
//! - 3: Unknown error

use std::os::raw::{c_char, c_int};
use std::slice;

use crate::core::error::Error;

/// Result codes for C FFI
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkdistResult {
    Success = 0,
    InvalidParameter = 1,
    NotTranspose = 2,
    UnknownError = 3,
}

/// Convert a Rust result to a C result code
fn convert_error(result: crate::Result<()>) -> LinkdistResult {
    match result {
        Ok(()) => LinkdistResult::Success,
        Err(Error::NotTranspose { .. }) => LinkdistResult::NotTranspose,
        Err(Error::EmptyMatrix)
        | Err(Error::DimensionMismatch { .. })
        | Err(Error::InvalidInput(_)) => LinkdistResult::InvalidParameter,
        Err(_) => LinkdistResult::UnknownError,
    }
}

/// Borrow the three buffers as slices, or `None` for null pointers or N <= 0
///
/// # Safety
/// Non-null pointers must each address `matrix_size * matrix_size` valid,
/// properly aligned `int`s, and `to_fill` must not overlap the inputs.
unsafe fn buffers<'a>(
    to_fill: *mut c_int,
    link_matrix: *const c_int,
    transposed_link_matrix: *const c_int,
    matrix_size: c_int,
) -> Option<(&'a mut [i32], &'a [i32], &'a [i32], usize)> {
    if to_fill.is_null() || link_matrix.is_null() || transposed_link_matrix.is_null() {
        return None;
    }
    let n = usize::try_from(matrix_size).ok().filter(|&n| n > 0)?;
    let len = n.checked_mul(n)?;
    Some((
        slice::from_raw_parts_mut(to_fill, len),
        slice::from_raw_parts(link_matrix, len),
        slice::from_raw_parts(transposed_link_matrix, len),
        n,
    ))
}

/// Fill an N×N distance matrix (unchecked contract)
///
/// # Parameters
/// - `to_fill`: output buffer, `matrix_size * matrix_size` ints
/// - `link_matrix`: forward adjacency, nonzero = edge
/// - `transposed_link_matrix`: transpose of `link_matrix`
/// - `matrix_size`: N
/// - `unreachable_distance`: value written for pairs with no path
///
/// Null pointers or `matrix_size <= 0` return without writing anything.
///
/// # Safety
/// See [`buffers`]. The transpose relationship is not checked.
#[no_mangle]
pub unsafe extern "C" fn fill_distance_matrix(
    to_fill: *mut c_int,
    link_matrix: *const c_int,
    transposed_link_matrix: *const c_int,
    matrix_size: c_int,
    unreachable_distance: c_int,
) {
    if let Some((output, forward, reverse, n)) =
        buffers(to_fill, link_matrix, transposed_link_matrix, matrix_size)
    {
        crate::fill_distance_matrix(output, forward, reverse, n, unreachable_distance);
    }
}

/// Fill an N×N distance matrix after validating the inputs
///
/// Same parameters as [`fill_distance_matrix`] plus `threads` (0 = use the
/// default pool).
///
/// # Returns
/// LinkdistResult code; `to_fill` is only written on Success
///
/// # Safety
/// See [`buffers`].
#[no_mangle]
pub unsafe extern "C" fn linkdist_fill_checked(
    to_fill: *mut c_int,
    link_matrix: *const c_int,
    transposed_link_matrix: *const c_int,
    matrix_size: c_int,
    unreachable_distance: c_int,
    threads: c_int,
) -> LinkdistResult {
    let Some((output, forward, reverse, n)) =
        buffers(to_fill, link_matrix, transposed_link_matrix, matrix_size)
    else {
        return LinkdistResult::InvalidParameter;
    };
    let Ok(threads) = usize::try_from(threads) else {
        return LinkdistResult::InvalidParameter;
    };

    let options = crate::FillOptions {
        threads: (threads > 0).then_some(threads),
        progress: None,
    };
    let result = crate::fill_distance_matrix_with_options(
        output,
        forward,
        reverse,
        n,
        unreachable_distance,
        &options,
    )
    .map(|_| ());

    convert_error(result)
}

/// Get library version string
///
/// # Returns
/// Static string with version information (does not need to be freed)
#[no_mangle]
pub extern "C" fn linkdist_version() -> *const c_char {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<std::ffi::CString> = OnceLock::new();

    VERSION_STRING
        .get_or_init(|| {
            std::ffi::CString::new(format!("linkdist {}", env!("LINKDIST_VERSION")))
                .unwrap_or_default()
        })
        .as_ptr()
}
