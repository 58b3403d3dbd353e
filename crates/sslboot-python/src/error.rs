//! Error handling for Python bindings
//!
//! This module defines custom exception types and error handling
//! for the Python bindings, mapping FFI result codes to Python
//! exceptions.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use sslboot_ffi::SslbootResult;

// Define Python exception types directly
create_exception!(sslboot, SslbootError, PyException);
create_exception!(sslboot, LegacyProviderError, SslbootError);
create_exception!(sslboot, DefaultProviderError, SslbootError);

/// Convert FFI result codes to Python exceptions
pub fn map_ffi_result_to_py_err(result: SslbootResult, message: Option<String>) -> PyErr {
    let error_msg = message.unwrap_or_else(|| result.error_message().to_string());

    match result {
        SslbootResult::Success => unreachable!("Success should not be converted to error"),
        SslbootResult::LegacyProviderError => LegacyProviderError::new_err(error_msg),
        SslbootResult::DefaultProviderError => DefaultProviderError::new_err(error_msg),
        SslbootResult::InternalError => SslbootError::new_err(error_msg),
        SslbootResult::MemoryError => PyRuntimeError::new_err(error_msg),
        SslbootResult::NullPointer => PyValueError::new_err(error_msg),
        SslbootResult::Unknown => SslbootError::new_err(error_msg),
    }
}

/// Helper function to get last error from FFI layer
pub fn get_last_ffi_error() -> Option<String> {
    unsafe {
        let error_ptr = sslboot_ffi::sslboot_get_last_error();
        if error_ptr.is_null() {
            return None;
        }

        let c_str = std::ffi::CStr::from_ptr(error_ptr);
        c_str.to_str().ok().map(|s| s.to_string())
    }
}
