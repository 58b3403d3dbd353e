//! Bootstrap functions for Python bindings
//!
//! Thin wrappers over the FFI layer: load the providers, query the
//! bootstrap status, report the provider-architecture flag.

use std::os::raw::c_char;
use std::ptr;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::{get_last_ffi_error, map_ffi_result_to_py_err};
use crate::types::json_to_py;

/// Load the OpenSSL "legacy" and "default" providers
///
/// Call once at interpreter startup, before the first use of a legacy
/// cryptographic algorithm. Calling again is harmless. Against an
/// OpenSSL older than 3.0 this is a no-op.
///
/// Raises:
///     LegacyProviderError: If the legacy provider could not be loaded
///     DefaultProviderError: If the default provider could not be loaded
///     SslbootError: On internal failures
#[pyfunction]
pub fn load() -> PyResult<()> {
    let result = unsafe { sslboot_ffi::sslboot_load() };

    if result.is_success() {
        Ok(())
    } else {
        Err(map_ffi_result_to_py_err(result, get_last_ffi_error()))
    }
}

/// Whether the linked OpenSSL has the provider architecture
///
/// Returns:
///     bool: True when linked against OpenSSL 3.0+
#[pyfunction]
pub fn provider_api_available() -> bool {
    sslboot_ffi::sslboot_provider_api_available() == 1
}

/// Get the bootstrap status
///
/// Returns:
///     dict: `provider_api` (bool), `loaded` (list of provider names),
///     and `library_version` (str)
#[pyfunction]
pub fn status(py: Python<'_>) -> PyResult<PyObject> {
    let mut out: *mut c_char = ptr::null_mut();
    let result = unsafe { sslboot_ffi::sslboot_status_json(&mut out) };

    if !result.is_success() {
        return Err(map_ffi_result_to_py_err(result, get_last_ffi_error()));
    }

    let json = unsafe {
        let json = std::ffi::CStr::from_ptr(out).to_string_lossy().into_owned();
        sslboot_ffi::sslboot_string_free(out);
        json
    };

    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|e| PyValueError::new_err(format!("Invalid status JSON: {}", e)))?;
    json_to_py(py, &value)
}
