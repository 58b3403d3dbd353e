//! FFI API function definitions
//!
//! This module contains the extern "C" functions that form
//! the public API of the Sslboot FFI layer.

use std::os::raw::{c_char, c_int};

use crate::error::{map_core_error, validate_mut_ptr};
use crate::ffi_boundary;
use crate::memory::{allocate_string, clear_last_error, set_last_error};
use crate::types::SslbootResult;

/// Load the OpenSSL "legacy" and "default" providers
///
/// Call once from the host runtime's module-initialization path, before
/// the first use of a legacy cryptographic algorithm. Calling again is
/// harmless. Against an OpenSSL older than 3.0 this is a no-op that
/// reports success.
///
/// # Returns
/// `Success`, or `LegacyProviderError`/`DefaultProviderError` naming the
/// provider that failed; the message is available via
/// `sslboot_get_last_error`.
///
/// # Safety
/// Safe to call from any thread, but intended for single-threaded startup.
#[no_mangle]
pub unsafe extern "C" fn sslboot_load() -> SslbootResult {
    ffi_boundary!({
        clear_last_error();

        sslboot_core::load().map_err(map_core_error)?;

        Ok(SslbootResult::Success)
    })
}

/// Whether this build carries the provider-load operation
///
/// Returns 1 when linked against OpenSSL 3.0+, 0 otherwise (the load call
/// is then a no-op).
#[no_mangle]
pub extern "C" fn sslboot_provider_api_available() -> c_int {
    if sslboot_core::provider_api_available() {
        1
    } else {
        0
    }
}

/// Get the bootstrap status as a JSON string
///
/// The report contains `provider_api`, the `loaded` provider names, and
/// the `library_version` string of the linked OpenSSL.
///
/// # Safety
/// - `out_json` must be a valid pointer
/// - The output string must be freed with `sslboot_string_free`
#[no_mangle]
pub unsafe extern "C" fn sslboot_status_json(out_json: *mut *mut c_char) -> SslbootResult {
    ffi_boundary!({
        clear_last_error();

        validate_mut_ptr(out_json, "out_json")?;

        let status = sslboot_core::status();
        let status_json = serde_json::to_string(&status).map_err(|e| {
            set_last_error(format!("Failed to serialize status: {}", e));
            SslbootResult::InternalError
        })?;

        *out_json = allocate_string(&status_json);
        if (*out_json).is_null() {
            return Err(SslbootResult::MemoryError);
        }

        Ok(SslbootResult::Success)
    })
}

/// Get version information
///
/// # Returns
/// A static string containing version information
///
/// # Safety
/// The returned string should NOT be freed
#[no_mangle]
pub unsafe extern "C" fn sslboot_version() -> *const c_char {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), "\0").as_ptr()
        as *const c_char
}
