//! Memory management utilities for FFI
//!
//! This module provides safe string allocation and deallocation
//! functions for use across the FFI boundary, plus the thread-local
//! last-error channel.

use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use std::sync::Mutex;

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: Mutex<Option<CString>> = Mutex::new(None);
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    let error_string = CString::new(err.into())
        .unwrap_or_else(|_| CString::new("Error message contained null byte").unwrap());

    LAST_ERROR.with(|e| {
        *e.lock().unwrap() = Some(error_string);
    });
}

/// Clear the last error message
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.lock().unwrap() = None;
    });
}

/// Allocate a new string for FFI return
///
/// # Safety
/// The caller must free this string using `sslboot_string_free`
pub unsafe fn allocate_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            set_last_error("String contains null byte");
            ptr::null_mut()
        }
    }
}

/// Free a string allocated by Sslboot
///
/// # Safety
/// The pointer must have been allocated by a `sslboot_*` function that
/// documents this free routine
#[no_mangle]
pub unsafe extern "C" fn sslboot_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }

    // Reconstruct the CString and let it drop
    let _ = CString::from_raw(s);
}

/// Get the last error message
///
/// # Safety
/// Returns a pointer that should NOT be freed by the caller
#[no_mangle]
pub unsafe extern "C" fn sslboot_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.lock().unwrap() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message
#[no_mangle]
pub extern "C" fn sslboot_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_error_handling() {
        set_last_error("Test error");
        unsafe {
            let error = sslboot_get_last_error();
            assert!(!error.is_null());
            let error_str = CStr::from_ptr(error).to_str().unwrap();
            assert_eq!(error_str, "Test error");
        }

        clear_last_error();
        unsafe {
            let error = sslboot_get_last_error();
            assert!(error.is_null());
        }
    }

    #[test]
    fn test_string_allocation() {
        unsafe {
            let s = allocate_string("Hello, FFI!");
            assert!(!s.is_null());

            let c_str = CStr::from_ptr(s);
            assert_eq!(c_str.to_str().unwrap(), "Hello, FFI!");

            sslboot_string_free(s);
        }
    }
}
