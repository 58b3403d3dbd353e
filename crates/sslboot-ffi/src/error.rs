//! Error handling for FFI boundary
//!
//! This module provides utilities for safely propagating errors
//! across the FFI boundary without panics or undefined behavior.

use std::any::Any;
use std::panic;

use crate::memory::set_last_error;
use crate::types::SslbootResult;

/// Convert a Sslboot core error to an FFI result code
pub fn map_core_error(error: sslboot_core::Error) -> SslbootResult {
    use sslboot_core::{Error, ProviderKind};

    set_last_error(error.to_string());
    match error {
        Error::ProviderLoad {
            provider: ProviderKind::Legacy,
            ..
        } => SslbootResult::LegacyProviderError,
        Error::ProviderLoad {
            provider: ProviderKind::Default,
            ..
        } => SslbootResult::DefaultProviderError,
        Error::Internal { .. } => SslbootResult::InternalError,
    }
}

/// Safely execute a closure that might panic
///
/// This function catches any panics and converts them to appropriate
/// error codes, preventing undefined behavior at the FFI boundary.
pub fn catch_panic<F, R>(f: F) -> Result<R, SslbootResult>
where
    F: FnOnce() -> Result<R, SslbootResult> + panic::UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(result) => result,
        Err(panic_info) => {
            let msg = get_panic_message(&panic_info);
            set_last_error(format!("Panic occurred: {}", msg));
            Err(SslbootResult::InternalError)
        }
    }
}

/// Extract a message from panic info
fn get_panic_message(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Macro for safely executing FFI functions
#[macro_export]
macro_rules! ffi_boundary {
    ($body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(result) => result,
            Err(code) => return code,
        }
    }};
}

/// Validate that a mutable pointer is not null
pub fn validate_mut_ptr<T>(ptr: *mut T, name: &str) -> Result<(), SslbootResult> {
    if ptr.is_null() {
        set_last_error(format!("{} is null", name));
        Err(SslbootResult::NullPointer)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sslboot_core::{Error, ProviderKind};

    #[test]
    fn test_panic_catching() {
        let result = catch_panic(|| {
            panic!("Test panic");
            #[allow(unreachable_code)]
            Ok(42)
        });

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), SslbootResult::InternalError);
    }

    #[test]
    fn test_ptr_validation() {
        let mut value = 42;
        let ptr = &mut value as *mut i32;

        assert!(validate_mut_ptr(ptr, "test_ptr").is_ok());
        assert!(validate_mut_ptr(std::ptr::null_mut::<i32>(), "null_ptr").is_err());
    }

    #[test]
    fn test_core_error_mapping() {
        let err = Error::ProviderLoad {
            provider: ProviderKind::Legacy,
            message: "module not found".to_string(),
            source: None,
        };
        assert_eq!(map_core_error(err), SslbootResult::LegacyProviderError);

        let err = Error::ProviderLoad {
            provider: ProviderKind::Default,
            message: "activation failed".to_string(),
            source: None,
        };
        assert_eq!(map_core_error(err), SslbootResult::DefaultProviderError);
    }
}
