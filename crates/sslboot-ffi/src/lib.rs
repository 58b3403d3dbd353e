//! Sslboot FFI - Foreign Function Interface for cross-language bindings
//!
//! This crate provides a C-compatible FFI layer for the Sslboot provider
//! bootstrap, enabling integration with languages like Python, Ruby, Go,
//! and others. The surface is deliberately small: load the providers,
//! query the bootstrap status, read the last error.
//!
//! # Safety
//!
//! FFI functions dealing with raw pointers are marked `unsafe`. Users
//! must ensure:
//! - Proper memory management (free returned strings)
//! - Non-null output pointers where required
//! - Bootstrap is invoked before concurrent cryptographic use begins

#![warn(missing_docs)]

#[macro_use]
mod error;
mod api;
mod memory;
mod types;

// Re-export public API
pub use api::*;
pub use memory::{sslboot_clear_error, sslboot_get_last_error, sslboot_string_free};
pub use types::SslbootResult;
