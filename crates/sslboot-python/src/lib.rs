//! Sslboot Python Bindings
//!
//! This crate provides Python bindings for the Sslboot provider
//! bootstrap using PyO3, so an embedding Python runtime can load the
//! OpenSSL "legacy" and "default" providers from its module-init path.

#![allow(non_local_definitions)] // PyO3 macros generate non-local impl blocks

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

mod bootstrap;
mod error;
mod types;

use error::*;

/// Sslboot Python module
#[pymodule]
fn _sslboot(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // Add exception types
    m.add("SslbootError", _py.get_type::<SslbootError>())?;
    m.add("LegacyProviderError", _py.get_type::<LegacyProviderError>())?;
    m.add("DefaultProviderError", _py.get_type::<DefaultProviderError>())?;

    // Add core functions
    m.add_function(wrap_pyfunction!(bootstrap::load, m)?)?;
    m.add_function(wrap_pyfunction!(bootstrap::provider_api_available, m)?)?;
    m.add_function(wrap_pyfunction!(bootstrap::status, m)?)?;

    // Add utility functions
    m.add_function(wrap_pyfunction!(version, m)?)?;

    Ok(())
}

/// Get the version of the Sslboot library
#[pyfunction]
fn version() -> PyResult<String> {
    Ok(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ))
}
