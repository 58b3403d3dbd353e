//! Sslboot Core - OpenSSL provider bootstrap
//!
//! This crate ensures the OpenSSL "legacy" and "default" providers are
//! loaded into the process-wide provider registry before any legacy
//! cryptographic algorithm is used. Against an OpenSSL older than 3.0 the
//! operation is a no-op, since legacy algorithms are built in there.
//!
//! # Main Components
//!
//! - **Error Handling**: `thiserror`-based errors naming the provider
//!   that failed to load
//! - **Core Types**: [`ProviderKind`] and the serializable
//!   [`BootstrapStatus`] report
//! - **Bootstrap**: the one-shot, idempotent [`load`] operation and its
//!   [`status`] introspection
//!
//! # Example
//!
//! ```no_run
//! fn main() -> sslboot_core::Result<()> {
//!     // Before the first use of a legacy algorithm, typically at startup:
//!     sslboot_core::load()?;
//!     Ok(())
//! }
//! ```

pub mod bootstrap;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use bootstrap::{load, provider_api_available, status};
pub use error::{Error, Result};
pub use types::{BootstrapStatus, ProviderKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_status_reports_library_version() {
        assert!(!status().library_version.is_empty());
    }
}
