//! Core types for the Sslboot provider bootstrap
//!
//! The only data that crosses this crate's boundary: which provider an
//! operation or error is about, and a serializable snapshot of the
//! bootstrap state for host-side diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two providers the bootstrap is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deprecated algorithms (MD4, RC4, DES, ...) kept for compatibility
    Legacy,
    /// Currently recommended algorithms
    Default,
}

impl ProviderKind {
    /// Both providers, in load order
    pub const ALL: [ProviderKind; 2] = [ProviderKind::Legacy, ProviderKind::Default];

    /// The name OpenSSL resolves the provider by
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::Legacy => "legacy",
            ProviderKind::Default => "default",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the bootstrap state
///
/// Produced by [`crate::bootstrap::status`]; serialized to JSON across the
/// FFI boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapStatus {
    /// Whether the linked OpenSSL has the provider architecture at all
    pub provider_api: bool,
    /// Providers currently pinned by the bootstrap
    pub loaded: Vec<ProviderKind>,
    /// Version string of the linked OpenSSL
    pub library_version: String,
}

impl BootstrapStatus {
    /// True when legacy-algorithm use is safe: either the library predates
    /// providers (legacy algorithms are built in) or both providers are
    /// pinned.
    pub fn is_ready(&self) -> bool {
        !self.provider_api || self.loaded.len() == ProviderKind::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_names() {
        assert_eq!(ProviderKind::Legacy.name(), "legacy");
        assert_eq!(ProviderKind::Default.name(), "default");
        assert_eq!(ProviderKind::Legacy.to_string(), "legacy");
    }

    #[test]
    fn test_provider_kind_serde() {
        let json = serde_json::to_string(&ProviderKind::ALL.to_vec()).unwrap();
        assert_eq!(json, r#"["legacy","default"]"#);

        let parsed: Vec<ProviderKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ProviderKind::ALL.to_vec());
    }

    #[test]
    fn test_status_readiness() {
        let pre_provider = BootstrapStatus {
            provider_api: false,
            loaded: Vec::new(),
            library_version: "OpenSSL 1.1.1".to_string(),
        };
        assert!(pre_provider.is_ready());

        let unloaded = BootstrapStatus {
            provider_api: true,
            loaded: Vec::new(),
            library_version: "OpenSSL 3.0.0".to_string(),
        };
        assert!(!unloaded.is_ready());

        let loaded = BootstrapStatus {
            provider_api: true,
            loaded: ProviderKind::ALL.to_vec(),
            library_version: "OpenSSL 3.0.0".to_string(),
        };
        assert!(loaded.is_ready());
    }
}
