//! Provider bootstrap against the process-wide OpenSSL registry
//!
//! OpenSSL 3 moved deprecated algorithms into a "legacy" provider that is
//! no longer activated by default. Anything that still has to read
//! DES-encrypted private keys or RC4 archives must load that provider (and
//! then the "default" provider, since an explicit load disables the
//! implicit fallback) before the first cryptographic call.
//!
//! [`load`] performs exactly that, once per process. Against an OpenSSL
//! that predates providers the whole module compiles down to a no-op; the
//! `ossl3` cfg is set by the build script from the linked library version.

use tracing::debug;

use crate::error::Result;
use crate::types::BootstrapStatus;

#[cfg(ossl3)]
use std::sync::{Mutex, MutexGuard};

#[cfg(ossl3)]
use openssl::provider::Provider;

#[cfg(ossl3)]
use crate::error::Error;
#[cfg(ossl3)]
use crate::types::ProviderKind;

/// Loaded provider handles, pinned for the process lifetime.
///
/// `Provider` unloads on drop, so the guards must never be dropped while
/// callers may still request legacy algorithms. Pinning them here also
/// makes a repeat [`load`] call return without touching the library.
#[cfg(ossl3)]
static PINNED: Mutex<Option<Pinned>> = Mutex::new(None);

#[cfg(ossl3)]
struct Pinned {
    _legacy: Provider,
    _default: Provider,
}

/// Load the "legacy" and "default" providers into the process-wide
/// registry.
///
/// Returns `Ok(())` only after both providers are active. A failure to
/// load either one aborts immediately with an error naming the provider;
/// callers should treat that as fatal for any later use of legacy
/// algorithms.
///
/// Safe to call more than once: the second call observes the pinned
/// handles and returns without touching the library.
#[cfg(ossl3)]
pub fn load() -> Result<()> {
    let mut pinned = lock_pinned()?;
    if pinned.is_some() {
        debug!("providers already pinned, nothing to do");
        return Ok(());
    }

    let legacy = load_named(ProviderKind::Legacy, ProviderKind::Legacy.name())?;
    let default = load_named(ProviderKind::Default, ProviderKind::Default.name())?;
    *pinned = Some(Pinned {
        _legacy: legacy,
        _default: default,
    });

    Ok(())
}

/// No-op variant for OpenSSL builds older than 3.0, where legacy
/// algorithms are available without provider loading.
#[cfg(not(ossl3))]
pub fn load() -> Result<()> {
    debug!("linked OpenSSL predates the provider architecture, nothing to load");
    Ok(())
}

/// Snapshot of the bootstrap state for host-side diagnostics
#[cfg(ossl3)]
pub fn status() -> BootstrapStatus {
    let loaded = match PINNED.lock() {
        Ok(guard) if guard.is_some() => ProviderKind::ALL.to_vec(),
        _ => Vec::new(),
    };

    BootstrapStatus {
        provider_api: true,
        loaded,
        library_version: openssl::version::version().to_string(),
    }
}

/// Snapshot of the bootstrap state for host-side diagnostics
#[cfg(not(ossl3))]
pub fn status() -> BootstrapStatus {
    BootstrapStatus {
        provider_api: false,
        loaded: Vec::new(),
        library_version: openssl::version::version().to_string(),
    }
}

/// Whether this build carries the provider-load operation at all
pub fn provider_api_available() -> bool {
    cfg!(ossl3)
}

#[cfg(ossl3)]
fn load_named(kind: ProviderKind, name: &str) -> Result<Provider> {
    let provider = Provider::load(None, name).map_err(|e| Error::ProviderLoad {
        provider: kind,
        message: format!("OpenSSL could not activate the {} provider", name),
        source: Some(anyhow::Error::new(e)),
    })?;

    debug!(provider = name, "provider loaded");
    Ok(provider)
}

#[cfg(ossl3)]
fn lock_pinned() -> Result<MutexGuard<'static, Option<Pinned>>> {
    PINNED.lock().map_err(|e| Error::Internal {
        message: "provider pin registry lock poisoned".to_string(),
        source: anyhow::anyhow!(e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(ossl3)]
    use serial_test::serial;

    #[test]
    #[cfg(ossl3)]
    #[serial]
    fn test_load_pins_both_providers() {
        load().unwrap();

        let status = status();
        assert!(status.provider_api);
        assert!(status.loaded.contains(&ProviderKind::Legacy));
        assert!(status.loaded.contains(&ProviderKind::Default));
        assert!(status.is_ready());
    }

    #[test]
    #[cfg(ossl3)]
    #[serial]
    fn test_load_twice_is_idempotent() {
        load().unwrap();
        load().unwrap();
    }

    #[test]
    #[cfg(ossl3)]
    #[serial]
    fn test_missing_provider_reports_legacy() {
        let err = load_named(ProviderKind::Legacy, "sslboot-no-such-provider").err().unwrap();
        assert_eq!(err.provider(), Some(ProviderKind::Legacy));
        assert!(err.to_string().contains("legacy"));
    }

    #[test]
    #[cfg(ossl3)]
    #[serial]
    fn test_missing_provider_reports_default() {
        let err = load_named(ProviderKind::Default, "sslboot-no-such-provider").err().unwrap();
        assert_eq!(err.provider(), Some(ProviderKind::Default));
    }

    #[test]
    #[cfg(not(ossl3))]
    fn test_load_is_noop_without_provider_api() {
        load().unwrap();

        let status = status();
        assert!(!status.provider_api);
        assert!(status.loaded.is_empty());
        assert!(status.is_ready());
    }

    #[test]
    fn test_provider_api_matches_status() {
        assert_eq!(provider_api_available(), status().provider_api);
    }
}
