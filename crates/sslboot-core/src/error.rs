//! Error types for the Sslboot core library
//!
//! This module defines the error handling system for Sslboot, using
//! thiserror for ergonomic error definitions and anyhow for flexible
//! error sources.

use thiserror::Error;

use crate::types::ProviderKind;

/// Main error type for Sslboot operations
#[derive(Error, Debug)]
pub enum Error {
    /// A provider could not be loaded into the process-wide registry
    #[error("Provider load failed: {provider} - {message}")]
    ProviderLoad {
        provider: ProviderKind,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The provider this error is about, if it names one
    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            Error::ProviderLoad { provider, .. } => Some(*provider),
            Error::Internal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ProviderLoad {
            provider: ProviderKind::Legacy,
            message: "module not found".to_string(),
            source: None,
        };
        assert_eq!(
            err.to_string(),
            "Provider load failed: legacy - module not found"
        );
    }

    #[test]
    fn test_error_provider_accessor() {
        let err = Error::ProviderLoad {
            provider: ProviderKind::Default,
            message: "boom".to_string(),
            source: None,
        };
        assert_eq!(err.provider(), Some(ProviderKind::Default));

        let err = Error::Internal {
            message: "lock poisoned".to_string(),
            source: anyhow::anyhow!("lock poisoned"),
        };
        assert_eq!(err.provider(), None);
    }
}
