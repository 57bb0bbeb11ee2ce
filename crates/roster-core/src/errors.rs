//! Client-facing error taxonomy.
//!
//! Validation failures (`NotConnected`, `EmptyInput`, `InvalidAddress`) are
//! detected locally and never reach the provider. Runtime-originated
//! failures are wrapped in `LedgerCall` with the original message intact and
//! inspectable through both `Display` and `source()`. Every failure is
//! terminal for its operation; the client never retries.

use crate::address::AddressFormatError;
use crate::effects::ProviderError;
use serde::{Deserialize, Serialize};

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Every way a registry operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum RegistryError {
    /// No compatible wallet/runtime provider exists in the environment.
    #[error("no compatible wallet provider is available")]
    ProviderUnavailable,

    /// The operator refused account access, or the authorization request
    /// otherwise failed.
    #[error("wallet authorization denied: {reason}")]
    AuthorizationDenied {
        /// Reason reported by the provider
        reason: String,
    },

    /// An operation was invoked before a session was established.
    #[error("not connected to the ledger; establish a session first")]
    NotConnected,

    /// A required input was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyInput {
        /// Which input was empty
        field: String,
    },

    /// An address-typed input failed the ledger address format check.
    #[error("invalid ledger address {input:?}: {reason}")]
    InvalidAddress {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: AddressFormatError,
    },

    /// The runtime or contract rejected the call.
    #[error("ledger call failed: {source}")]
    LedgerCall {
        /// Original provider failure, message preserved
        #[source]
        source: ProviderError,
    },
}

impl RegistryError {
    /// Authorization denial with the provider's reason.
    pub fn authorization_denied(reason: impl Into<String>) -> Self {
        Self::AuthorizationDenied {
            reason: reason.into(),
        }
    }

    /// Empty or whitespace-only input.
    pub fn empty_input(field: impl Into<String>) -> Self {
        Self::EmptyInput {
            field: field.into(),
        }
    }

    /// Rejected address input.
    pub fn invalid_address(input: impl Into<String>, reason: AddressFormatError) -> Self {
        Self::InvalidAddress {
            input: input.into(),
            reason,
        }
    }
}

impl From<ProviderError> for RegistryError {
    fn from(source: ProviderError) -> Self {
        Self::LedgerCall { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn ledger_failures_keep_the_original_message_inspectable() {
        let err: RegistryError = ProviderError::execution("execution reverted: boom").into();
        assert!(err.to_string().contains("execution reverted: boom"));
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("execution reverted: boom"));
    }

    #[test]
    fn validation_errors_name_the_offending_field() {
        assert_eq!(
            RegistryError::empty_input("player name").to_string(),
            "player name must not be empty"
        );
    }
}
