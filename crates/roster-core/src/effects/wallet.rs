//! Wallet/runtime provider boundary.

use crate::address::Address;
use crate::contract::ContractCall;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Decoded output of a read-only call, as delivered by the provider.
///
/// ABI decoding happens inside the provider; the client only interprets the
/// decoded value against the method's declared return type.
pub type ReturnValue = serde_json::Value;

/// Receipt for an included state-changing transaction.
///
/// Opaque to the client beyond identification; contents are whatever the
/// runtime reports at inclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    /// Hash identifying the included transaction
    pub transaction_hash: String,
    /// Ledger position, when the runtime reports one
    pub block_number: Option<u64>,
}

/// Errors surfaced by a wallet/runtime provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ProviderError {
    /// The human operator refused the authorization request, or the provider
    /// failed it.
    #[error("authorization refused: {reason}")]
    Refused {
        /// Reason reported by the provider
        reason: String,
    },
    /// The runtime or contract rejected the call (revert, insufficient
    /// funds). The message is verbatim from the runtime.
    #[error("{message}")]
    Execution {
        /// Original runtime/contract message
        message: String,
    },
    /// The provider could not reach the ledger network.
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying transport message
        message: String,
    },
    /// The provider's decoded output did not match the declared return type.
    #[error("malformed call output: {message}")]
    Decode {
        /// What failed to decode
        message: String,
    },
}

impl ProviderError {
    /// Authorization refused by the operator or provider.
    pub fn refused(reason: impl Into<String>) -> Self {
        Self::Refused {
            reason: reason.into(),
        }
    }

    /// Runtime or contract rejection, message preserved verbatim.
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Network-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Output that does not match the declared return type.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Wallet/runtime provider interface.
///
/// Implementations hold the caller's private keys and own all wire encoding;
/// the client never packs calldata itself. The two call primitives differ in
/// cost and finality: `send` submits a fee-bearing transaction and resolves
/// only once the runtime reports its inclusion result, while `call` is a
/// free read that resolves after one network round trip. Neither supports
/// cancellation once issued.
#[async_trait]
pub trait WalletEffects: Send + Sync {
    /// Request access to the caller's identities.
    ///
    /// May prompt the human operator and suspend until they respond or
    /// refuse. Returns one or more authorized accounts on success.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Submit a state-changing call as `from` and wait for its inclusion
    /// result.
    async fn send(&self, call: ContractCall, from: Address) -> Result<TxReceipt, ProviderError>;

    /// Execute a read-only call and return its decoded output.
    async fn call(&self, call: ContractCall) -> Result<ReturnValue, ProviderError>;
}

#[async_trait]
impl<T: WalletEffects + ?Sized> WalletEffects for Arc<T> {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        (**self).request_accounts().await
    }

    async fn send(&self, call: ContractCall, from: Address) -> Result<TxReceipt, ProviderError> {
        (**self).send(call, from).await
    }

    async fn call(&self, call: ContractCall) -> Result<ReturnValue, ProviderError> {
        (**self).call(call).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_errors_display_the_runtime_message_verbatim() {
        let err = ProviderError::execution("execution reverted: out of gas");
        assert_eq!(err.to_string(), "execution reverted: out of gas");
    }

    #[test]
    fn refusals_carry_the_provider_reason() {
        let err = ProviderError::refused("user closed the prompt");
        assert_eq!(
            err.to_string(),
            "authorization refused: user closed the prompt"
        );
    }
}
