//! Session establishment and the bound contract handle.
//!
//! A session binds a wallet provider, the caller's authorized identities,
//! and the fixed registry contract into one immutable handle. Establishment
//! is explicit and one-way: a manager starts disconnected, `connect` moves
//! it to connected, and there is no disconnect operation. The handle is
//! read-only after creation and safe to share across concurrent operations.

use roster_core::{
    Address, CallKind, CallValue, ContractCall, ContractInterface, MethodSpec, ProviderError,
    RegistryError, Result, ReturnValue, TxReceipt, WalletEffects, REGISTRY_CONTRACT,
    REGISTRY_INTERFACE,
};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// A live connection to the ledger runtime plus the caller's active
/// identity.
#[derive(Clone)]
pub struct Session {
    provider: Arc<dyn WalletEffects>,
    identity: Address,
    accounts: Vec<Address>,
}

impl Session {
    /// The identity state-changing calls are issued as.
    pub fn identity(&self) -> &Address {
        &self.identity
    }

    /// All identities the provider authorized; the first one is active.
    pub fn accounts(&self) -> &[Address] {
        &self.accounts
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("identity", &self.identity)
            .field("accounts", &self.accounts.len())
            .finish_non_exhaustive()
    }
}

/// The fixed registry contract bound to an established session.
///
/// Address and interface are build-time constants; the binding never changes
/// after `connect`.
pub struct ContractHandle {
    contract: Address,
    interface: &'static ContractInterface,
    session: Session,
}

impl ContractHandle {
    fn bind(contract: Address, interface: &'static ContractInterface, session: Session) -> Self {
        Self {
            contract,
            interface,
            session,
        }
    }

    /// Address of the bound contract.
    pub fn contract(&self) -> &Address {
        &self.contract
    }

    /// The interface the bound contract exposes.
    pub fn interface(&self) -> &'static ContractInterface {
        self.interface
    }

    /// The session this handle was derived from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Issue one state-changing call as the session identity and wait for
    /// its inclusion result.
    pub async fn submit(
        &self,
        spec: &'static MethodSpec,
        args: Vec<CallValue>,
    ) -> Result<TxReceipt> {
        debug_assert!(spec.kind == CallKind::Transaction);
        let call = ContractCall::new(self.contract.clone(), spec, args);
        let from = self.session.identity.clone();
        debug!(method = spec.name, from = %from, "submitting transaction");
        let receipt = self.session.provider.send(call, from).await?;
        info!(
            method = spec.name,
            tx = %receipt.transaction_hash,
            "transaction included"
        );
        Ok(receipt)
    }

    /// Issue one read-only call and return its decoded output.
    pub async fn query(
        &self,
        spec: &'static MethodSpec,
        args: Vec<CallValue>,
    ) -> Result<ReturnValue> {
        debug_assert!(spec.kind == CallKind::Query);
        let call = ContractCall::new(self.contract.clone(), spec, args);
        debug!(method = spec.name, "issuing read-only call");
        Ok(self.session.provider.call(call).await?)
    }
}

impl fmt::Debug for ContractHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractHandle")
            .field("contract", &self.contract)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

/// Establishes at most one active session against the ledger runtime.
pub struct SessionManager {
    provider: Option<Arc<dyn WalletEffects>>,
    active: RwLock<Option<Arc<ContractHandle>>>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("provider_present", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create a manager over whatever provider the environment offers.
    ///
    /// `None` models an environment with no compatible provider installed;
    /// `connect` then fails without attempting an identity request.
    pub fn new(provider: Option<Arc<dyn WalletEffects>>) -> Self {
        Self {
            provider,
            active: RwLock::new(None),
        }
    }

    /// Manager over a present provider.
    pub fn with_provider(provider: Arc<dyn WalletEffects>) -> Self {
        Self::new(Some(provider))
    }

    /// Request account access and bind the registry contract.
    ///
    /// Suspends while the provider prompts the operator. On success the
    /// manager is connected and all registry operations become usable.
    /// Calling `connect` on an already-connected manager issues a fresh
    /// authorization request and atomically replaces the session, so at most
    /// one is ever live.
    pub async fn connect(&self) -> Result<()> {
        let provider = self
            .provider
            .clone()
            .ok_or(RegistryError::ProviderUnavailable)?;
        let accounts = provider.request_accounts().await.map_err(|err| match err {
            ProviderError::Refused { reason } => {
                warn!(%reason, "wallet authorization denied");
                RegistryError::AuthorizationDenied { reason }
            }
            other => RegistryError::authorization_denied(other.to_string()),
        })?;
        let identity = accounts
            .first()
            .cloned()
            .ok_or_else(|| RegistryError::authorization_denied("provider returned no accounts"))?;
        let contract = Address::parse(REGISTRY_CONTRACT)
            .map_err(|reason| RegistryError::invalid_address(REGISTRY_CONTRACT, reason))?;
        let session = Session {
            provider,
            identity: identity.clone(),
            accounts,
        };
        let handle = Arc::new(ContractHandle::bind(contract, &REGISTRY_INTERFACE, session));
        let replaced = self.active.write().await.replace(handle).is_some();
        info!(identity = %identity, replaced, "ledger session established");
        Ok(())
    }

    /// Whether a session is currently established.
    pub async fn is_connected(&self) -> bool {
        self.active.read().await.is_some()
    }

    /// The active contract handle, if connected.
    pub async fn handle(&self) -> Option<Arc<ContractHandle>> {
        self.active.read().await.clone()
    }
}
