//! Deterministic test infrastructure for the roster ledger client.
//!
//! Provides a scriptable in-memory wallet provider plus fixture helpers for
//! tests that need a connected client. Everything here is deterministic:
//! receipts derive from a transaction counter and the simulated ledger
//! assigns player ids in registration order.

#![forbid(unsafe_code)]

/// Scriptable in-memory wallet provider
pub mod provider;

pub use provider::{MockWalletProvider, DEFAULT_ACCOUNT};

use roster_client::{RegistryClient, SessionManager};
use roster_core::Address;
use std::sync::Arc;

/// A syntactically valid team address for tests.
pub const TEAM_ADDRESS: &str = "0x1111111111111111111111111111111111111111";

/// A second valid team address, distinct from [`TEAM_ADDRESS`].
pub const OTHER_TEAM_ADDRESS: &str = "0x2222222222222222222222222222222222222222";

/// Build an `Address` from a literal known to be well-formed.
///
/// Panics on malformed input; fixture use only.
pub fn address(literal: &str) -> Address {
    Address::parse(literal).unwrap_or_else(|err| panic!("bad test address {literal:?}: {err}"))
}

/// A session manager connected through the given provider.
///
/// Panics if `connect` fails; fixture use only.
pub async fn connected_manager(provider: MockWalletProvider) -> Arc<SessionManager> {
    let manager = Arc::new(SessionManager::with_provider(Arc::new(provider)));
    manager
        .connect()
        .await
        .unwrap_or_else(|err| panic!("connect failed: {err}"));
    manager
}

/// A registry client over a fresh connected session.
pub async fn connected_client(provider: MockWalletProvider) -> RegistryClient {
    RegistryClient::new(connected_manager(provider).await)
}

/// Install a fmt subscriber honoring `RUST_LOG`, once per process.
///
/// Subsequent calls are no-ops; useful when debugging a failing test run.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
