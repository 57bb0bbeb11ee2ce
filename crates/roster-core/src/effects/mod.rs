//! Effect interfaces for external collaborators.
//!
//! The client talks to exactly one kind of external service: a wallet/runtime
//! provider that holds the caller's keys, encodes calls, and relays them to
//! the ledger. The trait here is the seam implementations plug into,
//! production providers as well as the deterministic mock in
//! `roster-testkit`.

pub mod wallet;

pub use wallet::{ProviderError, ReturnValue, TxReceipt, WalletEffects};
