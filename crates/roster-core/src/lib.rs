//! Core types and interfaces for the roster ledger client.
//!
//! This crate holds the pure, I/O-free foundation of the client: the value
//! types exchanged with the player-registry contract, the fixed contract
//! binding, the wallet/runtime provider trait, and the error taxonomy.
//! Implementations live elsewhere: `roster-client` provides the session and
//! registry components, `roster-testkit` a deterministic mock provider.

#![forbid(unsafe_code)]

/// Ledger account addresses and their format check
pub mod address;

/// The fixed registry contract binding (address, interface, call types)
pub mod contract;

/// Effect interfaces for external collaborators
pub mod effects;

/// Client-facing error taxonomy
pub mod errors;

/// Player identifiers and team rosters
pub mod roster;

// === Public API Re-exports ===

pub use address::{Address, AddressFormatError, ADDRESS_LEN};
pub use contract::{
    CallKind, CallValue, ContractCall, ContractInterface, MethodSpec, ADD_PLAYER,
    ASSIGN_PLAYER_TO_TEAM, GET_TEAM_PLAYERS, REGISTRY_CONTRACT, REGISTRY_INTERFACE,
};
pub use effects::{ProviderError, ReturnValue, TxReceipt, WalletEffects};
pub use errors::{RegistryError, Result};
pub use roster::{PlayerId, TeamRoster};
