//! Session management and registry operations for the roster ledger client.
//!
//! Two components, strictly layered. [`SessionManager`] establishes the
//! wallet session and binds the fixed registry contract, producing a
//! [`ContractHandle`]. [`RegistryClient`] issues the three registry
//! operations against that binding: register a player, assign a player to a
//! team, query a team's roster. All registry state lives on the ledger; this
//! crate holds nothing but the session.
//!
//! The presentation layer drives these operations with raw strings and
//! receives typed results or a [`roster_core::RegistryError`]; nothing here
//! panics on operator input or provider failure.

#![forbid(unsafe_code)]

/// Registry operations over an established session
pub mod registry;

/// Session establishment and the bound contract handle
pub mod session;

pub use registry::RegistryClient;
pub use session::{ContractHandle, Session, SessionManager};
