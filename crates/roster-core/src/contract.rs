//! The fixed registry contract binding.
//!
//! The contract address and its interface descriptor are build-time
//! constants: the client is bound to one deployed registry and nothing here
//! is operator-configurable. Wire encoding of calls (ABI parameter packing)
//! is delegated to the wallet provider and not reimplemented; the types in
//! this module carry the method name and typed arguments only.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// Deployed registry contract the client is bound to.
pub const REGISTRY_CONTRACT: &str = "0x2A9C558f293140bF3Bf0d833Ee7859DBc325542F";

/// Whether invoking a method mutates contract state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Fee-bearing, state-changing; resolves once included in the ledger.
    Transaction,
    /// Free read of current state; resolves after a single round trip.
    Query,
}

/// One method of the contract interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name as declared by the contract
    pub name: &'static str,
    /// Transaction or query
    pub kind: CallKind,
    /// Declared parameter types, in order
    pub params: &'static [&'static str],
    /// Declared return type, when the method has one
    pub returns: Option<&'static str>,
}

/// Registers a new player under a ledger-assigned id.
pub const ADD_PLAYER: MethodSpec = MethodSpec {
    name: "addPlayer",
    kind: CallKind::Transaction,
    params: &["string"],
    returns: None,
};

/// Links a registered player to a team.
pub const ASSIGN_PLAYER_TO_TEAM: MethodSpec = MethodSpec {
    name: "assignPlayerToTeam",
    kind: CallKind::Transaction,
    params: &["uint256", "address"],
    returns: None,
};

/// Reads the ordered roster of a team.
pub const GET_TEAM_PLAYERS: MethodSpec = MethodSpec {
    name: "getTeamPlayers",
    kind: CallKind::Query,
    params: &["address"],
    returns: Some("uint256[]"),
};

/// A contract's interface descriptor: the methods a bound handle may invoke.
#[derive(Debug, Clone, Copy)]
pub struct ContractInterface {
    /// Methods exposed by the contract, as supplied at build time
    pub methods: &'static [MethodSpec],
}

impl ContractInterface {
    /// Look up a method by its declared name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|spec| spec.name == name)
    }
}

/// The registry interface: the three methods this client may invoke.
pub const REGISTRY_INTERFACE: ContractInterface = ContractInterface {
    methods: &[ADD_PLAYER, ASSIGN_PLAYER_TO_TEAM, GET_TEAM_PLAYERS],
};

/// A typed argument for a contract call.
///
/// The provider is responsible for encoding these to the wire; in
/// particular, numeric-looking text stays text until the contract interprets
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallValue {
    /// An uninterpreted string argument
    Text(String),
    /// A validated ledger address argument
    Account(Address),
}

impl CallValue {
    /// String argument, forwarded as received.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Address argument.
    pub fn account(address: Address) -> Self {
        Self::Account(address)
    }
}

/// A fully-specified invocation of one contract method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    /// Contract the call is addressed to
    pub contract: Address,
    /// Method name as declared by the contract
    pub method: String,
    /// Arguments, in declaration order
    pub args: Vec<CallValue>,
}

impl ContractCall {
    /// Build a call against `contract` for the given method.
    pub fn new(contract: Address, spec: &MethodSpec, args: Vec<CallValue>) -> Self {
        Self {
            contract,
            method: spec.name.to_string(),
            args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contract_constant_is_well_formed() {
        assert!(Address::parse(REGISTRY_CONTRACT).is_ok());
    }

    #[test]
    fn interface_exposes_exactly_the_three_registry_methods() {
        assert_eq!(REGISTRY_INTERFACE.methods.len(), 3);
        assert_eq!(
            REGISTRY_INTERFACE.method("addPlayer").map(|m| m.kind),
            Some(CallKind::Transaction)
        );
        assert_eq!(
            REGISTRY_INTERFACE.method("assignPlayerToTeam").map(|m| m.kind),
            Some(CallKind::Transaction)
        );
        assert_eq!(
            REGISTRY_INTERFACE.method("getTeamPlayers").map(|m| m.kind),
            Some(CallKind::Query)
        );
        assert!(REGISTRY_INTERFACE.method("transferOwnership").is_none());
    }

    #[test]
    fn method_signatures_match_the_deployed_contract() {
        assert_eq!(ADD_PLAYER.params, &["string"]);
        assert_eq!(ASSIGN_PLAYER_TO_TEAM.params, &["uint256", "address"]);
        assert_eq!(GET_TEAM_PLAYERS.params, &["address"]);
        assert_eq!(GET_TEAM_PLAYERS.returns, Some("uint256[]"));
    }

    #[test]
    fn calls_carry_the_declared_method_name() {
        let contract = Address::parse(REGISTRY_CONTRACT).unwrap();
        let call = ContractCall::new(contract, &ADD_PLAYER, vec![CallValue::text("Messi")]);
        assert_eq!(call.method, "addPlayer");
        assert_eq!(call.args, vec![CallValue::Text("Messi".into())]);
    }
}
