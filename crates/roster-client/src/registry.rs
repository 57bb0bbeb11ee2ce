//! Registry operations over an established session.
//!
//! Translates validated caller intents into ledger calls. Check order is
//! fixed for every operation: session precondition first, then local input
//! validation, then exactly one ledger call. Validation failures never
//! reach the provider.

use crate::session::{ContractHandle, SessionManager};
use roster_core::{
    contract, Address, CallValue, RegistryError, Result, TeamRoster, TxReceipt,
};
use std::sync::Arc;
use tracing::debug;

/// Client for the player-registry contract.
pub struct RegistryClient {
    sessions: Arc<SessionManager>,
}

impl RegistryClient {
    /// Client over the given session manager.
    pub fn new(sessions: Arc<SessionManager>) -> Self {
        Self { sessions }
    }

    /// The session manager this client resolves its handle from.
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    async fn handle(&self) -> Result<Arc<ContractHandle>> {
        self.sessions.handle().await.ok_or(RegistryError::NotConnected)
    }

    /// Register a new player; the ledger assigns the player id.
    ///
    /// One fee-bearing transaction, resolved at inclusion. Registration does
    /// not place the player on any team.
    pub async fn add_player(&self, name: &str) -> Result<TxReceipt> {
        let handle = self.handle().await?;
        let name = require_filled("player name", name)?;
        handle
            .submit(&contract::ADD_PLAYER, vec![CallValue::text(name)])
            .await
    }

    /// Assign a registered player to a team.
    ///
    /// `player_id` is forwarded as received, with no local numeric check:
    /// the contract is the source of truth for player ids, so an unknown or
    /// malformed id surfaces as a ledger failure rather than local
    /// validation.
    pub async fn assign_player_to_team(
        &self,
        player_id: &str,
        team_address: &str,
    ) -> Result<TxReceipt> {
        let handle = self.handle().await?;
        let player_id = require_filled("player id", player_id)?;
        let team = parse_address(require_filled("team address", team_address)?)?;
        handle
            .submit(
                &contract::ASSIGN_PLAYER_TO_TEAM,
                vec![CallValue::text(player_id), CallValue::account(team)],
            )
            .await
    }

    /// Fetch the current roster of a team.
    ///
    /// Read-only and side-effect free. The roster is fetched fresh on every
    /// call and never cached; the result simply replaces whatever the caller
    /// held before.
    pub async fn get_team_players(&self, team_address: &str) -> Result<TeamRoster> {
        let handle = self.handle().await?;
        let team = parse_address(team_address)?;
        let output = handle
            .query(
                &contract::GET_TEAM_PLAYERS,
                vec![CallValue::account(team.clone())],
            )
            .await?;
        let roster = TeamRoster::decode(&output).map_err(RegistryError::from)?;
        debug!(players = roster.len(), team = %team, "team roster fetched");
        Ok(roster)
    }
}

fn require_filled<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(RegistryError::empty_input(field))
    } else {
        Ok(value)
    }
}

fn parse_address(input: &str) -> Result<Address> {
    Address::parse(input).map_err(|reason| RegistryError::invalid_address(input, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::AddressFormatError;

    #[test]
    fn filled_inputs_pass_through_untrimmed() {
        assert_eq!(require_filled("player name", " Messi "), Ok(" Messi "));
    }

    #[test]
    fn whitespace_only_inputs_are_empty() {
        assert_eq!(
            require_filled("player id", "  \t"),
            Err(RegistryError::empty_input("player id"))
        );
    }

    #[test]
    fn address_parse_failures_carry_the_input() {
        let err = parse_address("0x123").unwrap_err();
        assert_eq!(
            err,
            RegistryError::invalid_address("0x123", AddressFormatError::Length { len: 5 })
        );
    }
}
