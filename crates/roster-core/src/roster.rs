//! Player identifiers and team rosters.

use crate::effects::{ProviderError, ReturnValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-assigned player identifier.
///
/// The client never mints these. They come back from roster queries; for
/// assignment the operator's input is forwarded as uninterpreted text and
/// the contract decides whether it names a real player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Wrap a ledger-reported id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The numeric id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Ordered roster returned by a team query.
///
/// Fetched fresh on every query and never cached; a new query result simply
/// replaces whatever the caller held before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRoster(Vec<PlayerId>);

impl TeamRoster {
    /// Roster from an already-decoded id sequence.
    pub fn new(players: Vec<PlayerId>) -> Self {
        Self(players)
    }

    /// Decode a provider's query output into a roster.
    ///
    /// Runtimes deliver numeric sequence elements either as JSON numbers or
    /// as decimal strings; both forms decode. Anything else is a malformed
    /// response from the runtime's side of the boundary.
    pub fn decode(value: &ReturnValue) -> Result<Self, ProviderError> {
        let items = value
            .as_array()
            .ok_or_else(|| ProviderError::decode("roster output is not a sequence"))?;
        let mut players = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let id = match item {
                ReturnValue::Number(n) => n.as_u64(),
                ReturnValue::String(s) => s.parse::<u64>().ok(),
                _ => None,
            }
            .ok_or_else(|| {
                ProviderError::decode(format!("roster entry {index} is not a player id"))
            })?;
            players.push(PlayerId::new(id));
        }
        Ok(Self(players))
    }

    /// The ids in ledger order.
    pub fn player_ids(&self) -> &[PlayerId] {
        &self.0
    }

    /// Number of players on the team.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the team has no players.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TeamRoster {
    type Item = PlayerId;
    type IntoIter = std::vec::IntoIter<PlayerId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TeamRoster {
    type Item = &'a PlayerId;
    type IntoIter = std::slice::Iter<'a, PlayerId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_numeric_entries() {
        let roster = TeamRoster::decode(&json!([1, 2, 3])).unwrap();
        assert_eq!(
            roster.player_ids(),
            &[PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }

    #[test]
    fn decodes_string_entries() {
        let roster = TeamRoster::decode(&json!(["7", "11"])).unwrap();
        assert_eq!(roster.player_ids(), &[PlayerId::new(7), PlayerId::new(11)]);
    }

    #[test]
    fn decodes_an_empty_team() {
        let roster = TeamRoster::decode(&json!([])).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn rejects_output_that_is_not_a_sequence() {
        let err = TeamRoster::decode(&json!({"players": []})).unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }

    #[test]
    fn rejects_entries_that_are_not_player_ids() {
        let err = TeamRoster::decode(&json!([1, "two", 3])).unwrap_err();
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn preserves_ledger_order() {
        let roster = TeamRoster::decode(&json!([3, 1, 2])).unwrap();
        let ids: Vec<u64> = roster.into_iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
