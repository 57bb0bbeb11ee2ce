//! Scriptable in-memory wallet provider.
//!
//! Implements the wallet boundary against a simulated registry ledger so
//! client behavior is observable and deterministic: every `send` and `call`
//! is recorded verbatim, receipts derive from a transaction counter, and
//! denials or reverts can be scripted per scenario. The simulated contract
//! mirrors the deployed registry: players get ids in registration order
//! (starting at 1) and team rosters grow in assignment order.

use async_trait::async_trait;
use roster_core::{
    Address, CallValue, ContractCall, PlayerId, ProviderError, ReturnValue, TxReceipt,
    WalletEffects,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Default test identity authorized by a fresh provider.
pub const DEFAULT_ACCOUNT: &str = "0x00a329c0648769a73afac7f9381e08fb43dbea72";

#[derive(Debug, Default)]
struct LedgerState {
    // index + 1 is the ledger-assigned player id
    players: Vec<String>,
    teams: HashMap<Address, Vec<PlayerId>>,
}

#[derive(Debug, Default)]
struct MockState {
    accounts: Vec<Address>,
    denial: Option<String>,
    revert: Option<String>,
    query_output: Option<ReturnValue>,
    ledger: LedgerState,
    sent: Vec<(ContractCall, Address)>,
    called: Vec<ContractCall>,
    auth_requests: usize,
    tx_counter: u64,
}

/// In-memory wallet provider for tests.
///
/// Cheap to clone; clones share state, so a test can keep one handle for
/// inspection while the session manager holds another.
#[derive(Clone)]
pub struct MockWalletProvider {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWalletProvider {
    /// Provider authorizing [`DEFAULT_ACCOUNT`].
    pub fn new() -> Self {
        Self::with_accounts(vec![crate::address(DEFAULT_ACCOUNT)])
    }

    /// Provider authorizing the given accounts, in order.
    pub fn with_accounts(accounts: Vec<Address>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                accounts,
                ..MockState::default()
            })),
        }
    }

    /// Provider whose operator refuses every authorization request.
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                accounts: vec![crate::address(DEFAULT_ACCOUNT)],
                denial: Some(reason.into()),
                ..MockState::default()
            })),
        }
    }

    /// Replace the authorized account list (takes effect on the next
    /// authorization request).
    pub async fn set_accounts(&self, accounts: Vec<Address>) {
        self.state.lock().await.accounts = accounts;
    }

    /// Make every subsequent `send` fail with this runtime message.
    pub async fn fail_sends(&self, message: impl Into<String>) {
        self.state.lock().await.revert = Some(message.into());
    }

    /// Make every subsequent `call` return this output instead of the
    /// simulated ledger's answer.
    pub async fn script_query_output(&self, output: ReturnValue) {
        self.state.lock().await.query_output = Some(output);
    }

    /// Every state-changing call issued so far, with its sender.
    pub async fn sent(&self) -> Vec<(ContractCall, Address)> {
        self.state.lock().await.sent.clone()
    }

    /// Every read-only call issued so far.
    pub async fn called(&self) -> Vec<ContractCall> {
        self.state.lock().await.called.clone()
    }

    /// Number of state-changing calls issued so far.
    pub async fn send_count(&self) -> usize {
        self.state.lock().await.sent.len()
    }

    /// Number of authorization requests received so far.
    pub async fn authorization_requests(&self) -> usize {
        self.state.lock().await.auth_requests
    }
}

#[async_trait]
impl WalletEffects for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let mut state = self.state.lock().await;
        state.auth_requests += 1;
        if let Some(reason) = &state.denial {
            return Err(ProviderError::refused(reason.clone()));
        }
        Ok(state.accounts.clone())
    }

    async fn send(&self, call: ContractCall, from: Address) -> Result<TxReceipt, ProviderError> {
        let mut state = self.state.lock().await;
        state.sent.push((call.clone(), from));
        if let Some(message) = &state.revert {
            return Err(ProviderError::execution(message.clone()));
        }
        match call.method.as_str() {
            "addPlayer" => {
                let name = text_arg(&call, 0)?;
                state.ledger.players.push(name);
            }
            "assignPlayerToTeam" => {
                let id_text = text_arg(&call, 0)?;
                let team = account_arg(&call, 1)?;
                let id: u64 = id_text.trim().parse().map_err(|_| {
                    ProviderError::execution(format!(
                        "execution reverted: invalid player id {id_text:?}"
                    ))
                })?;
                if id == 0 || id as usize > state.ledger.players.len() {
                    return Err(ProviderError::execution(format!(
                        "execution reverted: unknown player {id}"
                    )));
                }
                state.ledger.teams.entry(team).or_default().push(PlayerId::new(id));
            }
            other => {
                return Err(ProviderError::execution(format!(
                    "execution reverted: unknown method {other}"
                )))
            }
        }
        state.tx_counter += 1;
        Ok(TxReceipt {
            transaction_hash: format!("0x{:064x}", state.tx_counter),
            block_number: Some(state.tx_counter),
        })
    }

    async fn call(&self, call: ContractCall) -> Result<ReturnValue, ProviderError> {
        let mut state = self.state.lock().await;
        state.called.push(call.clone());
        if let Some(output) = &state.query_output {
            return Ok(output.clone());
        }
        match call.method.as_str() {
            "getTeamPlayers" => {
                let team = account_arg(&call, 0)?;
                let roster = state.ledger.teams.get(&team).cloned().unwrap_or_default();
                // runtimes hand numeric sequences back in string form
                let ids: Vec<String> = roster.iter().map(ToString::to_string).collect();
                Ok(ReturnValue::from(ids))
            }
            other => Err(ProviderError::execution(format!(
                "execution reverted: unknown method {other}"
            ))),
        }
    }
}

fn text_arg(call: &ContractCall, index: usize) -> Result<String, ProviderError> {
    match call.args.get(index) {
        Some(CallValue::Text(value)) => Ok(value.clone()),
        _ => Err(ProviderError::execution(format!(
            "execution reverted: argument {index} of {} is not a string",
            call.method
        ))),
    }
}

fn account_arg(call: &ContractCall, index: usize) -> Result<Address, ProviderError> {
    match call.args.get(index) {
        Some(CallValue::Account(address)) => Ok(address.clone()),
        _ => Err(ProviderError::execution(format!(
            "execution reverted: argument {index} of {} is not an address",
            call.method
        ))),
    }
}
