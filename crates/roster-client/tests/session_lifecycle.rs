//! Session establishment behavior against scripted providers.

use assert_matches::assert_matches;
use roster_client::{RegistryClient, SessionManager};
use roster_core::{RegistryError, REGISTRY_CONTRACT};
use roster_testkit::{
    address, connected_client, connected_manager, MockWalletProvider, DEFAULT_ACCOUNT,
};
use std::sync::Arc;

#[tokio::test]
async fn connect_without_provider_reports_unavailable() {
    let manager = SessionManager::new(None);
    assert_matches!(
        manager.connect().await,
        Err(RegistryError::ProviderUnavailable)
    );
    assert!(!manager.is_connected().await);
}

#[tokio::test]
async fn operations_before_connect_signal_not_connected() {
    let provider = MockWalletProvider::new();
    let manager = Arc::new(SessionManager::with_provider(Arc::new(provider.clone())));
    let client = RegistryClient::new(manager);

    // The session precondition comes first, even when the inputs are invalid.
    assert_matches!(
        client.add_player("").await,
        Err(RegistryError::NotConnected)
    );
    assert_matches!(
        client.assign_player_to_team("", "not-an-address").await,
        Err(RegistryError::NotConnected)
    );
    assert_matches!(
        client.get_team_players("not-an-address").await,
        Err(RegistryError::NotConnected)
    );

    assert_eq!(provider.send_count().await, 0);
    assert_eq!(provider.authorization_requests().await, 0);
}

#[tokio::test]
async fn denied_authorization_preserves_the_reason() {
    let provider = MockWalletProvider::denying("user closed the prompt");
    let manager = SessionManager::with_provider(Arc::new(provider));
    let err = manager.connect().await.unwrap_err();
    assert_eq!(
        err,
        RegistryError::authorization_denied("user closed the prompt")
    );
    assert!(!manager.is_connected().await);
}

#[tokio::test]
async fn empty_account_list_is_a_denial() {
    let provider = MockWalletProvider::with_accounts(Vec::new());
    let manager = SessionManager::with_provider(Arc::new(provider));
    assert_matches!(
        manager.connect().await,
        Err(RegistryError::AuthorizationDenied { .. })
    );
    assert!(!manager.is_connected().await);
}

#[tokio::test]
async fn connect_binds_the_fixed_contract() {
    let provider = MockWalletProvider::new();
    let client = connected_client(provider.clone()).await;
    client.add_player("Messi").await.unwrap();

    let sent = provider.sent().await;
    assert_eq!(sent.len(), 1);
    let (call, from) = &sent[0];
    assert_eq!(call.contract.as_str(), REGISTRY_CONTRACT);
    assert_eq!(from.as_str(), DEFAULT_ACCOUNT);
}

#[tokio::test]
async fn reconnect_replaces_the_active_identity() {
    let provider = MockWalletProvider::new();
    let manager = connected_manager(provider.clone()).await;

    let replacement = address("0x3333333333333333333333333333333333333333");
    provider.set_accounts(vec![replacement.clone()]).await;
    manager.connect().await.unwrap();
    assert_eq!(provider.authorization_requests().await, 2);

    let client = RegistryClient::new(manager);
    client.add_player("Ronaldo").await.unwrap();
    let sent = provider.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1, replacement);
}

#[tokio::test]
async fn the_handle_exposes_the_fixed_binding() {
    let manager = connected_manager(MockWalletProvider::new()).await;
    let handle = manager.handle().await.unwrap();
    assert_eq!(handle.contract().as_str(), REGISTRY_CONTRACT);
    assert!(handle.interface().method("getTeamPlayers").is_some());
}

#[tokio::test]
async fn the_session_exposes_all_authorized_accounts() {
    let first = address("0x4444444444444444444444444444444444444444");
    let second = address("0x5555555555555555555555555555555555555555");
    let provider = MockWalletProvider::with_accounts(vec![first.clone(), second.clone()]);
    let manager = connected_manager(provider).await;

    let handle = manager.handle().await.unwrap();
    assert_eq!(handle.session().identity(), &first);
    assert_eq!(handle.session().accounts(), &[first, second]);
}
