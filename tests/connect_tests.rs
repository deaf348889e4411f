mod support;

use swapdesk::domain::DirectionPolicy;
use swapdesk::engine::ButtonState;
use swapdesk::port::wallet::{Account, WalletError};
use swapdesk::testkit::gateway::MockChainGateway;
use swapdesk::testkit::wallet::{MockWalletSession, DEFAULT_ACCOUNT};

use support::SwapHarness;

#[tokio::test]
async fn connect_on_expected_chain_stores_account() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new();

    assert!(h.widget.connect(&wallet).await);
    assert_eq!(
        h.widget.connection().account().map(Account::as_str),
        Some(DEFAULT_ACCOUNT)
    );
    assert!(wallet.switch_calls().is_empty());
}

#[tokio::test]
async fn connect_switches_a_wallet_on_the_wrong_chain() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new().with_chain_id_results(vec![Ok(1)]);

    assert!(h.widget.connect(&wallet).await);
    assert!(h.widget.connection().is_connected());

    let switches = wallet.switch_calls();
    assert_eq!(switches.len(), 1);
    assert_eq!(switches[0].chain_id, 888);
    assert_eq!(switches[0].chain_id_hex(), "0x378");
}

#[tokio::test]
async fn rejected_switch_leaves_the_widget_disconnected() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new()
        .with_chain_id_results(vec![Ok(1)])
        .with_switch_results(vec![Err(WalletError::new("user rejected"))]);

    assert!(!h.widget.connect(&wallet).await);
    assert!(!h.widget.connection().is_connected());
    assert_eq!(h.widget.button_state(), ButtonState::ConnectWallet);
}

#[tokio::test]
async fn no_accounts_leaves_the_widget_disconnected() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new().with_account_results(vec![Ok(vec![])]);

    assert!(!h.widget.connect(&wallet).await);
    assert!(!h.widget.connection().is_connected());
}

#[tokio::test]
async fn account_request_failure_leaves_the_widget_disconnected() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new()
        .with_account_results(vec![Err(WalletError::new("no provider"))]);

    assert!(!h.widget.connect(&wallet).await);
    assert!(!h.widget.connection().is_connected());
}

#[tokio::test]
async fn unreadable_chain_id_leaves_the_widget_disconnected() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let wallet = MockWalletSession::new()
        .with_chain_id_results(vec![Err(WalletError::new("provider gone"))]);

    assert!(!h.widget.connect(&wallet).await);
    assert!(!h.widget.connection().is_connected());
    assert!(wallet.switch_calls().is_empty());
}
