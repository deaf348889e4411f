mod support;

use alloy_primitives::U256;
use swapdesk::domain::{DirectionPolicy, DomainError, QuoteSide, TradeDirection, TradeIntent};
use swapdesk::engine::{ButtonState, SubmitOutcome};
use swapdesk::error::Error;
use swapdesk::testkit::gateway::MockChainGateway;

use support::SwapHarness;

#[tokio::test]
async fn reverse_twice_restores_fields_without_quoting() {
    let gateway =
        MockChainGateway::new().with_quote_results(vec![Ok(U256::from(9_990_000u64))]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();
    let ticket = h.widget.edit_source("10").unwrap();
    h.widget.refresh_quote(ticket).await;
    assert_eq!(h.gateway.calls().len(), 1);

    h.widget.reverse();
    assert_eq!(
        h.widget.source_token().symbol().map(ToString::to_string),
        Some("wanUSDT".to_string())
    );
    assert_eq!(h.widget.source_amount(), "9.99");
    assert_eq!(h.widget.dest_amount(), "10");
    assert_eq!(h.widget.authoritative_side(), QuoteSide::Dest);

    h.widget.reverse();
    assert_eq!(
        h.widget.source_token().symbol().map(ToString::to_string),
        Some("WAN".to_string())
    );
    assert_eq!(h.widget.source_amount(), "10");
    assert_eq!(h.widget.dest_amount(), "9.99");
    assert_eq!(h.widget.authoritative_side(), QuoteSide::Source);

    // Both reversals reused the displayed amounts; no pool traffic.
    assert_eq!(h.gateway.calls().len(), 1);
}

#[tokio::test]
async fn button_state_derivation_order() {
    let gateway = MockChainGateway::new().with_allowance_results(vec![Ok(false)]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_source("wanDOGE").unwrap();
    h.widget.select_dest("wanUSDT").unwrap();
    h.widget.edit_source("100");
    h.widget.edit_dest("99");

    // Disconnected wins over everything else.
    assert_eq!(h.widget.button_state(), ButtonState::ConnectWallet);

    h.connect().await;
    assert_eq!(h.widget.button_state(), ButtonState::ReadyToTrade);
    assert_eq!(h.widget.button_label(), "Swap");

    // A short allowance flips the button to override mode.
    assert_eq!(h.widget.submit().await, SubmitOutcome::NeedsAllowance);
    assert_eq!(h.widget.button_state(), ButtonState::NeedsAllowance);
    assert_eq!(h.widget.button_label(), "Increase Allowance");

    // Clearing an amount outranks the override and drops it.
    h.widget.edit_source("");
    assert_eq!(h.widget.button_state(), ButtonState::EnterAmount);
    assert!(!h.widget.needs_allowance());
}

#[tokio::test]
async fn duplicate_selection_is_rejected() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    let result = h.widget.select_dest("WAN");
    assert!(matches!(
        result,
        Err(Error::Domain(DomainError::DuplicateSelection { .. }))
    ));
    assert!(!h.widget.dest_token().is_selected());
}

#[tokio::test]
async fn selection_change_rederives_the_changed_side() {
    let gateway = MockChainGateway::new().with_quote_results(vec![
        Ok(U256::from(9_990_000u64)),
        Ok(U256::from(9_980_000u64)),
    ]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();
    let ticket = h.widget.edit_source("10").unwrap();
    h.widget.refresh_quote(ticket).await;
    assert_eq!(h.widget.dest_amount(), "9.99");

    // Swapping the destination keeps the source amount authoritative and
    // re-derives the new destination side.
    let ticket = h
        .widget
        .select_dest("wanUSDC")
        .unwrap()
        .expect("kept amount issues a ticket");
    assert_eq!(ticket.request().side, QuoteSide::Source);
    assert_eq!(ticket.request().raw_amount, "10");

    h.widget.refresh_quote(ticket).await;
    assert_eq!(h.widget.dest_amount(), "9.98");
}

#[tokio::test]
async fn edit_clears_allowance_override() {
    let gateway = MockChainGateway::new().with_allowance_results(vec![Ok(false)]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_source("wanDOGE").unwrap();
    h.widget.select_dest("wanUSDT").unwrap();
    h.widget.edit_source("100");
    h.widget.edit_dest("99");
    h.connect().await;

    assert_eq!(h.widget.submit().await, SubmitOutcome::NeedsAllowance);
    assert!(h.widget.needs_allowance());

    // The stale derived amount stays displayed until the new quote lands.
    h.widget.edit_source("150");
    assert!(!h.widget.needs_allowance());
    assert!(h.widget.is_loading_quote());
    assert_eq!(h.widget.button_state(), ButtonState::ReadyToTrade);
}

#[tokio::test]
async fn set_pair_installs_both_sides() {
    let mut h = SwapHarness::new(DirectionPolicy::pair_exchange(), MockChainGateway::new());
    h.widget.edit_source("3");
    h.widget.set_pair("WAN", "wanUSDT").unwrap();

    assert_eq!(
        h.widget.source_token().symbol().map(ToString::to_string),
        Some("WAN".to_string())
    );
    assert_eq!(
        h.widget.dest_token().symbol().map(ToString::to_string),
        Some("wanUSDT".to_string())
    );
    assert_eq!(h.widget.source_amount(), "");
    assert_eq!(h.widget.dest_amount(), "");
    assert_eq!(
        h.widget.intent().map(TradeIntent::direction),
        Some(TradeDirection::NativeToToken)
    );
}
