mod support;

use alloy_primitives::U256;
use swapdesk::domain::{DirectionPolicy, QuoteSide};
use swapdesk::testkit::domain::builtin_address;
use swapdesk::testkit::gateway::{GatewayCall, MockChainGateway};

use support::SwapHarness;

#[tokio::test]
async fn quote_scales_by_token_decimals() {
    // WAN has 18 decimals, wanUSDT 6: 10 WAN in, 9.99 USDT out.
    let gateway =
        MockChainGateway::new().with_quote_results(vec![Ok(U256::from(9_990_000u64))]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();

    let ticket = h.widget.edit_source("10").expect("full pair issues a ticket");
    assert!(h.widget.is_loading_quote());

    assert!(h.widget.refresh_quote(ticket).await);
    assert!(!h.widget.is_loading_quote());
    assert_eq!(h.widget.source_amount(), "10");
    assert_eq!(h.widget.dest_amount(), "9.99");

    assert_eq!(
        h.gateway.calls(),
        vec![GatewayCall::QuoteBestOutput {
            input: builtin_address("WAN"),
            output: builtin_address("wanUSDT"),
            amount_in: U256::from(10u128 * 10u128.pow(18)),
        }]
    );
}

#[tokio::test]
async fn dest_edit_quotes_the_inverse_leg() {
    let gateway = MockChainGateway::new()
        .with_quote_results(vec![Ok(U256::from(10u128 * 10u128.pow(18)))]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();

    let ticket = h.widget.edit_dest("9.99").expect("full pair issues a ticket");
    assert_eq!(h.widget.authoritative_side(), QuoteSide::Dest);

    assert!(h.widget.refresh_quote(ticket).await);
    assert_eq!(h.widget.dest_amount(), "9.99");
    assert_eq!(h.widget.source_amount(), "10");

    // The inverse leg quotes dest -> source, scaled by the dest precision.
    assert_eq!(
        h.gateway.calls(),
        vec![GatewayCall::QuoteBestOutput {
            input: builtin_address("wanUSDT"),
            output: builtin_address("WAN"),
            amount_in: U256::from(9_990_000u64),
        }]
    );
}

#[tokio::test]
async fn stale_quote_outcome_is_discarded() {
    let gateway = MockChainGateway::new().with_quote_results(vec![
        Ok(U256::from(9_990_000u64)),
        Ok(U256::from(19_980_000u64)),
    ]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();

    let first = h.widget.edit_source("10").unwrap();
    let second = h.widget.edit_source("20").unwrap();

    // Resolve both, then let the slow first response land after the second.
    let first_value = h.widget.fetch_quote(&first).await;
    let second_value = h.widget.fetch_quote(&second).await;

    assert!(h.widget.apply_quote(&second, second_value));
    assert!(!h.widget.apply_quote(&first, first_value));

    assert_eq!(h.widget.source_amount(), "20");
    assert_eq!(h.widget.dest_amount(), "19.98");
}

#[tokio::test]
async fn pool_failure_renders_zero() {
    let gateway = MockChainGateway::new().with_quote_results(vec![Err(
        swapdesk::port::gateway::ChainError::new("no route"),
    )]);
    let mut h = SwapHarness::new(DirectionPolicy::swap(), gateway);
    h.widget.select_dest("wanUSDT").unwrap();

    let ticket = h.widget.edit_source("10").unwrap();
    assert!(h.widget.refresh_quote(ticket).await);
    assert_eq!(h.widget.dest_amount(), "0");
    assert!(!h.widget.is_loading_quote());
}

#[tokio::test]
async fn invalid_amount_clears_derived_without_pool_call() {
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    h.widget.select_dest("wanUSDT").unwrap();

    assert!(h.widget.edit_source("ten").is_none());
    assert_eq!(h.widget.source_amount(), "ten");
    assert_eq!(h.widget.dest_amount(), "");
    assert!(!h.widget.is_loading_quote());
    assert!(h.gateway.calls().is_empty());
}

#[tokio::test]
async fn unknown_token_quote_blanks_the_derived_field() {
    // Selection is not registry-checked; the miss surfaces when quoting.
    let mut h = SwapHarness::new(DirectionPolicy::swap(), MockChainGateway::new());
    h.widget.select_dest("NOPE").unwrap();

    let ticket = h.widget.edit_source("10").unwrap();
    assert!(h.widget.refresh_quote(ticket).await);
    assert_eq!(h.widget.dest_amount(), "");
    assert!(h.gateway.calls().is_empty());
}
