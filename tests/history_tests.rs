use std::sync::Arc;

use alloy_primitives::U256;
use rust_decimal_macros::dec;
use swapdesk::domain::TokenRegistry;
use swapdesk::engine::TradeHistoryService;
use swapdesk::error::Error;
use swapdesk::port::gateway::{ChainError, TradeRecord};
use swapdesk::testkit::domain::{addr, builtin_address};
use swapdesk::testkit::gateway::MockChainGateway;

fn service(gateway: MockChainGateway) -> TradeHistoryService {
    TradeHistoryService::new(
        Arc::new(gateway),
        Arc::new(TokenRegistry::wanchain_mainnet()),
    )
}

fn wan_to_usdt_record() -> TradeRecord {
    TradeRecord {
        user: "0xabc".to_string(),
        from_token: builtin_address("WAN"),
        to_token: builtin_address("wanUSDT"),
        amount_in: U256::from(10u128 * 10u128.pow(18)),
        amount_out: U256::from(9_990_000u64),
    }
}

#[tokio::test]
async fn history_resolves_symbols_and_amounts() {
    let gateway =
        MockChainGateway::new().with_history_results(vec![Ok(vec![wan_to_usdt_record()])]);
    let service = service(gateway);

    assert_eq!(service.refresh().await.unwrap(), 1);
    let entries = service.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user, "0xabc");
    assert_eq!(entries[0].from_symbol, "WAN");
    assert_eq!(entries[0].to_symbol, "wanUSDT");
    assert_eq!(entries[0].amount_in, dec!(10));
    assert_eq!(entries[0].amount_out, dec!(9.99));
}

#[tokio::test]
async fn unknown_addresses_resolve_to_unknown() {
    let record = TradeRecord {
        user: "0xdef".to_string(),
        from_token: addr(0xEE),
        to_token: builtin_address("WAN"),
        amount_in: U256::from(5u128 * 10u128.pow(18)),
        amount_out: U256::from(1u128 * 10u128.pow(18)),
    };
    let gateway = MockChainGateway::new().with_history_results(vec![Ok(vec![record])]);
    let service = service(gateway);

    service.refresh().await.unwrap();
    let entries = service.entries();
    assert_eq!(entries[0].from_symbol, "Unknown");
    // Unknown tokens are rendered at native precision.
    assert_eq!(entries[0].amount_in, dec!(5));
}

#[tokio::test]
async fn refresh_failure_keeps_the_previous_cache() {
    let gateway = MockChainGateway::new().with_history_results(vec![
        Ok(vec![wan_to_usdt_record()]),
        Err(ChainError::new("provider down")),
    ]);
    let service = service(gateway);

    service.refresh().await.unwrap();
    let result = service.refresh().await;
    assert!(matches!(result, Err(Error::ChainCallFailed { .. })));
    assert_eq!(service.entries().len(), 1);
}

#[tokio::test]
async fn invalidate_clears_the_cache() {
    let gateway =
        MockChainGateway::new().with_history_results(vec![Ok(vec![wan_to_usdt_record()])]);
    let service = service(gateway);

    service.refresh().await.unwrap();
    assert!(service.is_loaded());

    service.invalidate();
    assert!(!service.is_loaded());
    assert!(service.entries().is_empty());
}

#[tokio::test]
async fn entries_are_empty_before_the_first_refresh() {
    let service = service(MockChainGateway::new());
    assert!(!service.is_loaded());
    assert!(service.entries().is_empty());
}
