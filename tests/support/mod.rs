#![allow(dead_code)]

use std::sync::Arc;

use swapdesk::domain::{DirectionPolicy, TokenRegistry};
use swapdesk::engine::TradeOrchestrator;
use swapdesk::port::wallet::ChainSpec;
use swapdesk::testkit::domain::notifier_with_recorder;
use swapdesk::testkit::gateway::MockChainGateway;
use swapdesk::testkit::notifier::RecordingNotifier;
use swapdesk::testkit::wallet::MockWalletSession;

/// One widget wired to a scripted gateway and a recording notifier.
pub struct SwapHarness {
    pub widget: TradeOrchestrator,
    pub gateway: Arc<MockChainGateway>,
    pub recorder: RecordingNotifier,
}

impl SwapHarness {
    /// Build a widget over the compiled-in Wanchain registry.
    pub fn new(policy: DirectionPolicy, gateway: MockChainGateway) -> Self {
        let gateway = Arc::new(gateway);
        let (notifiers, recorder) = notifier_with_recorder();
        let widget = TradeOrchestrator::new(
            policy,
            Arc::new(TokenRegistry::wanchain_mainnet()),
            gateway.clone(),
            notifiers,
            ChainSpec::wanchain_mainnet(),
        );
        Self {
            widget,
            gateway,
            recorder,
        }
    }

    /// Connect against a fully cooperative wallet.
    pub async fn connect(&mut self) {
        let wallet = MockWalletSession::new();
        assert!(self.widget.connect(&wallet).await);
    }
}
