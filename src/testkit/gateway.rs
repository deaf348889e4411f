//! Mock [`ChainGateway`] implementation for testing.
//!
//! [`MockChainGateway`] scripts per-method results and records every call
//! with the arguments it received, so tests can assert both the flow taken
//! and the exact values sent toward the chain.

use std::collections::VecDeque;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::port::gateway::{ChainError, ChainGateway, TradeRecord, TxReceipt};
use crate::port::wallet::Account;

/// One recorded gateway call and the arguments it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// An allowance check for `owner` on `token`.
    CheckAllowance {
        /// The owner address as passed.
        owner: String,
        /// The token contract queried.
        token: Address,
        /// The human amount checked against.
        amount: Decimal,
    },
    /// An allowance increase on `token`.
    IncreaseAllowance {
        /// The token contract approved.
        token: Address,
        /// The human amount approved.
        amount: Decimal,
    },
    /// A pool quote request.
    QuoteBestOutput {
        /// Input token contract.
        input: Address,
        /// Output token contract.
        output: Address,
        /// Input amount in smallest units.
        amount_in: U256,
    },
    /// A swap-pool trade paying the native coin.
    SwapNativeForToken {
        /// The token bought.
        token: Address,
        /// The human native amount paid.
        amount: Decimal,
    },
    /// A swap-pool token trade.
    SwapTokenForToken {
        /// Input token contract.
        input: Address,
        /// Output token contract.
        output: Address,
        /// Input amount in smallest units.
        amount_in: U256,
    },
    /// An exchange-contract buy paying the native coin.
    BuyTokenWithNative {
        /// The token bought.
        token: Address,
        /// The human native amount paid.
        amount: Decimal,
    },
    /// An exchange-contract sell back into the native coin.
    SellTokenForNative {
        /// The token sold.
        token: Address,
        /// Amount sold in smallest units.
        amount_in: U256,
    },
    /// A trade-history fetch.
    FetchTradeHistory,
}

/// A mock gateway with scripted per-method results and a full call log.
///
/// Each call pops the next result from the matching queue. Exhausted queues
/// fall back to a benign default: allowance checks pass, transactions return
/// a confirmed receipt, quotes echo `amount_in`, history is empty.
pub struct MockChainGateway {
    allowance_results: Mutex<VecDeque<Result<bool, ChainError>>>,
    approve_results: Mutex<VecDeque<Result<TxReceipt, ChainError>>>,
    quote_results: Mutex<VecDeque<Result<U256, ChainError>>>,
    trade_results: Mutex<VecDeque<Result<TxReceipt, ChainError>>>,
    history_results: Mutex<VecDeque<Result<Vec<TradeRecord>, ChainError>>>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockChainGateway {
    pub fn new() -> Self {
        Self {
            allowance_results: Mutex::new(VecDeque::new()),
            approve_results: Mutex::new(VecDeque::new()),
            quote_results: Mutex::new(VecDeque::new()),
            trade_results: Mutex::new(VecDeque::new()),
            history_results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_allowance_results(self, results: Vec<Result<bool, ChainError>>) -> Self {
        *self.allowance_results.lock() = results.into();
        self
    }

    pub fn with_approve_results(self, results: Vec<Result<TxReceipt, ChainError>>) -> Self {
        *self.approve_results.lock() = results.into();
        self
    }

    pub fn with_quote_results(self, results: Vec<Result<U256, ChainError>>) -> Self {
        *self.quote_results.lock() = results.into();
        self
    }

    pub fn with_trade_results(self, results: Vec<Result<TxReceipt, ChainError>>) -> Self {
        *self.trade_results.lock() = results.into();
        self
    }

    pub fn with_history_results(self, results: Vec<Result<Vec<TradeRecord>, ChainError>>) -> Self {
        *self.history_results.lock() = results.into();
        self
    }

    /// Snapshot of every call made so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().push(call);
    }

    fn next_trade_result(&self) -> Result<TxReceipt, ChainError> {
        self.trade_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(TxReceipt::confirmed("0xtrade")))
    }
}

impl Default for MockChainGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainGateway for MockChainGateway {
    async fn check_allowance(
        &self,
        owner: &Account,
        token: Address,
        amount: Decimal,
    ) -> Result<bool, ChainError> {
        self.record(GatewayCall::CheckAllowance {
            owner: owner.as_str().to_string(),
            token,
            amount,
        });
        self.allowance_results.lock().pop_front().unwrap_or(Ok(true))
    }

    async fn increase_allowance(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError> {
        self.record(GatewayCall::IncreaseAllowance { token, amount });
        self.approve_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(TxReceipt::confirmed("0xapproval")))
    }

    async fn quote_best_output(
        &self,
        input: Address,
        output: Address,
        amount_in: U256,
    ) -> Result<U256, ChainError> {
        self.record(GatewayCall::QuoteBestOutput {
            input,
            output,
            amount_in,
        });
        self.quote_results.lock().pop_front().unwrap_or(Ok(amount_in))
    }

    async fn swap_native_for_token(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError> {
        self.record(GatewayCall::SwapNativeForToken { token, amount });
        self.next_trade_result()
    }

    async fn swap_token_for_token(
        &self,
        input: Address,
        output: Address,
        amount_in: U256,
    ) -> Result<TxReceipt, ChainError> {
        self.record(GatewayCall::SwapTokenForToken {
            input,
            output,
            amount_in,
        });
        self.next_trade_result()
    }

    async fn buy_token_with_native(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError> {
        self.record(GatewayCall::BuyTokenWithNative { token, amount });
        self.next_trade_result()
    }

    async fn sell_token_for_native(
        &self,
        token: Address,
        amount_in: U256,
    ) -> Result<TxReceipt, ChainError> {
        self.record(GatewayCall::SellTokenForNative { token, amount_in });
        self.next_trade_result()
    }

    async fn fetch_trade_history(&self) -> Result<Vec<TradeRecord>, ChainError> {
        self.record(GatewayCall::FetchTradeHistory);
        self.history_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
