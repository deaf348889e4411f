//! Mock [`WalletSession`] implementation for testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::port::wallet::{Account, ChainSpec, WalletError, WalletSession};

/// Account every unscripted mock session reports.
pub const DEFAULT_ACCOUNT: &str = "0x1111111111111111111111111111111111111111";

/// A mock wallet session with scripted per-method results.
///
/// Each call pops the next result from the matching queue. Exhausted queues
/// fall back to a cooperative wallet: one account, already on chain 888,
/// switches accepted.
pub struct MockWalletSession {
    account_results: Mutex<VecDeque<Result<Vec<Account>, WalletError>>>,
    chain_id_results: Mutex<VecDeque<Result<u64, WalletError>>>,
    switch_results: Mutex<VecDeque<Result<(), WalletError>>>,
    switch_calls: Mutex<Vec<ChainSpec>>,
}

impl MockWalletSession {
    pub fn new() -> Self {
        Self {
            account_results: Mutex::new(VecDeque::new()),
            chain_id_results: Mutex::new(VecDeque::new()),
            switch_results: Mutex::new(VecDeque::new()),
            switch_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_account_results(self, results: Vec<Result<Vec<Account>, WalletError>>) -> Self {
        *self.account_results.lock() = results.into();
        self
    }

    pub fn with_chain_id_results(self, results: Vec<Result<u64, WalletError>>) -> Self {
        *self.chain_id_results.lock() = results.into();
        self
    }

    pub fn with_switch_results(self, results: Vec<Result<(), WalletError>>) -> Self {
        *self.switch_results.lock() = results.into();
        self
    }

    /// Chain definitions passed to `switch_or_add_chain`, in order.
    pub fn switch_calls(&self) -> Vec<ChainSpec> {
        self.switch_calls.lock().clone()
    }
}

impl Default for MockWalletSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletSession for MockWalletSession {
    async fn request_accounts(&self) -> Result<Vec<Account>, WalletError> {
        self.account_results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![Account::new(DEFAULT_ACCOUNT)]))
    }

    async fn current_chain_id(&self) -> Result<u64, WalletError> {
        self.chain_id_results.lock().pop_front().unwrap_or(Ok(888))
    }

    async fn switch_or_add_chain(&self, spec: &ChainSpec) -> Result<(), WalletError> {
        self.switch_calls.lock().push(spec.clone());
        self.switch_results.lock().pop_front().unwrap_or(Ok(()))
    }
}
