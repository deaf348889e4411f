//! Chain gateway port: allowance checks, quoting, trade submission, and
//! trade history.
//!
//! Everything that ultimately becomes an RPC call against the swap pool or
//! the exchange contract goes through this trait. Amounts the user typed
//! travel as [`Decimal`]; amounts already scaled to a token's precision
//! travel as [`U256`] smallest units. The port does the final wire encoding,
//! never the widgets.

use std::fmt;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::port::wallet::Account;

/// Fallback toast text for failures without a usable payload.
const GENERIC_FAILURE: &str = "Transaction failed";

/// RPC error code nodes return when the payer cannot cover a native transfer.
const INSUFFICIENT_NATIVE_CODE: i64 = -32603;

const INSUFFICIENT_NATIVE_MESSAGE: &str = "Insufficient WAN balance";

/// Structured failure payload from a chain RPC call.
///
/// Providers wrap revert data inconsistently; this keeps the useful pieces
/// (numeric code, contract revert reason, provider message) and picks the
/// most specific one at display time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainError {
    code: Option<i64>,
    reason: Option<String>,
    message: Option<String>,
}

impl ChainError {
    /// A failure with only a provider message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            reason: None,
            message: Some(message.into()),
        }
    }

    /// A failure with a contract revert reason.
    pub fn from_reason(reason: impl Into<String>) -> Self {
        Self {
            code: None,
            reason: Some(reason.into()),
            message: None,
        }
    }

    /// Attach the provider's numeric error code.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Extract the useful pieces of a raw JSON-RPC error payload.
    ///
    /// Looks for a top-level `reason`, a nested `error.message`, and a
    /// numeric code at `error.code` or top level.
    #[must_use]
    pub fn from_json_payload(payload: &Value) -> Self {
        let reason = payload
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string);
        let message = payload
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let code = payload
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(Value::as_i64)
            .or_else(|| payload.get("code").and_then(Value::as_i64));
        Self {
            code,
            reason,
            message,
        }
    }

    /// The provider's numeric error code, if any.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    /// The contract revert reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The raw provider message, if any.
    #[must_use]
    pub fn provider_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The string a toast shows for this failure.
    ///
    /// Precedence: the insufficient-balance code, then the revert reason,
    /// then the provider message, then a generic fallback.
    #[must_use]
    pub fn human_message(&self) -> String {
        if self.code == Some(INSUFFICIENT_NATIVE_CODE) {
            return INSUFFICIENT_NATIVE_MESSAGE.to_string();
        }
        if let Some(reason) = self.reason.as_deref().filter(|r| !r.trim().is_empty()) {
            return reason.to_string();
        }
        if let Some(message) = self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            return message.to_string();
        }
        GENERIC_FAILURE.to_string()
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.human_message())
    }
}

impl std::error::Error for ChainError {}

/// Settlement marker for a submitted transaction.
///
/// A trade counts as successful only when the receipt carries a transaction
/// hash; a hash-less receipt settles as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxReceipt {
    /// Hash of the mined transaction, when the provider returned one.
    pub transaction_hash: Option<String>,
    /// Block the transaction landed in, when known.
    pub block_number: Option<u64>,
}

impl TxReceipt {
    /// A receipt carrying a transaction hash.
    #[must_use]
    pub fn confirmed(hash: impl Into<String>) -> Self {
        Self {
            transaction_hash: Some(hash.into()),
            block_number: None,
        }
    }

    /// A receipt without a transaction hash.
    #[must_use]
    pub fn unconfirmed() -> Self {
        Self::default()
    }

    /// Whether the receipt proves the transaction was accepted.
    #[must_use]
    pub fn has_confirmation(&self) -> bool {
        self.transaction_hash.is_some()
    }
}

/// One raw settled trade as the exchange contract reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    /// Address of the account that traded.
    pub user: String,
    /// Contract address of the token paid in.
    pub from_token: Address,
    /// Contract address of the token received.
    pub to_token: Address,
    /// Smallest-unit amount paid in.
    pub amount_in: U256,
    /// Smallest-unit amount received.
    pub amount_out: U256,
}

/// Port for every on-chain interaction the widgets need.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Errors
///
/// Methods return [`ChainError`] for provider and contract failures; callers
/// convert those to user-facing notifications at the flow boundary.
#[async_trait]
pub trait ChainGateway: Send + Sync {
    /// Whether `owner` has approved the spender to move at least `amount`
    /// (a human amount) of `token`.
    async fn check_allowance(
        &self,
        owner: &Account,
        token: Address,
        amount: Decimal,
    ) -> Result<bool, ChainError>;

    /// Approve the spender for `amount` (a human amount) of `token`.
    async fn increase_allowance(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError>;

    /// Best obtainable output for `amount_in` smallest units of `input`,
    /// in smallest units of `output`.
    async fn quote_best_output(
        &self,
        input: Address,
        output: Address,
        amount_in: U256,
    ) -> Result<U256, ChainError>;

    /// Swap-pool trade paying `amount` (a human amount) of the native coin
    /// for `token`.
    async fn swap_native_for_token(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError>;

    /// Swap-pool trade spending `amount_in` smallest units of `input` for
    /// `output`.
    async fn swap_token_for_token(
        &self,
        input: Address,
        output: Address,
        amount_in: U256,
    ) -> Result<TxReceipt, ChainError>;

    /// Exchange-contract buy paying `amount` (a human amount) of the native
    /// coin for `token`.
    async fn buy_token_with_native(
        &self,
        token: Address,
        amount: Decimal,
    ) -> Result<TxReceipt, ChainError>;

    /// Exchange-contract sell of `amount_in` smallest units of `token` back
    /// into the native coin.
    async fn sell_token_for_native(
        &self,
        token: Address,
        amount_in: U256,
    ) -> Result<TxReceipt, ChainError>;

    /// All settled trades the exchange contract reports.
    async fn fetch_trade_history(&self) -> Result<Vec<TradeRecord>, ChainError>;
}
