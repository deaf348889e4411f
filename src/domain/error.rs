//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by validating constructors and conversion
//! functions.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A symbol was used that the token registry does not know.
    #[error("token '{symbol}' is not configured")]
    TokenNotConfigured {
        /// The symbol that failed to resolve.
        symbol: String,
    },

    /// The same token was selected on both sides of a trade.
    #[error("token '{symbol}' cannot be both source and destination")]
    DuplicateSelection {
        /// The symbol selected twice.
        symbol: String,
    },

    /// An amount string could not be parsed as a non-negative decimal.
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount {
        /// The raw input that failed to parse.
        value: String,
        /// Why parsing rejected it.
        reason: String,
    },

    /// Token decimals outside the supported `0..=18` range.
    #[error("token '{symbol}' declares {decimals} decimals, supported range is 0..=18")]
    DecimalsOutOfRange {
        /// The offending token symbol.
        symbol: String,
        /// The declared decimal count.
        decimals: u8,
    },

    /// An amount carries more fractional digits than the token precision.
    #[error("amount {amount} has more fractional digits than the token's {decimals} decimals")]
    AmountPrecision {
        /// The amount that could not be scaled exactly.
        amount: Decimal,
        /// The token's decimal precision.
        decimals: u8,
    },

    /// A smallest-unit value does not fit the supported numeric range.
    #[error("amount {value} does not fit the supported numeric range")]
    AmountRange {
        /// String form of the out-of-range value.
        value: String,
    },
}
