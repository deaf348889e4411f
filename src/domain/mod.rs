//! Chain-agnostic domain logic.

pub mod amount;
pub mod error;
pub mod intent;
pub mod token;

// Core domain types
pub use amount::{
    format_base_units, from_base_units, parse_amount, to_base_units, AmountPair, QuoteSide,
};
pub use error::DomainError;
pub use intent::{DirectionPolicy, TradeDirection, TradeIntent, TradePrimitive};
pub use token::{TokenMeta, TokenRegistry, TokenSlot, TokenSymbol, MAX_TOKEN_DECIMALS};
