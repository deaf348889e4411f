//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems (the wallet provider, the chain RPC, the host's toast layer).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │        Engine           │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Wallet  │            │    Chain    │              │  Status   │
//! │ Session │            │   Gateway   │              │ Notifier  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`ChainGateway`] - Allowances, quotes, trade submission, trade history
//! - [`WalletSession`] - Account access and chain switching
//! - [`StatusNotifier`] - User-facing pending/success/failure feedback

pub mod gateway;
pub mod notifier;
pub mod wallet;

pub use gateway::{ChainError, ChainGateway, TradeRecord, TxReceipt};
pub use notifier::{
    LogNotifier, NotifierRegistry, NullNotifier, StatusEvent, StatusNotifier, TRANSACTION_SUCCESS,
};
pub use wallet::{Account, ChainSpec, NativeCurrency, WalletError, WalletSession};
