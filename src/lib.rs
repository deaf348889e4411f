//! Swapdesk - headless swap and trade orchestration for a Wanchain DEX front-end.
//!
//! This crate drives the widgets of a swap UI without owning any rendering.
//! Hosts feed user events in; the orchestrator keeps the widget state and
//! reaches the chain only through ports the host implements.
//!
//! # Architecture
//!
//! The crate keeps domain logic, flows, and async boundaries apart:
//!
//! - **`domain`** - Chain-agnostic building blocks
//!   - Token registry, selection slots, exact amount conversion
//!   - Trade intent derivation and per-widget direction policies
//! - **`engine`** - The flows behind the widgets
//!   - `QuoteEngine` - derives the passive amount field from the edited one
//!   - `TradeOrchestrator` - connection, editing, allowance, submit
//!   - `TradeHistoryService` - settled trades resolved for display
//! - **`port`** - Boundaries the host implements: chain gateway, wallet
//!   session, status notifiers
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with Wanchain defaults
//! - [`domain`] - Tokens, amounts, and trade intents
//! - [`engine`] - Quote, orchestration, and history services
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for the host-side collaborators
//!
//! # Features
//!
//! - `testkit` - Export the scripted mocks for host test suites
//!
//! # Example
//!
//! ```no_run
//! use swapdesk::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::parse_toml("")?;
//!     config.init_logging();
//!     let registry = config.registry()?;
//!     let chain = config.chain_spec();
//!     let _ = (registry, chain);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
