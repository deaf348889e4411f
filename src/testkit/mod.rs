//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`gateway`] — Scripted [`ChainGateway`](crate::port::gateway::ChainGateway)
//!   mock with a full call log.
//! - [`wallet`] — Scripted [`WalletSession`](crate::port::wallet::WalletSession) mock.
//! - [`notifier`] — Recording [`StatusNotifier`](crate::port::notifier::StatusNotifier).
//! - [`domain`] — Builders for domain primitives: registries, symbols, addresses.

pub mod domain;
pub mod gateway;
pub mod notifier;
pub mod wallet;
