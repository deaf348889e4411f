//! Builders for domain primitives used across tests.
//!
//! Concise factory functions for registries, symbols, addresses, and
//! notifier wiring so tests focus on assertions rather than construction
//! boilerplate.

use std::sync::Arc;

use alloy_primitives::Address;

use crate::domain::token::{TokenRegistry, TokenSymbol};
use crate::port::notifier::NotifierRegistry;
use crate::testkit::notifier::RecordingNotifier;

/// The compiled-in Wanchain registry, ready to share.
pub fn registry() -> Arc<TokenRegistry> {
    Arc::new(TokenRegistry::wanchain_mainnet())
}

/// Create a [`TokenSymbol`] from a string.
pub fn symbol(s: &str) -> TokenSymbol {
    TokenSymbol::from(s)
}

/// A deterministic address filled with `byte`.
pub fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// Resolve a compiled-in token's contract address.
///
/// # Panics
///
/// Panics when `s` is not in the Wanchain table; tests pass known symbols.
pub fn builtin_address(s: &str) -> Address {
    TokenRegistry::wanchain_mainnet()
        .lookup(&TokenSymbol::from(s))
        .expect("symbol is in the compiled-in table")
        .address()
}

/// A notifier registry holding one recording notifier, plus a handle to it.
pub fn notifier_with_recorder() -> (Arc<NotifierRegistry>, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(recorder.clone()));
    (Arc::new(registry), recorder)
}
