//! Wallet session port for account access and chain management.
//!
//! The widgets never talk to a provider object directly; they ask this port
//! for accounts and for the expected chain. Failures here are logged and
//! leave the session disconnected - they are never surfaced as toasts.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Wallet account address - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Account(String);

impl Account {
    /// Create a new Account from an address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the account address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Failure reported by the wallet provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct WalletError(String);

impl WalletError {
    /// Create a wallet error from a provider message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The native currency block of a chain definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    /// Currency display name.
    pub name: String,
    /// Currency ticker symbol.
    pub symbol: String,
    /// Smallest-unit precision.
    pub decimals: u8,
}

/// The chain the application expects the wallet to be on.
///
/// Carries everything a wallet needs to register the chain when it does not
/// already know it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    /// Numeric chain id.
    pub chain_id: u64,
    /// Human-readable chain name.
    pub chain_name: String,
    /// Native coin description.
    pub native_currency: NativeCurrency,
    /// RPC endpoints for the chain.
    pub rpc_urls: Vec<String>,
    /// Block explorer frontends.
    pub block_explorer_urls: Vec<String>,
}

impl ChainSpec {
    /// The chain id in the `0x`-prefixed hex form wallet providers expect.
    #[must_use]
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    /// Wanchain mainnet (chain id 888).
    #[must_use]
    pub fn wanchain_mainnet() -> Self {
        Self {
            chain_id: 888,
            chain_name: "Wanchain".to_string(),
            native_currency: NativeCurrency {
                name: "Wanchain".to_string(),
                symbol: "WAN".to_string(),
                decimals: 18,
            },
            rpc_urls: vec!["https://gwan-ssl.wandevs.org:56891/".to_string()],
            block_explorer_urls: vec!["https://wanscan.org/".to_string()],
        }
    }
}

/// Port for the user's wallet provider session.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// Request the wallet's accounts, prompting the user if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider is missing or the user declines.
    async fn request_accounts(&self) -> Result<Vec<Account>, WalletError>;

    /// The chain the wallet is currently on.
    ///
    /// # Errors
    ///
    /// Returns an error when the provider cannot report a chain id.
    async fn current_chain_id(&self) -> Result<u64, WalletError>;

    /// Move the wallet onto `spec`'s chain, registering the chain first
    /// when the wallet does not know it.
    ///
    /// # Errors
    ///
    /// Returns an error when the user rejects the switch or the provider
    /// fails to add the chain.
    async fn switch_or_add_chain(&self, spec: &ChainSpec) -> Result<(), WalletError>;
}
