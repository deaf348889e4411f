//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct covering the chain definition, the
//! token table, and logging. Configuration is loaded from a TOML file;
//! every field has a compiled-in Wanchain mainnet default, so an empty
//! document yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use swapdesk::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("swapdesk.toml")?;
//!     config.init_logging();
//!     let registry = config.registry()?;
//!     let _ = registry;
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::domain::token::{TokenMeta, TokenRegistry, TokenSymbol, MAX_TOKEN_DECIMALS};
use crate::error::{ConfigError, Result};
use crate::port::wallet::{ChainSpec, NativeCurrency};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Chain definition the widgets require wallets to sit on.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Tradeable token table.
    ///
    /// An empty table means the compiled-in Wanchain list.
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chain parameters offered to wallets on connect.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// Numeric chain id the widgets require.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Display name used when adding the chain to a wallet.
    #[serde(default = "default_chain_name")]
    pub chain_name: String,

    /// Native coin symbol; must have an entry in the token table.
    #[serde(default = "default_native_symbol")]
    pub native_symbol: String,

    /// Native coin precision.
    #[serde(default = "default_native_decimals")]
    pub native_decimals: u8,

    /// RPC endpoints offered when adding the chain.
    #[serde(default = "default_rpc_urls")]
    pub rpc_urls: Vec<String>,

    /// Block explorer endpoints offered when adding the chain.
    #[serde(default = "default_block_explorer_urls")]
    pub block_explorer_urls: Vec<String>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            chain_name: default_chain_name(),
            native_symbol: default_native_symbol(),
            native_decimals: default_native_decimals(),
            rpc_urls: default_rpc_urls(),
            block_explorer_urls: default_block_explorer_urls(),
        }
    }
}

/// One tradeable token entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    /// Display symbol, unique across the table.
    pub symbol: String,

    /// Contract address, 0x-prefixed hex.
    pub address: String,

    /// Smallest-unit precision.
    pub decimals: u8,
}

fn default_chain_id() -> u64 {
    888
}

fn default_chain_name() -> String {
    "Wanchain".to_string()
}

fn default_native_symbol() -> String {
    "WAN".to_string()
}

fn default_native_decimals() -> u8 {
    18
}

fn default_rpc_urls() -> Vec<String> {
    vec!["https://gwan-ssl.wandevs.org:56891/".to_string()]
}

fn default_block_explorer_urls() -> Vec<String> {
    vec!["https://wanscan.org/".to_string()]
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (bad chain id, unparseable URLs or addresses,
    ///   out-of-range precision, duplicate symbols)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.chain.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.chain.chain_name.is_empty() {
            return Err(ConfigError::MissingField {
                field: "chain_name",
            }
            .into());
        }
        if self.chain.native_symbol.is_empty() {
            return Err(ConfigError::MissingField {
                field: "native_symbol",
            }
            .into());
        }
        if self.chain.native_decimals > MAX_TOKEN_DECIMALS {
            return Err(ConfigError::InvalidValue {
                field: "native_decimals",
                reason: format!("must be {MAX_TOKEN_DECIMALS} or less"),
            }
            .into());
        }
        if self.chain.rpc_urls.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_urls" }.into());
        }
        for url in &self.chain.rpc_urls {
            check_url("rpc_urls", url)?;
        }
        for url in &self.chain.block_explorer_urls {
            check_url("block_explorer_urls", url)?;
        }

        let mut seen = HashSet::with_capacity(self.tokens.len());
        for token in &self.tokens {
            if token.symbol.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "tokens",
                    reason: "token symbol cannot be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(token.symbol.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "tokens",
                    reason: format!("duplicate token symbol {}", token.symbol),
                }
                .into());
            }
            parse_address(&token.address)?;
            if token.decimals > MAX_TOKEN_DECIMALS {
                return Err(ConfigError::InvalidValue {
                    field: "tokens",
                    reason: format!(
                        "{} precision must be {MAX_TOKEN_DECIMALS} or less",
                        token.symbol
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Build the token registry this configuration describes.
    ///
    /// An empty token table falls back to the compiled-in Wanchain list.
    ///
    /// # Errors
    ///
    /// Returns an error on unparseable addresses, out-of-range precision,
    /// or when the native symbol has no entry in the table.
    pub fn registry(&self) -> Result<TokenRegistry> {
        if self.tokens.is_empty() {
            return Ok(TokenRegistry::wanchain_mainnet());
        }
        let mut tokens = Vec::with_capacity(self.tokens.len());
        for entry in &self.tokens {
            let address = parse_address(&entry.address)?;
            tokens.push(TokenMeta::try_new(
                entry.symbol.as_str(),
                address,
                entry.decimals,
            )?);
        }
        let native = TokenSymbol::from(self.chain.native_symbol.as_str());
        Ok(TokenRegistry::new(native, tokens)?)
    }

    /// The chain definition handed to wallets on connect.
    #[must_use]
    pub fn chain_spec(&self) -> ChainSpec {
        ChainSpec {
            chain_id: self.chain.chain_id,
            chain_name: self.chain.chain_name.clone(),
            native_currency: NativeCurrency {
                name: self.chain.chain_name.clone(),
                symbol: self.chain.native_symbol.clone(),
                decimals: self.chain.native_decimals,
            },
            rpc_urls: self.chain.rpc_urls.clone(),
            block_explorer_urls: self.chain.block_explorer_urls.clone(),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn check_url(field: &'static str, raw: &str) -> Result<()> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: format!("{raw}: {e}"),
    })?;
    Ok(())
}

fn parse_address(raw: &str) -> Result<Address> {
    Address::from_str(raw).map_err(|e| {
        ConfigError::InvalidValue {
            field: "tokens",
            reason: format!("{raw}: {e}"),
        }
        .into()
    })
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format, `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_wanchain_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.chain.chain_id, 888);
        assert_eq!(config.chain.native_symbol, "WAN");
        let registry = config.registry().unwrap();
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn chain_spec_mirrors_chain_config() {
        let config = Config::default();
        let spec = config.chain_spec();
        assert_eq!(spec.chain_id, 888);
        assert_eq!(spec.chain_id_hex(), "0x378");
        assert_eq!(spec.native_currency.symbol, "WAN");
        assert_eq!(spec.rpc_urls, vec!["https://gwan-ssl.wandevs.org:56891/"]);
    }
}
