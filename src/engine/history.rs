//! Settled-trade history resolved into display form.
//!
//! The exchange contract reports raw records keyed by contract address and
//! smallest units; this service resolves them against the registry so hosts
//! can render symbols and human amounts directly, and caches the resolved
//! list until told otherwise.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::amount::from_base_units;
use crate::domain::token::TokenRegistry;
use crate::error::{Error, Result};
use crate::port::gateway::{ChainGateway, TradeRecord};

/// Placeholder symbol for addresses the registry does not know.
const UNKNOWN_TOKEN: &str = "Unknown";

/// One settled trade, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeEntry {
    /// Address of the account that traded.
    pub user: String,
    /// Symbol paid in, or `Unknown`.
    pub from_symbol: String,
    /// Symbol received, or `Unknown`.
    pub to_symbol: String,
    /// Human amount paid in.
    pub amount_in: Decimal,
    /// Human amount received.
    pub amount_out: Decimal,
}

/// Fetches, resolves, and caches the settled-trade list.
pub struct TradeHistoryService {
    gateway: Arc<dyn ChainGateway>,
    registry: Arc<TokenRegistry>,
    cache: RwLock<Option<Vec<TradeEntry>>>,
}

impl TradeHistoryService {
    /// Create a history service over a gateway and registry.
    pub fn new(gateway: Arc<dyn ChainGateway>, registry: Arc<TokenRegistry>) -> Self {
        Self {
            gateway,
            registry,
            cache: RwLock::new(None),
        }
    }

    /// Fetch the full history from the chain and rebuild the cache.
    ///
    /// Unknown token addresses resolve to `Unknown` with native precision;
    /// amounts too large to render resolve to zero. Neither drops the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChainCallFailed`] when the gateway cannot deliver
    /// the records; the previous cache is kept in that case.
    pub async fn refresh(&self) -> Result<usize> {
        let records = self
            .gateway
            .fetch_trade_history()
            .await
            .map_err(|err| Error::ChainCallFailed {
                reason: err.human_message(),
            })?;
        let entries: Vec<TradeEntry> = records
            .into_iter()
            .map(|record| self.resolve(record))
            .collect();
        let count = entries.len();
        debug!(trades = count, "Trade history refreshed");
        *self.cache.write() = Some(entries);
        Ok(count)
    }

    fn resolve(&self, record: TradeRecord) -> TradeEntry {
        let (from_symbol, from_decimals) = self.describe(&record.from_token);
        let (to_symbol, to_decimals) = self.describe(&record.to_token);
        let amount_in = from_base_units(record.amount_in, from_decimals).unwrap_or_else(|err| {
            warn!(token = %from_symbol, error = %err, "Unrenderable trade amount");
            Decimal::ZERO
        });
        let amount_out = from_base_units(record.amount_out, to_decimals).unwrap_or_else(|err| {
            warn!(token = %to_symbol, error = %err, "Unrenderable trade amount");
            Decimal::ZERO
        });
        TradeEntry {
            user: record.user,
            from_symbol,
            to_symbol,
            amount_in,
            amount_out,
        }
    }

    fn describe(&self, address: &alloy_primitives::Address) -> (String, u8) {
        match self.registry.meta_for_address(address) {
            Some(meta) => (meta.symbol().to_string(), meta.decimals()),
            None => (UNKNOWN_TOKEN.to_string(), 18),
        }
    }

    /// The cached entries, empty before the first successful refresh.
    #[must_use]
    pub fn entries(&self) -> Vec<TradeEntry> {
        self.cache.read().clone().unwrap_or_default()
    }

    /// Whether a refresh has succeeded yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Drop the cache; the next render should refresh first.
    pub fn invalidate(&self) {
        *self.cache.write() = None;
    }
}
