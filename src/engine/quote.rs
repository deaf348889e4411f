//! Quote derivation for the passive side of a trading pair.
//!
//! One field is authoritative (the user is typing in it); the counterpart is
//! derived by asking the pool for its best output. Pool failures are a
//! display concern, not a flow concern: whatever goes wrong on the wire, the
//! derived field reads `0` and the widget stays usable.

use std::sync::Arc;

use tracing::debug;

use crate::domain::amount::{format_base_units, parse_amount, to_base_units, QuoteSide};
use crate::domain::token::{TokenRegistry, TokenSymbol};
use crate::error::Result;
use crate::port::gateway::ChainGateway;

/// Literal the derived field shows when a quote cannot be produced.
const ZERO_QUOTE: &str = "0";

/// Snapshot of one quote request, taken when the user edits a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Source-side token of the pair.
    pub source: TokenSymbol,
    /// Destination-side token of the pair.
    pub dest: TokenSymbol,
    /// The side the amount belongs to (the authoritative side).
    pub side: QuoteSide,
    /// The authoritative amount as typed.
    pub raw_amount: String,
}

/// What a finished quote does to the derived field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValue {
    /// Blank the derived field.
    Cleared,
    /// Display this amount in the derived field.
    Amount(String),
}

/// Derives the passive field of a pair from the authoritative one.
pub struct QuoteEngine {
    registry: Arc<TokenRegistry>,
    gateway: Arc<dyn ChainGateway>,
}

impl QuoteEngine {
    /// Create a quote engine over a registry and gateway.
    pub fn new(registry: Arc<TokenRegistry>, gateway: Arc<dyn ChainGateway>) -> Self {
        Self { registry, gateway }
    }

    /// Produce the derived-field value for `request`.
    ///
    /// Editing the source quotes `source -> dest`; editing the destination
    /// quotes the inverse leg `dest -> source`. Input is scaled by the
    /// authoritative token's precision and the result formatted with the
    /// counterpart's.
    ///
    /// Blank or unparseable input clears the derived field. Anything the
    /// pool cannot price (a failed call, an unscalable amount, an oversized
    /// result) collapses to the literal `0`.
    ///
    /// # Errors
    ///
    /// Only unknown token symbols surface as errors; the caller blanks the
    /// derived field and blocks the action on those.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteValue> {
        let amount = match parse_amount(&request.raw_amount) {
            Ok(Some(amount)) => amount,
            Ok(None) => return Ok(QuoteValue::Cleared),
            Err(err) => {
                debug!(error = %err, "Unparseable quote input");
                return Ok(QuoteValue::Cleared);
            }
        };

        let source = self.registry.lookup(&request.source)?;
        let dest = self.registry.lookup(&request.dest)?;
        let (quote_in, quote_out) = match request.side {
            QuoteSide::Source => (source, dest),
            QuoteSide::Dest => (dest, source),
        };

        let units = match to_base_units(amount, quote_in.decimals()) {
            Ok(units) => units,
            Err(err) => {
                debug!(error = %err, "Quote input does not scale");
                return Ok(QuoteValue::Amount(ZERO_QUOTE.to_string()));
            }
        };

        match self
            .gateway
            .quote_best_output(quote_in.address(), quote_out.address(), units)
            .await
        {
            Ok(output) => match format_base_units(output, quote_out.decimals()) {
                Ok(display) => Ok(QuoteValue::Amount(display)),
                Err(err) => {
                    debug!(error = %err, "Quoted output does not scale");
                    Ok(QuoteValue::Amount(ZERO_QUOTE.to_string()))
                }
            },
            Err(err) => {
                debug!(
                    input = %quote_in.symbol(),
                    output = %quote_out.symbol(),
                    error = %err,
                    "Quote call failed"
                );
                Ok(QuoteValue::Amount(ZERO_QUOTE.to_string()))
            }
        }
    }
}
