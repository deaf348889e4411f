//! Engine services - the flows behind the widgets.
//!
//! Everything here composes domain logic with the ports: the quote engine
//! derives the passive amount field, the orchestrator runs a widget's whole
//! lifecycle, and the history service resolves settled trades for display.

pub mod history;
pub mod orchestrator;
pub mod quote;

pub use history::{TradeEntry, TradeHistoryService};
pub use orchestrator::{ButtonState, Connection, QuoteTicket, SubmitOutcome, TradeOrchestrator};
pub use quote::{QuoteEngine, QuoteRequest, QuoteValue};
