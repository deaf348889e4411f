//! The trade orchestrator - one state machine behind every swap widget.
//!
//! A widget is the orchestrator plus a [`DirectionPolicy`]: the policy says
//! which trade directions the widget supports, which primitive serves each,
//! and how the widget is seeded and labelled. Everything else - wallet
//! connection, pair selection, quote sequencing, the allowance override, the
//! single action button - behaves identically across widgets.
//!
//! Async boundaries are explicit. Editing a field returns a [`QuoteTicket`]
//! instead of blocking on the pool; the host resolves the ticket with
//! [`TradeOrchestrator::refresh_quote`] whenever it likes, and stale tickets
//! are discarded by sequence number when they land.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{debug, info, warn};

use crate::domain::amount::{parse_amount, to_base_units, AmountPair, QuoteSide};
use crate::domain::error::DomainError;
use crate::domain::intent::{DirectionPolicy, TradeDirection, TradeIntent, TradePrimitive};
use crate::domain::token::{TokenRegistry, TokenSlot, TokenSymbol};
use crate::engine::quote::{QuoteEngine, QuoteRequest, QuoteValue};
use crate::error::{Error, Result};
use crate::port::gateway::ChainGateway;
use crate::port::notifier::NotifierRegistry;
use crate::port::wallet::{Account, ChainSpec, WalletSession};

/// Reported when the source slot cannot be resolved at submit time.
const INVALID_SOURCE_TOKEN: &str = "Invalid source token selected";
/// Reported when the destination slot cannot be resolved at submit time.
const INVALID_DEST_TOKEN: &str = "Invalid destination token selected";
/// Reported when a transaction settled without returning a hash.
const NO_RECEIPT_MESSAGE: &str = "No receipt available";

/// Wallet connection state of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connection {
    /// No wallet connected yet.
    #[default]
    Disconnected,
    /// Connected on the expected chain as this account.
    Connected(Account),
}

impl Connection {
    /// Whether a wallet is connected.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// The connected account, if any.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        match self {
            Self::Disconnected => None,
            Self::Connected(account) => Some(account),
        }
    }
}

/// What the widget's single action button should present.
///
/// Derivation order is fixed: connection, then amounts, then the allowance
/// override. A disconnected widget always asks for a wallet first, whatever
/// else is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Not connected; the action connects a wallet.
    ConnectWallet,
    /// Connected but at least one amount field is blank.
    EnterAmount,
    /// A submit found the allowance short; the action raises it.
    NeedsAllowance,
    /// The action submits the trade.
    ReadyToTrade,
}

/// Claim ticket for an in-flight quote.
///
/// Carries the sequence number current when the edit happened; by the time
/// the host resolves the ticket the widget may have moved on, and
/// [`TradeOrchestrator::apply_quote`] only honors tickets whose sequence is
/// still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteTicket {
    seq: u64,
    request: QuoteRequest,
}

impl QuoteTicket {
    /// The quote request snapshot this ticket was issued for.
    #[must_use]
    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }
}

/// Terminal result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The button was inert: disconnected, amounts missing, or already busy.
    Inert,
    /// Rejected before any chain call; `message` was reported.
    Rejected {
        /// The message shown to the user.
        message: String,
    },
    /// The allowance came back short; the widget is now in override mode.
    NeedsAllowance,
    /// An allowance increase settled.
    AllowanceSettled {
        /// Whether the increase confirmed on chain.
        success: bool,
    },
    /// A trade settled.
    TradeSettled {
        /// Whether the trade confirmed on chain.
        success: bool,
    },
}

/// State machine driving one swap widget.
pub struct TradeOrchestrator {
    policy: DirectionPolicy,
    registry: Arc<TokenRegistry>,
    gateway: Arc<dyn ChainGateway>,
    quoter: QuoteEngine,
    notifiers: Arc<NotifierRegistry>,
    chain: ChainSpec,
    connection: Connection,
    source_token: TokenSlot,
    dest_token: TokenSlot,
    amounts: AmountPair,
    authoritative: QuoteSide,
    intent: Option<TradeIntent>,
    quote_seq: u64,
    loading_quote: bool,
    pending_tx: bool,
    allowance_override: bool,
}

impl TradeOrchestrator {
    /// Create a widget state machine, seeding the native side the policy
    /// names.
    pub fn new(
        policy: DirectionPolicy,
        registry: Arc<TokenRegistry>,
        gateway: Arc<dyn ChainGateway>,
        notifiers: Arc<NotifierRegistry>,
        chain: ChainSpec,
    ) -> Self {
        let mut source_token = TokenSlot::default();
        let mut dest_token = TokenSlot::default();
        match policy.native_seed() {
            Some(QuoteSide::Source) => {
                source_token = TokenSlot::Selected(registry.native_symbol().clone());
            }
            Some(QuoteSide::Dest) => {
                dest_token = TokenSlot::Selected(registry.native_symbol().clone());
            }
            None => {}
        }
        let intent = TradeIntent::derive(&registry, &source_token, &dest_token);
        let quoter = QuoteEngine::new(Arc::clone(&registry), Arc::clone(&gateway));
        Self {
            policy,
            registry,
            gateway,
            quoter,
            notifiers,
            chain,
            connection: Connection::Disconnected,
            source_token,
            dest_token,
            amounts: AmountPair::new(),
            authoritative: QuoteSide::Source,
            intent,
            quote_seq: 0,
            loading_quote: false,
            pending_tx: false,
            allowance_override: false,
        }
    }

    // ---- Wallet connection ----

    /// Connect a wallet, verifying (and if needed switching) its chain.
    ///
    /// The account is stored only once the wallet sits on the expected
    /// chain; a refused switch leaves the widget disconnected. Returns
    /// whether the widget ended up connected.
    pub async fn connect(&mut self, wallet: &dyn WalletSession) -> bool {
        let accounts = match wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(err) => {
                warn!(error = %err, "Wallet refused the account request");
                return false;
            }
        };
        let Some(account) = accounts.into_iter().next() else {
            warn!("Wallet returned no accounts");
            return false;
        };

        match wallet.current_chain_id().await {
            Ok(id) if id == self.chain.chain_id => {}
            Ok(id) => {
                debug!(
                    connected = id,
                    expected = self.chain.chain_id,
                    "Asking the wallet to switch chains"
                );
                if let Err(err) = wallet.switch_or_add_chain(&self.chain).await {
                    warn!(error = %err, "Chain switch rejected");
                    return false;
                }
            }
            Err(err) => {
                warn!(error = %err, "Could not read the wallet chain id");
                return false;
            }
        }

        info!(account = %account, chain_id = self.chain.chain_id, "Wallet connected");
        self.connection = Connection::Connected(account);
        true
    }

    // ---- Pair and amount editing ----

    /// Record a keystroke in the source amount field.
    pub fn edit_source(&mut self, raw: &str) -> Option<QuoteTicket> {
        self.edit(QuoteSide::Source, raw)
    }

    /// Record a keystroke in the destination amount field.
    pub fn edit_dest(&mut self, raw: &str) -> Option<QuoteTicket> {
        self.edit(QuoteSide::Dest, raw)
    }

    /// The edited side becomes authoritative; any ticket still in flight is
    /// invalidated by the sequence bump before the new one is issued.
    fn edit(&mut self, side: QuoteSide, raw: &str) -> Option<QuoteTicket> {
        let trimmed = raw.trim().to_string();
        self.allowance_override = false;
        self.authoritative = side;
        self.quote_seq += 1;
        self.loading_quote = false;
        self.amounts.set(side, trimmed.clone());

        if trimmed.is_empty() {
            // Clearing one field clears its derived counterpart too.
            self.amounts.clear();
            return None;
        }
        let (source, dest) = self.selected_pair()?;
        if !matches!(parse_amount(&trimmed), Ok(Some(_))) {
            self.amounts.set(side.counterpart(), "");
            return None;
        }

        self.loading_quote = true;
        Some(QuoteTicket {
            seq: self.quote_seq,
            request: QuoteRequest {
                source,
                dest,
                side,
                raw_amount: trimmed,
            },
        })
    }

    /// Choose the source token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateSelection`] when the symbol already
    /// occupies the destination slot.
    pub fn select_source(&mut self, symbol: impl Into<TokenSymbol>) -> Result<Option<QuoteTicket>> {
        self.select(QuoteSide::Source, symbol.into())
    }

    /// Choose the destination token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateSelection`] when the symbol already
    /// occupies the source slot.
    pub fn select_dest(&mut self, symbol: impl Into<TokenSymbol>) -> Result<Option<QuoteTicket>> {
        self.select(QuoteSide::Dest, symbol.into())
    }

    fn select(&mut self, side: QuoteSide, symbol: TokenSymbol) -> Result<Option<QuoteTicket>> {
        let other = match side {
            QuoteSide::Source => &self.dest_token,
            QuoteSide::Dest => &self.source_token,
        };
        if other.symbol() == Some(&symbol) {
            return Err(DomainError::DuplicateSelection {
                symbol: symbol.to_string(),
            }
            .into());
        }
        match side {
            QuoteSide::Source => self.source_token = TokenSlot::Selected(symbol),
            QuoteSide::Dest => self.dest_token = TokenSlot::Selected(symbol),
        }
        Ok(self.after_selection_changed(side))
    }

    /// A changed selection keeps the untouched side's amount and re-derives
    /// the changed side's, so the ticket is issued for the counterpart.
    fn after_selection_changed(&mut self, changed: QuoteSide) -> Option<QuoteTicket> {
        self.allowance_override = false;
        self.refresh_intent();
        self.quote_seq += 1;
        self.loading_quote = false;

        let authoritative = changed.counterpart();
        let raw = self.amounts.get(authoritative).to_string();
        if raw.is_empty() {
            return None;
        }
        let (source, dest) = self.selected_pair()?;
        if !matches!(parse_amount(&raw), Ok(Some(_))) {
            self.amounts.set(changed, "");
            return None;
        }

        self.authoritative = authoritative;
        self.loading_quote = true;
        Some(QuoteTicket {
            seq: self.quote_seq,
            request: QuoteRequest {
                source,
                dest,
                side: authoritative,
                raw_amount: raw,
            },
        })
    }

    /// Install a full pair at once, resetting amounts and overrides.
    ///
    /// Pair-driven widgets use this when the host hands them a market to
    /// show; it never issues a quote ticket.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateSelection`] when both sides name the
    /// same symbol.
    pub fn set_pair(
        &mut self,
        source: impl Into<TokenSymbol>,
        dest: impl Into<TokenSymbol>,
    ) -> Result<()> {
        let source = source.into();
        let dest = dest.into();
        if source == dest {
            return Err(DomainError::DuplicateSelection {
                symbol: source.to_string(),
            }
            .into());
        }
        self.source_token = TokenSlot::Selected(source);
        self.dest_token = TokenSlot::Selected(dest);
        self.amounts.clear();
        self.allowance_override = false;
        self.loading_quote = false;
        self.quote_seq += 1;
        self.refresh_intent();
        Ok(())
    }

    /// Swap source and destination in place, amounts included.
    ///
    /// No quote is issued: the previously derived amount simply becomes the
    /// authoritative one on the other side, so reversing twice restores the
    /// exact prior state. Ignored while a transaction is pending.
    pub fn reverse(&mut self) {
        if self.pending_tx {
            debug!("Ignoring reverse while a transaction is pending");
            return;
        }
        std::mem::swap(&mut self.source_token, &mut self.dest_token);
        self.amounts.swap();
        self.authoritative = self.authoritative.counterpart();
        self.allowance_override = false;
        self.loading_quote = false;
        self.quote_seq += 1;
        self.refresh_intent();
    }

    fn refresh_intent(&mut self) {
        self.intent = TradeIntent::derive(&self.registry, &self.source_token, &self.dest_token);
    }

    fn selected_pair(&self) -> Option<(TokenSymbol, TokenSymbol)> {
        Some((
            self.source_token.symbol()?.clone(),
            self.dest_token.symbol()?.clone(),
        ))
    }

    // ---- Quote resolution ----

    /// Resolve a ticket against the pool without touching widget state.
    pub async fn fetch_quote(&self, ticket: &QuoteTicket) -> QuoteValue {
        match self.quoter.quote(&ticket.request).await {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Quote failed outside the pool path");
                QuoteValue::Cleared
            }
        }
    }

    /// Apply a resolved quote to the derived field.
    ///
    /// Returns false (and changes nothing) when the ticket's sequence is no
    /// longer current; the edit, selection, or reversal that bumped it owns
    /// the fields now.
    pub fn apply_quote(&mut self, ticket: &QuoteTicket, value: QuoteValue) -> bool {
        if ticket.seq != self.quote_seq {
            debug!(
                ticket = ticket.seq,
                current = self.quote_seq,
                "Discarding stale quote"
            );
            return false;
        }
        self.loading_quote = false;
        let derived = ticket.request.side.counterpart();
        match value {
            QuoteValue::Cleared => self.amounts.set(derived, ""),
            QuoteValue::Amount(display) => self.amounts.set(derived, display),
        }
        true
    }

    /// Fetch and apply in one step. Returns whether the quote landed.
    pub async fn refresh_quote(&mut self, ticket: QuoteTicket) -> bool {
        let value = self.fetch_quote(&ticket).await;
        self.apply_quote(&ticket, value)
    }

    // ---- Action button ----

    /// Derive what the single action button currently does.
    #[must_use]
    pub fn button_state(&self) -> ButtonState {
        if !self.connection.is_connected() {
            return ButtonState::ConnectWallet;
        }
        if self.amounts.any_empty() {
            return ButtonState::EnterAmount;
        }
        if self.allowance_override {
            return ButtonState::NeedsAllowance;
        }
        ButtonState::ReadyToTrade
    }

    /// The label for the current button state.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.button_state() {
            ButtonState::ConnectWallet => "Connect Wallet",
            ButtonState::EnterAmount => "Enter Amount",
            ButtonState::NeedsAllowance => "Increase Allowance",
            ButtonState::ReadyToTrade => self.policy.action_label(),
        }
    }

    // ---- Submit ----

    /// Press the action button.
    ///
    /// Inert states return immediately. In override mode this raises the
    /// allowance; otherwise it validates, checks the allowance where the
    /// source is a token, and dispatches the policy's primitive for the
    /// derived direction. Every rejection and settlement is reported through
    /// the notifier registry before it is returned.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.pending_tx {
            debug!("Ignoring submit while a transaction is pending");
            return SubmitOutcome::Inert;
        }
        match self.button_state() {
            ButtonState::ConnectWallet | ButtonState::EnterAmount => SubmitOutcome::Inert,
            ButtonState::NeedsAllowance => self.submit_allowance_increase().await,
            ButtonState::ReadyToTrade => self.submit_trade().await,
        }
    }

    async fn submit_trade(&mut self) -> SubmitOutcome {
        // Validation is synchronous; nothing below touches the chain until
        // the whole submission is known to be dispatchable.
        let Some(intent) = self.intent.clone() else {
            return self.reject(INVALID_SOURCE_TOKEN);
        };
        let direction = intent.direction();
        let Some(primitive) = self.policy.primitive_for(direction) else {
            let message = Error::DisallowedDirection {
                widget: self.policy.widget(),
                direction,
            }
            .to_string();
            return self.reject(&message);
        };
        let Some(source_meta) = self.registry.get(intent.source()).cloned() else {
            return self.reject(INVALID_SOURCE_TOKEN);
        };
        let Some(dest_meta) = self.registry.get(intent.dest()).cloned() else {
            return self.reject(INVALID_DEST_TOKEN);
        };
        let raw = self.amounts.get(QuoteSide::Source).to_string();
        let amount = match parse_amount(&raw) {
            Ok(Some(amount)) => amount,
            Ok(None) => return SubmitOutcome::Inert,
            Err(err) => return self.reject(&err.to_string()),
        };
        let units = match primitive {
            TradePrimitive::SwapTokenForToken | TradePrimitive::SellTokenForNative => {
                match to_base_units(amount, source_meta.decimals()) {
                    Ok(units) => units,
                    Err(err) => return self.reject(&err.to_string()),
                }
            }
            _ => U256::ZERO,
        };
        let Connection::Connected(account) = self.connection.clone() else {
            return SubmitOutcome::Inert;
        };

        self.pending_tx = true;
        self.notifiers.report_pending();

        // Native pay-ins need no ERC-20 approval.
        if direction != TradeDirection::NativeToToken {
            match self
                .gateway
                .check_allowance(&account, source_meta.address(), amount)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    self.allowance_override = true;
                    self.pending_tx = false;
                    self.notifiers
                        .report_error(Error::InsufficientAllowance.to_string());
                    return SubmitOutcome::NeedsAllowance;
                }
                Err(err) => {
                    self.pending_tx = false;
                    let message = err.human_message();
                    warn!(token = %source_meta.symbol(), error = %err, "Allowance check failed");
                    self.notifiers.report_error(message.clone());
                    return SubmitOutcome::Rejected { message };
                }
            }
        }

        let settle = match primitive {
            TradePrimitive::SwapNativeForToken => {
                self.gateway
                    .swap_native_for_token(dest_meta.address(), amount)
                    .await
            }
            TradePrimitive::BuyTokenWithNative => {
                self.gateway
                    .buy_token_with_native(dest_meta.address(), amount)
                    .await
            }
            TradePrimitive::SwapTokenForToken => {
                self.gateway
                    .swap_token_for_token(source_meta.address(), dest_meta.address(), units)
                    .await
            }
            TradePrimitive::SellTokenForNative => {
                self.gateway
                    .sell_token_for_native(source_meta.address(), units)
                    .await
            }
        };
        self.pending_tx = false;

        match settle {
            Ok(receipt) if receipt.has_confirmation() => {
                info!(
                    widget = self.policy.widget(),
                    source = %intent.source(),
                    dest = %intent.dest(),
                    tx = receipt.transaction_hash.as_deref().unwrap_or_default(),
                    "Trade confirmed"
                );
                self.notifiers
                    .report_success(self.policy.reload_on_success());
                SubmitOutcome::TradeSettled { success: true }
            }
            Ok(_) => {
                warn!(widget = self.policy.widget(), "Trade returned no receipt");
                self.notifiers.report_error(NO_RECEIPT_MESSAGE);
                SubmitOutcome::TradeSettled { success: false }
            }
            Err(err) => {
                warn!(widget = self.policy.widget(), error = %err, "Trade failed");
                self.notifiers.report_error(err.human_message());
                SubmitOutcome::TradeSettled { success: false }
            }
        }
    }

    async fn submit_allowance_increase(&mut self) -> SubmitOutcome {
        let meta = match self
            .source_token
            .symbol()
            .and_then(|symbol| self.registry.get(symbol))
        {
            Some(meta) => meta.clone(),
            None => return self.reject(INVALID_SOURCE_TOKEN),
        };
        let raw = self.amounts.get(QuoteSide::Source).to_string();
        let amount = match parse_amount(&raw) {
            Ok(Some(amount)) => amount,
            Ok(None) => return SubmitOutcome::Inert,
            Err(err) => return self.reject(&err.to_string()),
        };

        self.pending_tx = true;
        self.notifiers.report_pending();
        let settle = self.gateway.increase_allowance(meta.address(), amount).await;
        self.pending_tx = false;

        match settle {
            Ok(receipt) if receipt.has_confirmation() => {
                info!(token = %meta.symbol(), amount = %amount, "Allowance increased");
                self.allowance_override = false;
                self.notifiers.report_success(false);
                SubmitOutcome::AllowanceSettled { success: true }
            }
            Ok(_) => {
                // The override stays set so the user can retry the increase.
                self.notifiers.report_error(NO_RECEIPT_MESSAGE);
                SubmitOutcome::AllowanceSettled { success: false }
            }
            Err(err) => {
                warn!(token = %meta.symbol(), error = %err, "Allowance increase failed");
                self.notifiers.report_error(err.human_message());
                SubmitOutcome::AllowanceSettled { success: false }
            }
        }
    }

    fn reject(&self, message: &str) -> SubmitOutcome {
        self.notifiers.report_error(message);
        SubmitOutcome::Rejected {
            message: message.to_string(),
        }
    }

    // ---- Accessors ----

    /// The policy this widget was built with.
    #[must_use]
    pub const fn policy(&self) -> &DirectionPolicy {
        &self.policy
    }

    /// Current wallet connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The source-side token slot.
    #[must_use]
    pub const fn source_token(&self) -> &TokenSlot {
        &self.source_token
    }

    /// The destination-side token slot.
    #[must_use]
    pub const fn dest_token(&self) -> &TokenSlot {
        &self.dest_token
    }

    /// The source amount field as displayed.
    #[must_use]
    pub fn source_amount(&self) -> &str {
        self.amounts.get(QuoteSide::Source)
    }

    /// The destination amount field as displayed.
    #[must_use]
    pub fn dest_amount(&self) -> &str {
        self.amounts.get(QuoteSide::Dest)
    }

    /// Which side the user last edited.
    #[must_use]
    pub const fn authoritative_side(&self) -> QuoteSide {
        self.authoritative
    }

    /// The derived trade intent, when both sides are selected and distinct.
    #[must_use]
    pub const fn intent(&self) -> Option<&TradeIntent> {
        self.intent.as_ref()
    }

    /// Whether a quote ticket is outstanding.
    #[must_use]
    pub const fn is_loading_quote(&self) -> bool {
        self.loading_quote
    }

    /// Whether a transaction is in flight.
    #[must_use]
    pub const fn is_tx_pending(&self) -> bool {
        self.pending_tx
    }

    /// Whether the widget is in allowance override mode.
    #[must_use]
    pub const fn needs_allowance(&self) -> bool {
        self.allowance_override
    }

    /// The chain this widget expects wallets to sit on.
    #[must_use]
    pub const fn chain(&self) -> &ChainSpec {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::gateway::MockChainGateway;

    fn orchestrator(policy: DirectionPolicy) -> TradeOrchestrator {
        TradeOrchestrator::new(
            policy,
            Arc::new(TokenRegistry::wanchain_mainnet()),
            Arc::new(MockChainGateway::new()),
            Arc::new(NotifierRegistry::new()),
            ChainSpec::wanchain_mainnet(),
        )
    }

    #[test]
    fn swap_widget_seeds_native_source() {
        let widget = orchestrator(DirectionPolicy::swap());
        assert_eq!(
            widget.source_token().symbol().map(TokenSymbol::as_str),
            Some("WAN")
        );
        assert!(!widget.dest_token().is_selected());
        assert!(widget.intent().is_none());
    }

    #[test]
    fn sell_widget_seeds_native_dest() {
        let widget = orchestrator(DirectionPolicy::trade_sell());
        assert!(!widget.source_token().is_selected());
        assert_eq!(
            widget.dest_token().symbol().map(TokenSymbol::as_str),
            Some("WAN")
        );
    }

    #[test]
    fn pair_widget_starts_unseeded() {
        let widget = orchestrator(DirectionPolicy::pair_exchange());
        assert!(!widget.source_token().is_selected());
        assert!(!widget.dest_token().is_selected());
    }

    #[test]
    fn disconnected_widget_always_asks_for_a_wallet() {
        let mut widget = orchestrator(DirectionPolicy::swap());
        widget.select_dest("wanUSDT").unwrap();
        widget.edit_source("10");
        assert_eq!(widget.button_state(), ButtonState::ConnectWallet);
        assert_eq!(widget.button_label(), "Connect Wallet");
    }

    #[test]
    fn button_label_follows_policy_action() {
        let mut swap = orchestrator(DirectionPolicy::swap());
        swap.connection = Connection::Connected(Account::new("0xabc"));
        swap.select_dest("wanUSDT").unwrap();
        assert_eq!(swap.button_label(), "Enter Amount");
        swap.amounts.set(QuoteSide::Source, "1");
        swap.amounts.set(QuoteSide::Dest, "2");
        assert_eq!(swap.button_label(), "Swap");

        let mut buy = orchestrator(DirectionPolicy::trade_buy());
        buy.connection = Connection::Connected(Account::new("0xabc"));
        buy.select_dest("wanUSDT").unwrap();
        buy.amounts.set(QuoteSide::Source, "1");
        buy.amounts.set(QuoteSide::Dest, "2");
        assert_eq!(buy.button_label(), "Trade");
    }

    #[test]
    fn editing_tracks_the_authoritative_side() {
        let mut widget = orchestrator(DirectionPolicy::swap());
        widget.select_dest("wanUSDT").unwrap();
        let ticket = widget.edit_dest("5");
        assert!(ticket.is_some());
        assert_eq!(widget.authoritative_side(), QuoteSide::Dest);
        assert_eq!(ticket.unwrap().request().side, QuoteSide::Dest);
    }

    #[test]
    fn editing_without_a_full_pair_issues_no_ticket() {
        let mut widget = orchestrator(DirectionPolicy::swap());
        assert!(widget.edit_source("10").is_none());
        assert!(!widget.is_loading_quote());
        assert_eq!(widget.source_amount(), "10");
    }

    #[test]
    fn clearing_a_field_clears_its_counterpart() {
        let mut widget = orchestrator(DirectionPolicy::swap());
        widget.select_dest("wanUSDT").unwrap();
        widget.edit_source("10");
        widget.amounts.set(QuoteSide::Dest, "9.99");
        assert!(widget.edit_source("").is_none());
        assert_eq!(widget.source_amount(), "");
        assert_eq!(widget.dest_amount(), "");
    }

    #[test]
    fn unparseable_input_blanks_the_derived_field() {
        let mut widget = orchestrator(DirectionPolicy::swap());
        widget.select_dest("wanUSDT").unwrap();
        widget.edit_source("10");
        widget.amounts.set(QuoteSide::Dest, "9.99");
        assert!(widget.edit_source("1..0").is_none());
        assert_eq!(widget.source_amount(), "1..0");
        assert_eq!(widget.dest_amount(), "");
    }

    #[test]
    fn set_pair_rejects_equal_symbols() {
        let mut widget = orchestrator(DirectionPolicy::pair_exchange());
        let result = widget.set_pair("wanETH", "wanETH");
        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::DuplicateSelection { .. }))
        ));
    }

    #[test]
    fn set_pair_resets_amounts_and_intent() {
        let mut widget = orchestrator(DirectionPolicy::pair_exchange());
        widget.amounts.set(QuoteSide::Source, "3");
        widget.set_pair("WAN", "wanETH").unwrap();
        assert_eq!(widget.source_amount(), "");
        assert_eq!(
            widget.intent().map(TradeIntent::direction),
            Some(TradeDirection::NativeToToken)
        );
    }
}
