//! Trade direction, resolved trade intents, and per-widget direction
//! policies.
//!
//! The four widget variants (swap, buy, sell, pair-exchange) share one
//! orchestrator; everything variant-specific is captured here as data: which
//! directions route to which gateway primitive, which side starts seeded
//! with the native coin, and whether dependent views reload after a
//! successful trade.

use std::fmt;

use crate::domain::amount::QuoteSide;
use crate::domain::token::{TokenRegistry, TokenSlot, TokenSymbol};

/// Orientation of a trade relative to the chain's native coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    /// Paying with the native coin for a token.
    NativeToToken,
    /// Exchanging one token for another.
    TokenToToken,
    /// Selling a token back into the native coin.
    TokenToNative,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NativeToToken => write!(f, "native-to-token"),
            Self::TokenToToken => write!(f, "token-to-token"),
            Self::TokenToNative => write!(f, "token-to-native"),
        }
    }
}

/// The concrete gateway call a routed direction dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradePrimitive {
    /// Swap-pool trade paying in the native coin.
    SwapNativeForToken,
    /// Swap-pool trade between two tokens.
    SwapTokenForToken,
    /// Exchange-contract buy paying in the native coin.
    BuyTokenWithNative,
    /// Exchange-contract sell receiving the native coin.
    SellTokenForNative,
}

/// A resolved pair of selected tokens and the direction between them.
///
/// Recomputed whenever a selection changes; consumed at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeIntent {
    source: TokenSymbol,
    dest: TokenSymbol,
    direction: TradeDirection,
}

impl TradeIntent {
    /// Derive the intent for a pair of slots, if both are selected.
    ///
    /// Returns `None` while either side is unselected or when both sides
    /// name the same token (selection guards reject that earlier, so a
    /// `None` here means the caller's state is incomplete, not corrupt).
    #[must_use]
    pub fn derive(registry: &TokenRegistry, source: &TokenSlot, dest: &TokenSlot) -> Option<Self> {
        let source = source.symbol()?.clone();
        let dest = dest.symbol()?.clone();
        if source == dest {
            return None;
        }
        let direction = if registry.is_native(&source) {
            TradeDirection::NativeToToken
        } else if registry.is_native(&dest) {
            TradeDirection::TokenToNative
        } else {
            TradeDirection::TokenToToken
        };
        Some(Self {
            source,
            dest,
            direction,
        })
    }

    /// The pay-in token.
    #[must_use]
    pub fn source(&self) -> &TokenSymbol {
        &self.source
    }

    /// The receive token.
    #[must_use]
    pub fn dest(&self) -> &TokenSymbol {
        &self.dest
    }

    /// The trade's orientation.
    #[must_use]
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }
}

const SWAP_ROUTES: &[(TradeDirection, TradePrimitive)] = &[
    (TradeDirection::NativeToToken, TradePrimitive::SwapNativeForToken),
    (TradeDirection::TokenToToken, TradePrimitive::SwapTokenForToken),
];

const TRADE_BUY_ROUTES: &[(TradeDirection, TradePrimitive)] = &[(
    TradeDirection::NativeToToken,
    TradePrimitive::BuyTokenWithNative,
)];

const TRADE_SELL_ROUTES: &[(TradeDirection, TradePrimitive)] = &[(
    TradeDirection::TokenToNative,
    TradePrimitive::SellTokenForNative,
)];

const PAIR_EXCHANGE_ROUTES: &[(TradeDirection, TradePrimitive)] = &[
    (TradeDirection::NativeToToken, TradePrimitive::BuyTokenWithNative),
    (TradeDirection::TokenToNative, TradePrimitive::SellTokenForNative),
];

/// Everything variant-specific about one widget, as data.
///
/// A direction with no route is a user-visible rejection at submit time, not
/// a fallback to some other primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionPolicy {
    widget: &'static str,
    action_label: &'static str,
    routes: &'static [(TradeDirection, TradePrimitive)],
    reload_on_success: bool,
    native_seed: Option<QuoteSide>,
}

impl DirectionPolicy {
    /// The general swap widget: native or token in, token out.
    #[must_use]
    pub const fn swap() -> Self {
        Self {
            widget: "swap",
            action_label: "Swap",
            routes: SWAP_ROUTES,
            reload_on_success: false,
            native_seed: Some(QuoteSide::Source),
        }
    }

    /// The buy widget: native in, listed token out, reloads on success.
    #[must_use]
    pub const fn trade_buy() -> Self {
        Self {
            widget: "trade-buy",
            action_label: "Trade",
            routes: TRADE_BUY_ROUTES,
            reload_on_success: true,
            native_seed: Some(QuoteSide::Source),
        }
    }

    /// The sell widget: listed token in, native out.
    #[must_use]
    pub const fn trade_sell() -> Self {
        Self {
            widget: "trade-sell",
            action_label: "Trade",
            routes: TRADE_SELL_ROUTES,
            reload_on_success: false,
            native_seed: Some(QuoteSide::Dest),
        }
    }

    /// The pair-exchange modal: both tokens fixed by the surrounding view,
    /// buy or sell legs only, reloads on success.
    #[must_use]
    pub const fn pair_exchange() -> Self {
        Self {
            widget: "pair-exchange",
            action_label: "Trade",
            routes: PAIR_EXCHANGE_ROUTES,
            reload_on_success: true,
            native_seed: None,
        }
    }

    /// Short widget name for logs and rejection messages.
    #[must_use]
    pub const fn widget(&self) -> &'static str {
        self.widget
    }

    /// The ready-state button label.
    #[must_use]
    pub const fn action_label(&self) -> &'static str {
        self.action_label
    }

    /// Whether dependent views reload after a successful trade.
    #[must_use]
    pub const fn reload_on_success(&self) -> bool {
        self.reload_on_success
    }

    /// Which side, if any, starts seeded with the native coin.
    #[must_use]
    pub const fn native_seed(&self) -> Option<QuoteSide> {
        self.native_seed
    }

    /// Route a direction to its gateway primitive.
    #[must_use]
    pub fn primitive_for(&self, direction: TradeDirection) -> Option<TradePrimitive> {
        self.routes
            .iter()
            .find(|(routed, _)| *routed == direction)
            .map(|(_, primitive)| *primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TokenRegistry {
        TokenRegistry::wanchain_mainnet()
    }

    #[test]
    fn derive_requires_both_selections() {
        let registry = registry();
        assert!(TradeIntent::derive(
            &registry,
            &TokenSlot::selected("WAN"),
            &TokenSlot::Unselected
        )
        .is_none());
        assert!(TradeIntent::derive(
            &registry,
            &TokenSlot::Unselected,
            &TokenSlot::selected("wanETH")
        )
        .is_none());
    }

    #[test]
    fn derive_rejects_equal_pair() {
        let registry = registry();
        let slot = TokenSlot::selected("wanETH");
        assert!(TradeIntent::derive(&registry, &slot, &slot).is_none());
    }

    #[test]
    fn derive_classifies_directions() {
        let registry = registry();
        let wan = TokenSlot::selected("WAN");
        let eth = TokenSlot::selected("wanETH");
        let usdt = TokenSlot::selected("wanUSDT");

        let buy = TradeIntent::derive(&registry, &wan, &eth).unwrap();
        assert_eq!(buy.direction(), TradeDirection::NativeToToken);

        let sell = TradeIntent::derive(&registry, &eth, &wan).unwrap();
        assert_eq!(sell.direction(), TradeDirection::TokenToNative);

        let cross = TradeIntent::derive(&registry, &eth, &usdt).unwrap();
        assert_eq!(cross.direction(), TradeDirection::TokenToToken);
    }

    #[test]
    fn swap_policy_routes_and_gaps() {
        let policy = DirectionPolicy::swap();
        assert_eq!(
            policy.primitive_for(TradeDirection::NativeToToken),
            Some(TradePrimitive::SwapNativeForToken)
        );
        assert_eq!(
            policy.primitive_for(TradeDirection::TokenToToken),
            Some(TradePrimitive::SwapTokenForToken)
        );
        assert_eq!(policy.primitive_for(TradeDirection::TokenToNative), None);
        assert!(!policy.reload_on_success());
    }

    #[test]
    fn trade_policies_route_single_directions() {
        let buy = DirectionPolicy::trade_buy();
        assert_eq!(
            buy.primitive_for(TradeDirection::NativeToToken),
            Some(TradePrimitive::BuyTokenWithNative)
        );
        assert_eq!(buy.primitive_for(TradeDirection::TokenToNative), None);
        assert!(buy.reload_on_success());

        let sell = DirectionPolicy::trade_sell();
        assert_eq!(
            sell.primitive_for(TradeDirection::TokenToNative),
            Some(TradePrimitive::SellTokenForNative)
        );
        assert_eq!(sell.primitive_for(TradeDirection::NativeToToken), None);
        assert_eq!(sell.native_seed(), Some(QuoteSide::Dest));
    }

    #[test]
    fn pair_exchange_disallows_token_to_token() {
        let policy = DirectionPolicy::pair_exchange();
        assert_eq!(policy.primitive_for(TradeDirection::TokenToToken), None);
        assert_eq!(
            policy.primitive_for(TradeDirection::NativeToToken),
            Some(TradePrimitive::BuyTokenWithNative)
        );
        assert_eq!(policy.native_seed(), None);
    }
}
