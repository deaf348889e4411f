//! Token identity, selection slots, and the token registry.
//!
//! The registry is the single source of truth for symbol resolution. It is
//! built once (from configuration or the compiled-in Wanchain table) and
//! treated as immutable for the lifetime of the process.

use std::collections::HashMap;
use std::fmt;

use alloy_primitives::{address, Address};

use crate::domain::error::DomainError;

/// Maximum token precision the amount converters support.
pub const MAX_TOKEN_DECIMALS: u8 = 18;

/// Token symbol - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSymbol(String);

impl TokenSymbol {
    /// Create a new TokenSymbol from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenSymbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TokenSymbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One side of a trading pair as the user sees it.
///
/// A freshly mounted widget starts with at least one side unselected; every
/// registry access must go through [`TokenSlot::symbol`] first, so the
/// unselected case is handled where it occurs instead of leaking a sentinel
/// string into lookups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenSlot {
    /// No token chosen yet.
    #[default]
    Unselected,
    /// A concrete token chosen from the registry.
    Selected(TokenSymbol),
}

impl TokenSlot {
    /// Create a selected slot.
    pub fn selected(symbol: impl Into<TokenSymbol>) -> Self {
        Self::Selected(symbol.into())
    }

    /// The selected symbol, if any.
    #[must_use]
    pub fn symbol(&self) -> Option<&TokenSymbol> {
        match self {
            Self::Unselected => None,
            Self::Selected(symbol) => Some(symbol),
        }
    }

    /// Whether a token has been chosen.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

impl From<TokenSymbol> for TokenSlot {
    fn from(symbol: TokenSymbol) -> Self {
        Self::Selected(symbol)
    }
}

/// Chain-level facts about one tradeable token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMeta {
    symbol: TokenSymbol,
    address: Address,
    decimals: u8,
}

impl TokenMeta {
    /// Create token metadata, validating the precision.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DecimalsOutOfRange`] when `decimals` exceeds
    /// [`MAX_TOKEN_DECIMALS`].
    pub fn try_new(
        symbol: impl Into<TokenSymbol>,
        address: Address,
        decimals: u8,
    ) -> Result<Self, DomainError> {
        let symbol = symbol.into();
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(DomainError::DecimalsOutOfRange {
                symbol: symbol.to_string(),
                decimals,
            });
        }
        Ok(Self {
            symbol,
            address,
            decimals,
        })
    }

    /// The token's display symbol.
    #[must_use]
    pub fn symbol(&self) -> &TokenSymbol {
        &self.symbol
    }

    /// The token's contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The token's smallest-unit precision.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// Immutable symbol and address lookup table for tradeable tokens.
///
/// Also knows which symbol denotes the chain's native coin; direction
/// derivation and the allowance skip both key off that flag.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<TokenSymbol, TokenMeta>,
    by_address: HashMap<Address, TokenSymbol>,
    native: TokenSymbol,
}

impl TokenRegistry {
    /// Build a registry from token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TokenNotConfigured`] when the native symbol has
    /// no entry; the native coin needs a registry entry because quote legs
    /// route through its wrapped-token address.
    pub fn new(native: TokenSymbol, tokens: Vec<TokenMeta>) -> Result<Self, DomainError> {
        let registry = Self::from_parts(native, tokens);
        if !registry.tokens.contains_key(&registry.native) {
            return Err(DomainError::TokenNotConfigured {
                symbol: registry.native.to_string(),
            });
        }
        Ok(registry)
    }

    fn from_parts(native: TokenSymbol, tokens: Vec<TokenMeta>) -> Self {
        let mut by_symbol = HashMap::with_capacity(tokens.len());
        let mut by_address = HashMap::with_capacity(tokens.len());
        for meta in tokens {
            by_address.insert(meta.address, meta.symbol.clone());
            by_symbol.insert(meta.symbol.clone(), meta);
        }
        Self {
            tokens: by_symbol,
            by_address,
            native,
        }
    }

    /// Resolve a symbol, failing loudly when it is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TokenNotConfigured`] for unknown symbols.
    pub fn lookup(&self, symbol: &TokenSymbol) -> Result<&TokenMeta, DomainError> {
        self.tokens
            .get(symbol)
            .ok_or_else(|| DomainError::TokenNotConfigured {
                symbol: symbol.to_string(),
            })
    }

    /// Resolve a symbol without an error path.
    #[must_use]
    pub fn get(&self, symbol: &TokenSymbol) -> Option<&TokenMeta> {
        self.tokens.get(symbol)
    }

    /// Reverse lookup from a contract address.
    #[must_use]
    pub fn symbol_for_address(&self, address: &Address) -> Option<&TokenSymbol> {
        self.by_address.get(address)
    }

    /// Reverse lookup returning the full metadata.
    #[must_use]
    pub fn meta_for_address(&self, address: &Address) -> Option<&TokenMeta> {
        self.by_address
            .get(address)
            .and_then(|symbol| self.tokens.get(symbol))
    }

    /// The symbol denoting the chain's native coin.
    #[must_use]
    pub fn native_symbol(&self) -> &TokenSymbol {
        &self.native
    }

    /// Whether the symbol denotes the native coin.
    #[must_use]
    pub fn is_native(&self, symbol: &TokenSymbol) -> bool {
        *symbol == self.native
    }

    /// Number of configured tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the registry has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the configured symbols (selector lists, diagnostics).
    pub fn symbols(&self) -> impl Iterator<Item = &TokenSymbol> {
        self.tokens.keys()
    }

    /// The compiled-in Wanchain mainnet token table.
    ///
    /// WAN's entry carries the wrapped-WAN contract address; quote legs and
    /// history resolution route native amounts through it.
    #[must_use]
    pub fn wanchain_mainnet() -> Self {
        // The compiled-in table is known-valid, so skip revalidation.
        Self::from_parts(TokenSymbol::from("WAN"), wanchain_tokens())
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::wanchain_mainnet()
    }
}

fn wanchain_tokens() -> Vec<TokenMeta> {
    let entries: [(&str, Address, u8); 16] = [
        (
            "wanDOGE",
            address!("0xD3a33C6fEa7F785DdC0915f6A76919C11AbdED45"),
            8,
        ),
        (
            "wanDOT",
            address!("0x52f44783BdF480e88C0eD4cF341A933CAcfDBcaa"),
            10,
        ),
        (
            "wanEOS",
            address!("0x81862b7622CEd0DEfB652Addd4e0c110205B0040"),
            4,
        ),
        (
            "wanETH",
            address!("0xE3aE74D1518A76715aB4C7BeDF1af73893cd435A"),
            18,
        ),
        (
            "SOL",
            address!("0x3Db40923e0410E2D81d3A5e529B851A93313bb3f"),
            9,
        ),
        (
            "wanSUSHI",
            address!("0x9B6863f6Ab2047069aD1CD15fFf8C45Af637D67c"),
            18,
        ),
        (
            "wanUNI",
            address!("0x73Eaa7431B11b1e7A7d5310DE470DE09883529DF"),
            18,
        ),
        (
            "wanAVAX",
            address!("0xB333721251961337F67bbBCAED514f9F284CE8E8"),
            18,
        ),
        (
            "BNB",
            address!("0x9DE0405064BEDd88399098b4fbb2f7fA462992E0"),
            18,
        ),
        (
            "BTC",
            address!("0x50c439B6d602297252505a6799d84eA5928bCFb6"),
            8,
        ),
        (
            "DAI",
            address!("0x18A39cDd1bFD592F40e4862728DF8879e84bBC91"),
            18,
        ),
        (
            "wanUSDC",
            address!("0x52A9CEA01c4CBDd669883e41758B8eB8e8E2B34b"),
            6,
        ),
        (
            "wanUSDT",
            address!("0x11e77E27Af5539872efEd10abaA0b408cfd9fBBD"),
            6,
        ),
        (
            "VOX",
            address!("0xB24999Cf67e4EACBF164BcE9138136F33589d969"),
            18,
        ),
        (
            "WaspToken",
            address!("0x924fd608bf30dB9B099927492FDA5997d7CFcb02"),
            18,
        ),
        (
            "WAN",
            address!("0xdabD997aE5E4799BE47d6E69D9431615CBa28f48"),
            18,
        ),
    ];
    entries
        .into_iter()
        .map(|(symbol, address, decimals)| TokenMeta {
            symbol: symbol.into(),
            address,
            decimals,
        })
        .collect()
}
