use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::intent::TradeDirection;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The spender contract may not move enough of the source token yet.
    ///
    /// The message is the exact string shown to the user; the widgets key
    /// their allowance-override flow off this event.
    #[error("Insufficient Allowance, Click Increase Allowance to continue")]
    InsufficientAllowance,

    /// A chain call failed; the reason is already user-presentable.
    #[error("{reason}")]
    ChainCallFailed { reason: String },

    /// The widget's direction policy has no route for this trade direction.
    #[error("{direction} trades are not supported by the {widget} widget")]
    DisallowedDirection {
        widget: &'static str,
        direction: TradeDirection,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
