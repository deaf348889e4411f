//! Amount parsing and exact fixed-point scaling.
//!
//! Human-entered amounts stay decimal strings at the edges; chain calls take
//! smallest-unit [`U256`] values scaled by the token's precision. Conversions
//! are exact or they fail - binary floats never appear, and excess fractional
//! digits are rejected instead of rounded.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::domain::error::DomainError;

/// Which amount field the user is editing.
///
/// The edited side is authoritative; the counterpart is derived from quotes
/// and overwritten without ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    /// The pay-in field.
    Source,
    /// The receive field.
    Dest,
}

impl QuoteSide {
    /// The opposite side.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Source => Self::Dest,
            Self::Dest => Self::Source,
        }
    }
}

impl fmt::Display for QuoteSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Dest => write!(f, "destination"),
        }
    }
}

/// The two amount fields of a trading pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountPair {
    source: String,
    dest: String,
}

impl AmountPair {
    /// Two empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value for one side.
    #[must_use]
    pub fn get(&self, side: QuoteSide) -> &str {
        match side {
            QuoteSide::Source => &self.source,
            QuoteSide::Dest => &self.dest,
        }
    }

    /// Overwrite one side.
    pub fn set(&mut self, side: QuoteSide, value: impl Into<String>) {
        match side {
            QuoteSide::Source => self.source = value.into(),
            QuoteSide::Dest => self.dest = value.into(),
        }
    }

    /// Blank both fields.
    pub fn clear(&mut self) {
        self.source.clear();
        self.dest.clear();
    }

    /// Exchange the two fields in place.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.dest);
    }

    /// Whether one side is blank.
    #[must_use]
    pub fn is_empty(&self, side: QuoteSide) -> bool {
        self.get(side).is_empty()
    }

    /// Whether either side is blank.
    #[must_use]
    pub fn any_empty(&self) -> bool {
        self.source.is_empty() || self.dest.is_empty()
    }
}

/// Parse a user-entered amount.
///
/// An empty (or whitespace-only) input is not an error; it means the field
/// is blank and callers skip whatever they were about to do.
///
/// # Errors
///
/// Returns [`DomainError::InvalidAmount`] for non-decimal or negative input.
pub fn parse_amount(raw: &str) -> Result<Option<Decimal>, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = Decimal::from_str(trimmed).map_err(|e| DomainError::InvalidAmount {
        value: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::InvalidAmount {
            value: trimmed.to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(Some(value))
}

/// Scale a human amount to smallest units by `10^decimals`, exactly.
///
/// # Errors
///
/// Returns [`DomainError::AmountPrecision`] when the amount has more
/// fractional digits than the token supports, and
/// [`DomainError::AmountRange`] when the scaled value overflows.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256, DomainError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::InvalidAmount {
            value: amount.to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    let mantissa = amount.mantissa().unsigned_abs();
    let scale = amount.scale();
    let target = u32::from(decimals);

    if scale > target {
        let divisor = 10u128
            .checked_pow(scale - target)
            .ok_or_else(|| DomainError::AmountRange {
                value: amount.to_string(),
            })?;
        if mantissa % divisor != 0 {
            return Err(DomainError::AmountPrecision { amount, decimals });
        }
        Ok(U256::from(mantissa / divisor))
    } else {
        let shift = U256::from(10u8).pow(U256::from(target - scale));
        U256::from(mantissa)
            .checked_mul(shift)
            .ok_or_else(|| DomainError::AmountRange {
                value: amount.to_string(),
            })
    }
}

/// Scale a smallest-unit value back to a human decimal, exactly.
///
/// Trailing zeros are normalized away, so `9990000` at 6 decimals reads
/// `9.99` rather than `9.990000`.
///
/// # Errors
///
/// Returns [`DomainError::AmountRange`] when the value exceeds the decimal
/// range.
pub fn from_base_units(units: U256, decimals: u8) -> Result<Decimal, DomainError> {
    let out_of_range = || DomainError::AmountRange {
        value: units.to_string(),
    };
    let raw = u128::try_from(units).map_err(|_| out_of_range())?;
    let signed = i128::try_from(raw).map_err(|_| out_of_range())?;
    let value =
        Decimal::try_from_i128_with_scale(signed, u32::from(decimals)).map_err(|_| out_of_range())?;
    Ok(value.normalize())
}

/// [`from_base_units`] rendered as the string a field displays.
///
/// # Errors
///
/// Same conditions as [`from_base_units`].
pub fn format_base_units(units: U256, decimals: u8) -> Result<String, DomainError> {
    Ok(from_base_units(units, decimals)?.to_string())
}
