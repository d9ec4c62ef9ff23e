//! Fixed-point token amounts
//!
//! An [`Asset`] is an integer number of minor units tagged with a
//! [`Symbol`]. Precision only affects formatting; arithmetic works on the
//! raw amount and is always checked.

use crate::core::symbol::{Symbol, SymbolCode, SymbolError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest magnitude an asset amount may hold (2^62 - 1)
pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

/// Asset arithmetic and parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Symbol mismatch: expected {expected}, found {found}")]
    SymbolMismatch { expected: Symbol, found: Symbol },
    #[error("Arithmetic overflow")]
    Overflow,
    #[error("Malformed asset: {0:?}")]
    Malformed(String),
    #[error(transparent)]
    Symbol(#[from] SymbolError),
}

/// An amount of a specific token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(amount: i64, symbol: Symbol) -> Self {
        Self { amount, symbol }
    }

    /// Zero of the given symbol
    pub fn zero(symbol: Symbol) -> Self {
        Self::new(0, symbol)
    }

    pub fn is_amount_within_range(&self) -> bool {
        (-MAX_AMOUNT..=MAX_AMOUNT).contains(&self.amount)
    }

    /// Non-negative, in range, and carrying a well-formed symbol
    pub fn is_valid(&self) -> bool {
        self.amount >= 0 && self.is_amount_within_range() && self.symbol.is_valid()
    }

    pub fn checked_add(&self, other: &Asset) -> Result<Asset, AssetError> {
        self.require_same_symbol(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(AssetError::Overflow)?;
        Self::in_range(amount, self.symbol)
    }

    pub fn checked_sub(&self, other: &Asset) -> Result<Asset, AssetError> {
        self.require_same_symbol(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(AssetError::Overflow)?;
        Self::in_range(amount, self.symbol)
    }

    /// Compare two amounts of the same symbol
    pub fn checked_cmp(&self, other: &Asset) -> Result<Ordering, AssetError> {
        self.require_same_symbol(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn require_same_symbol(&self, other: &Asset) -> Result<(), AssetError> {
        if self.symbol != other.symbol {
            return Err(AssetError::SymbolMismatch {
                expected: self.symbol,
                found: other.symbol,
            });
        }
        Ok(())
    }

    fn in_range(amount: i64, symbol: Symbol) -> Result<Asset, AssetError> {
        let asset = Asset::new(amount, symbol);
        if !asset.is_amount_within_range() {
            return Err(AssetError::Overflow);
        }
        Ok(asset)
    }
}

impl fmt::Display for Asset {
    /// Works on the decimal digits, so any precision formats without
    /// overflowing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.symbol.precision() as usize;
        let sign = if self.amount < 0 { "-" } else { "" };
        let digits = self.amount.unsigned_abs().to_string();

        if precision == 0 {
            return write!(f, "{}{} {}", sign, digits, self.symbol.code());
        }

        let digits = format!("{:0>width$}", digits, width = precision + 1);
        let (whole, fraction) = digits.split_at(digits.len() - precision);
        write!(f, "{}{}.{} {}", sign, whole, fraction, self.symbol.code())
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    /// Parses `100.000 MNT`; the number of fraction digits sets the precision
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AssetError::Malformed(s.to_string());

        let (number, code) = s.trim().split_once(' ').ok_or_else(malformed)?;
        let code: SymbolCode = code.trim().parse()?;

        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty()
            || !whole
                .bytes()
                .chain(fraction.bytes())
                .all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }

        let precision = u8::try_from(fraction.len()).map_err(|_| malformed())?;
        let symbol = Symbol::new(code, precision);
        let unit = symbol
            .unit()
            .ok_or(SymbolError::InvalidPrecision(precision.to_string()))?;

        let whole: i64 = whole.parse().map_err(|_| AssetError::Overflow)?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| malformed())?
        };

        let amount = whole
            .checked_mul(unit)
            .and_then(|v| v.checked_add(fraction))
            .ok_or(AssetError::Overflow)?;
        let amount = if negative { -amount } else { amount };

        Self::in_range(amount, symbol)
    }
}

impl TryFrom<String> for Asset {
    type Error = AssetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}
