//! Token symbols
//!
//! A [`SymbolCode`] is 1-7 uppercase ASCII letters packed little-endian into
//! a `u64`. A [`Symbol`] pairs a code with its decimal precision; two symbols
//! are equal only when both match.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of letters in a symbol code
pub const MAX_SYMBOL_CODE_LEN: usize = 7;

/// Maximum decimal precision of a symbol
pub const MAX_PRECISION: u8 = 18;

/// Symbol parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("Invalid symbol code: {0:?}")]
    InvalidCode(String),
    #[error("Invalid precision: {0}")]
    InvalidPrecision(String),
    #[error("Malformed symbol, expected `<precision>,<CODE>`: {0:?}")]
    Malformed(String),
}

/// Symbol code (e.g. `MNT`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(u64);

impl SymbolCode {
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Encode a code literal at compile time; invalid literals fail const
    /// evaluation.
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        assert!(
            !bytes.is_empty() && bytes.len() <= MAX_SYMBOL_CODE_LEN,
            "symbol code literal must be 1-7 letters"
        );

        let mut value = 0u64;
        let mut i = bytes.len();
        while i > 0 {
            i -= 1;
            assert!(bytes[i].is_ascii_uppercase(), "symbol code literal must be uppercase");
            value = (value << 8) | bytes[i] as u64;
        }
        Self(value)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Well-formed codes are contiguous uppercase letters with no
    /// interior gaps.
    pub fn is_valid(&self) -> bool {
        let mut sym = self.0;
        let mut i = 0;
        while i < MAX_SYMBOL_CODE_LEN {
            let c = (sym & 0xff) as u8;
            if !c.is_ascii_uppercase() {
                return false;
            }
            sym >>= 8;
            i += 1;
            if sym & 0xff == 0 {
                // Everything after the terminator must be zero too
                return sym == 0;
            }
        }
        // An eighth byte means the code is too long
        sym == 0
    }

    /// Number of letters in the code
    pub fn len(&self) -> usize {
        let mut sym = self.0;
        let mut len = 0;
        while sym & 0xff != 0 && len < 8 {
            len += 1;
            sym >>= 8;
        }
        len
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for SymbolCode {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty()
            || s.len() > MAX_SYMBOL_CODE_LEN
            || !s.bytes().all(|c| c.is_ascii_uppercase())
        {
            return Err(SymbolError::InvalidCode(s.to_string()));
        }

        let value = s
            .bytes()
            .rev()
            .fold(0u64, |acc, c| (acc << 8) | c as u64);
        Ok(Self(value))
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sym = self.0;
        while sym & 0xff != 0 {
            write!(f, "{}", (sym & 0xff) as u8 as char)?;
            sym >>= 8;
        }
        Ok(())
    }
}

/// Token symbol: code plus decimal precision
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    code: SymbolCode,
    precision: u8,
}

impl Symbol {
    pub const fn new(code: SymbolCode, precision: u8) -> Self {
        Self { code, precision }
    }

    pub fn code(&self) -> SymbolCode {
        self.code
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn is_valid(&self) -> bool {
        self.code.is_valid() && self.precision <= MAX_PRECISION
    }

    /// Number of minor units in one whole token
    pub fn unit(&self) -> Option<i64> {
        10i64.checked_pow(self.precision as u32)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    /// Parses `3,MNT`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| SymbolError::Malformed(s.to_string()))?;

        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| SymbolError::InvalidPrecision(precision.to_string()))?;
        if precision > MAX_PRECISION {
            return Err(SymbolError::InvalidPrecision(precision.to_string()));
        }

        Ok(Self::new(code.trim().parse()?, precision))
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}
