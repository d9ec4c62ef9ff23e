//! Token action errors
//!
//! Every failure aborts the whole transaction; nothing is partially applied.

use crate::core::{AssetError, Name, Symbol, SymbolCode};
use crate::runtime::bus::BusError;
use thiserror::Error;

/// Reasons an action (and the transaction carrying it) is rejected
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid symbol name")]
    InvalidSymbol,
    #[error("Invalid amount: {0}")]
    InvalidAmount(&'static str),
    #[error("Memo has more than {limit} bytes ({len})")]
    MemoTooLong { len: usize, limit: usize },
    #[error("Token with symbol already exists: {0}")]
    AlreadyExists(SymbolCode),
    #[error("No record found for symbol {0}")]
    NotFound(SymbolCode),
    #[error("No balance object found for {owner} in {symbol}")]
    NoBalance { owner: Name, symbol: SymbolCode },
    #[error("Overdrawn balance: have {have}, need {need}")]
    Overdrawn { have: i64, need: i64 },
    #[error("Symbol precision mismatch: expected {expected}, found {found}")]
    SymbolMismatch { expected: Symbol, found: Symbol },
    #[error("Quantity exceeds available supply: available {available}, requested {requested}")]
    SupplyExceeded { available: i64, requested: i64 },
    #[error("Cannot transfer to self")]
    SelfTransfer,
    #[error("Account does not exist: {0}")]
    UnknownAccount(Name),
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    #[error("Missing required authority: {0}")]
    Unauthorized(Name),
    #[error("Unknown action {action} on {account}")]
    UnknownAction { account: Name, action: Name },
    #[error("Inline action depth limit of {0} exceeded")]
    InlineDepthExceeded(u32),
    #[error("Forwarded call rejected: {0}")]
    Forward(#[from] BusError),
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<AssetError> for TokenError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::SymbolMismatch { expected, found } => {
                TokenError::SymbolMismatch { expected, found }
            }
            AssetError::Overflow => TokenError::ArithmeticOverflow,
            AssetError::Malformed(_) => TokenError::InvalidAmount("malformed asset"),
            AssetError::Symbol(_) => TokenError::InvalidSymbol,
        }
    }
}
