//! Core value types
//!
//! This module contains the primitives every other layer builds on:
//! - Names (64-bit account identities)
//! - Symbols (token code plus decimal precision)
//! - Assets (checked fixed-point amounts)

pub mod asset;
pub mod name;
pub mod symbol;

pub use asset::{Asset, AssetError, MAX_AMOUNT};
pub use name::{Name, NameError, MAX_NAME_LEN};
pub use symbol::{Symbol, SymbolCode, SymbolError, MAX_PRECISION, MAX_SYMBOL_CODE_LEN};
