//! Supply registry
//!
//! One record per symbol code with the current supply, the cap and the
//! issuer. Records are created once and never removed.

use crate::core::{Asset, Name, SymbolCode};
use crate::token::error::TokenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supply record for a single token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStats {
    pub supply: Asset,
    pub max_supply: Asset,
    pub issuer: Name,
}

impl CurrencyStats {
    /// Amount that can still be issued before hitting the cap
    pub fn available(&self) -> i64 {
        self.max_supply.amount - self.supply.amount
    }
}

/// All supply records, keyed by symbol code
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyRegistry {
    stats: BTreeMap<SymbolCode, CurrencyStats>,
}

impl SupplyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: SymbolCode) -> Option<&CurrencyStats> {
        self.stats.get(&code)
    }

    /// Look up a record, failing with `NotFound`
    pub fn require(&self, code: SymbolCode) -> Result<&CurrencyStats, TokenError> {
        self.get(code).ok_or(TokenError::NotFound(code))
    }

    pub fn contains(&self, code: SymbolCode) -> bool {
        self.stats.contains_key(&code)
    }

    /// Insert a fresh record with zero supply
    pub fn insert(&mut self, issuer: Name, max_supply: Asset) -> Result<&CurrencyStats, TokenError> {
        let code = max_supply.symbol.code();
        if self.contains(code) {
            return Err(TokenError::AlreadyExists(code));
        }

        let stats = CurrencyStats {
            supply: Asset::zero(max_supply.symbol),
            max_supply,
            issuer,
        };
        Ok(self.stats.entry(code).or_insert(stats))
    }

    /// Raise the supply, enforcing the cap
    pub fn add_supply(&mut self, quantity: &Asset) -> Result<(), TokenError> {
        let code = quantity.symbol.code();
        let stats = self.stats.get_mut(&code).ok_or(TokenError::NotFound(code))?;

        if quantity.amount > stats.available() {
            return Err(TokenError::SupplyExceeded {
                available: stats.available(),
                requested: quantity.amount,
            });
        }

        stats.supply = stats.supply.checked_add(quantity)?;
        Ok(())
    }

    /// Lower the supply; it never goes negative
    pub fn sub_supply(&mut self, quantity: &Asset) -> Result<(), TokenError> {
        let code = quantity.symbol.code();
        let stats = self.stats.get_mut(&code).ok_or(TokenError::NotFound(code))?;

        let supply = stats.supply.checked_sub(quantity)?;
        if supply.amount < 0 {
            return Err(TokenError::Overdrawn {
                have: stats.supply.amount,
                need: quantity.amount,
            });
        }

        stats.supply = supply;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SymbolCode, &CurrencyStats)> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
