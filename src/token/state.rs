//! Contract state and invariant audit

use crate::core::{Name, SymbolCode};
use crate::token::accounts::AccountLedger;
use crate::token::stats::SupplyRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the token contract persists
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
    pub registry: SupplyRegistry,
    pub accounts: AccountLedger,
}

/// A broken ledger invariant
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Recorded supply differs from the sum of balances
    Conservation {
        symbol: SymbolCode,
        supply: i64,
        balances: i128,
    },
    /// A row exists with a zero or negative balance
    NonPositiveBalance { owner: Name, symbol: SymbolCode },
    /// Supply is negative or above the cap
    SupplyOutOfBounds { symbol: SymbolCode },
    /// A balance exists for a symbol with no supply record
    Orphan { owner: Name, symbol: SymbolCode },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservation {
                symbol,
                supply,
                balances,
            } => write!(
                f,
                "{}: supply {} != sum of balances {}",
                symbol, supply, balances
            ),
            Self::NonPositiveBalance { owner, symbol } => {
                write!(f, "{}: non-positive balance row for {}", symbol, owner)
            }
            Self::SupplyOutOfBounds { symbol } => write!(f, "{}: supply out of bounds", symbol),
            Self::Orphan { owner, symbol } => {
                write!(f, "{}: balance for {} without a supply record", symbol, owner)
            }
        }
    }
}

impl TokenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every ledger invariant, returning all violations found
    pub fn audit(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        for (code, stats) in self.registry.iter() {
            if stats.supply.amount < 0 || stats.supply.amount > stats.max_supply.amount {
                violations.push(InvariantViolation::SupplyOutOfBounds { symbol: *code });
            }

            let balances = self.accounts.total(*code);
            if balances != stats.supply.amount as i128 {
                violations.push(InvariantViolation::Conservation {
                    symbol: *code,
                    supply: stats.supply.amount,
                    balances,
                });
            }
        }

        for (owner, row) in self.accounts.rows() {
            let symbol = row.balance.symbol.code();
            if row.balance.amount <= 0 {
                violations.push(InvariantViolation::NonPositiveBalance { owner, symbol });
            }
            if !self.registry.contains(symbol) {
                violations.push(InvariantViolation::Orphan { owner, symbol });
            }
        }

        violations
    }
}
