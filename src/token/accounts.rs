//! Account ledger
//!
//! Balances are scoped per owner and keyed by symbol code inside that scope.
//! A row only exists while its balance is positive.

use crate::core::{Asset, Name, SymbolCode};
use crate::token::error::TokenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single balance row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRow {
    pub balance: Asset,
    /// Account whose resources fund this row
    pub payer: Name,
}

/// Per-owner balance tables
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountLedger {
    scopes: BTreeMap<Name, BTreeMap<SymbolCode, AccountRow>>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, owner: Name, code: SymbolCode) -> Option<&AccountRow> {
        self.scopes.get(&owner).and_then(|rows| rows.get(&code))
    }

    /// Balance of `owner`, or `None` when no row exists
    pub fn balance(&self, owner: Name, code: SymbolCode) -> Option<Asset> {
        self.get(owner, code).map(|row| row.balance)
    }

    /// Remove `value` from `owner`, deleting the row when it reaches zero
    pub fn debit(&mut self, owner: Name, value: &Asset) -> Result<(), TokenError> {
        let code = value.symbol.code();
        let rows = self
            .scopes
            .get_mut(&owner)
            .ok_or(TokenError::NoBalance { owner, symbol: code })?;
        let row = rows
            .get_mut(&code)
            .ok_or(TokenError::NoBalance { owner, symbol: code })?;

        if row.balance.amount < value.amount {
            return Err(TokenError::Overdrawn {
                have: row.balance.amount,
                need: value.amount,
            });
        }

        if row.balance.amount == value.amount {
            rows.remove(&code);
            if rows.is_empty() {
                self.scopes.remove(&owner);
            }
        } else {
            row.balance = row.balance.checked_sub(value)?;
        }

        Ok(())
    }

    /// Add `value` to `owner`, creating the row on `payer`'s budget if needed
    pub fn credit(&mut self, owner: Name, value: &Asset, payer: Name) -> Result<(), TokenError> {
        let rows = self.scopes.entry(owner).or_default();
        match rows.get_mut(&value.symbol.code()) {
            Some(row) => {
                row.balance = row.balance.checked_add(value)?;
            }
            None => {
                rows.insert(
                    value.symbol.code(),
                    AccountRow {
                        balance: *value,
                        payer,
                    },
                );
            }
        }
        Ok(())
    }

    /// Sum of every balance held in `code`
    pub fn total(&self, code: SymbolCode) -> i128 {
        self.scopes
            .values()
            .filter_map(|rows| rows.get(&code))
            .map(|row| row.balance.amount as i128)
            .sum()
    }

    /// Number of rows funded by `payer`
    pub fn rows_paid_by(&self, payer: Name) -> usize {
        self.rows().filter(|(_, row)| row.payer == payer).count()
    }

    /// Every (owner, row) pair
    pub fn rows(&self) -> impl Iterator<Item = (Name, &AccountRow)> {
        self.scopes
            .iter()
            .flat_map(|(owner, rows)| rows.values().map(move |row| (*owner, row)))
    }
}
