//! Token contract actions
//!
//! `create`, `issue`, `transfer` and `burn` mutate the supply registry and
//! the account ledger; `propose` and `vote` are handed to the staking relay.
//! Handlers validate everything before touching state, and the runtime rolls
//! back the whole transaction when any handler or forwarded call fails.

use crate::config::{ConfigError, ContractConfig};
use crate::core::{Asset, Name, SymbolCode};
use crate::runtime::action::{Action, ActionData, PermissionLevel, TransferArgs};
use crate::runtime::context::ApplyContext;
use crate::token::error::TokenError;
use crate::token::relay::StakingRelay;
use crate::token::stats::CurrencyStats;
use crate::token::state::TokenState;

pub const CREATE: Name = Name::from_static("create");
pub const ISSUE: Name = Name::from_static("issue");
pub const TRANSFER: Name = Name::from_static("transfer");
pub const BURN: Name = Name::from_static("burn");
pub const PROPOSE: Name = Name::from_static("propose");
pub const VOTE: Name = Name::from_static("vote");

/// The token contract: configuration, relay and persisted state
#[derive(Clone, Debug)]
pub struct TokenContract {
    config: ContractConfig,
    relay: StakingRelay,
    state: TokenState,
}

impl TokenContract {
    /// Validates `config` before deploying with empty state
    pub fn new(config: ContractConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let relay = StakingRelay::new(config.relay.clone());
        Ok(Self {
            config,
            relay,
            state: TokenState::new(),
        })
    }

    /// Account the contract is deployed on
    pub fn account(&self) -> Name {
        self.config.account
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn state(&self) -> &TokenState {
        &self.state
    }

    pub(crate) fn restore(&mut self, state: TokenState) {
        self.state = state;
    }

    /// Dispatch the context's action to its handler
    pub fn apply(&mut self, ctx: &mut ApplyContext<'_>) -> Result<(), TokenError> {
        let action = ctx.action();
        match (action.name, &action.data) {
            (CREATE, ActionData::Create(args)) => {
                self.create(ctx, args.issuer, args.maximum_supply)
            }
            (ISSUE, ActionData::Issue(args)) => self.issue(ctx, args.to, args.quantity, &args.memo),
            (TRANSFER, ActionData::Transfer(args)) => {
                self.transfer(ctx, args.from, args.to, args.quantity, &args.memo)
            }
            (BURN, ActionData::Burn(args)) => self.burn(ctx, args.from, args.quantity, &args.memo),
            (PROPOSE, ActionData::Propose(args)) => self.relay.propose(ctx, args),
            (VOTE, ActionData::Vote(args)) => self.relay.vote(ctx, args),
            _ => Err(TokenError::UnknownAction {
                account: ctx.receiver(),
                action: action.name,
            }),
        }
    }

    /// Register a new token with zero supply
    pub fn create(
        &mut self,
        ctx: &mut ApplyContext<'_>,
        issuer: Name,
        maximum_supply: Asset,
    ) -> Result<(), TokenError> {
        ctx.require_auth(self.account())?;

        if !maximum_supply.symbol.is_valid() {
            return Err(TokenError::InvalidSymbol);
        }
        if !maximum_supply.is_valid() {
            return Err(TokenError::InvalidAmount("invalid supply"));
        }
        if maximum_supply.amount <= 0 {
            return Err(TokenError::InvalidAmount("max-supply must be positive"));
        }

        self.state.registry.insert(issuer, maximum_supply)?;

        log::info!(
            "Token created: {} (max {}) issued by {}",
            maximum_supply.symbol,
            maximum_supply,
            issuer
        );
        Ok(())
    }

    /// Mint to the issuer, then forward a transfer when `to` is someone else
    pub fn issue(
        &mut self,
        ctx: &mut ApplyContext<'_>,
        to: Name,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), TokenError> {
        if !quantity.symbol.is_valid() {
            return Err(TokenError::InvalidSymbol);
        }
        self.check_memo(memo)?;

        let stats = self.stats(quantity.symbol.code())?.clone();
        ctx.require_auth(stats.issuer)?;
        check_quantity(&quantity, "must issue positive quantity")?;
        check_symbol(&stats, &quantity)?;

        self.state.registry.add_supply(&quantity)?;
        self.state
            .accounts
            .credit(stats.issuer, &quantity, stats.issuer)?;

        log::info!("Issued {} to {}", quantity, stats.issuer);

        if to != stats.issuer {
            ctx.send_inline(Action::new(
                ctx.receiver(),
                TRANSFER,
                vec![PermissionLevel::active(stats.issuer)],
                ActionData::Transfer(TransferArgs {
                    from: stats.issuer,
                    to,
                    quantity,
                    memo: memo.to_string(),
                }),
            ));
        }

        Ok(())
    }

    /// Move `quantity` from `from` to `to`; supply is unchanged
    pub fn transfer(
        &mut self,
        ctx: &mut ApplyContext<'_>,
        from: Name,
        to: Name,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), TokenError> {
        if from == to {
            return Err(TokenError::SelfTransfer);
        }
        ctx.require_auth(from)?;
        if !ctx.is_account(to) {
            return Err(TokenError::UnknownAccount(to));
        }
        if !quantity.symbol.is_valid() {
            return Err(TokenError::InvalidSymbol);
        }

        let stats = self.stats(quantity.symbol.code())?.clone();

        ctx.require_recipient(from);
        ctx.require_recipient(to);

        check_quantity(&quantity, "must transfer positive quantity")?;
        check_symbol(&stats, &quantity)?;
        self.check_memo(memo)?;

        self.state.accounts.debit(from, &quantity)?;
        self.state.accounts.credit(to, &quantity, from)?;

        log::debug!("Transferred {} from {} to {}", quantity, from, to);
        Ok(())
    }

    /// Destroy `quantity` held by `from`
    pub fn burn(
        &mut self,
        ctx: &mut ApplyContext<'_>,
        from: Name,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), TokenError> {
        ctx.require_auth(from)?;
        if !quantity.symbol.is_valid() {
            return Err(TokenError::InvalidSymbol);
        }
        self.check_memo(memo)?;

        let stats = self.stats(quantity.symbol.code())?.clone();
        check_quantity(&quantity, "must burn positive quantity")?;
        check_symbol(&stats, &quantity)?;

        self.state.accounts.debit(from, &quantity)?;
        self.state.registry.sub_supply(&quantity)?;

        log::info!("Burned {} from {}", quantity, from);
        Ok(())
    }

    /// Current supply of `code`
    pub fn get_supply(&self, code: SymbolCode) -> Result<Asset, TokenError> {
        Ok(self.stats(code)?.supply)
    }

    /// Balance of `owner` in `code`; no row means `NotFound`
    pub fn get_balance(&self, owner: Name, code: SymbolCode) -> Result<Asset, TokenError> {
        self.state
            .accounts
            .balance(owner, code)
            .ok_or(TokenError::NotFound(code))
    }

    /// Full supply record of `code`
    pub fn stats(&self, code: SymbolCode) -> Result<&CurrencyStats, TokenError> {
        self.state.registry.require(code)
    }

    fn check_memo(&self, memo: &str) -> Result<(), TokenError> {
        if memo.len() > self.config.max_memo_bytes {
            return Err(TokenError::MemoTooLong {
                len: memo.len(),
                limit: self.config.max_memo_bytes,
            });
        }
        Ok(())
    }
}

fn check_quantity(quantity: &Asset, non_positive: &'static str) -> Result<(), TokenError> {
    if !quantity.is_valid() {
        return Err(TokenError::InvalidAmount("invalid quantity"));
    }
    if quantity.amount <= 0 {
        return Err(TokenError::InvalidAmount(non_positive));
    }
    Ok(())
}

fn check_symbol(stats: &CurrencyStats, quantity: &Asset) -> Result<(), TokenError> {
    if quantity.symbol != stats.supply.symbol {
        return Err(TokenError::SymbolMismatch {
            expected: stats.supply.symbol,
            found: quantity.symbol,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayConfig;
    use crate::core::{Symbol, SymbolCode};

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ContractConfig {
            relay: RelayConfig {
                precision_multiplier: 100,
                ..RelayConfig::default()
            },
            ..ContractConfig::default()
        };
        assert!(matches!(
            TokenContract::new(config),
            Err(ConfigError::Invalid(_))
        ));

        let config = ContractConfig {
            relay: RelayConfig {
                stake_symbol: Symbol::new(SymbolCode::from_raw(0), 3),
                ..RelayConfig::default()
            },
            ..ContractConfig::default()
        };
        assert!(TokenContract::new(config).is_err());
    }

    #[test]
    fn test_new_starts_empty() {
        let contract = TokenContract::new(ContractConfig::default()).unwrap();
        assert_eq!(contract.account(), Name::from_static("menteentwk"));
        assert!(contract.state().registry.is_empty());
        assert!(matches!(
            contract.get_supply(SymbolCode::from_static("MNT")),
            Err(TokenError::NotFound(_))
        ));
    }
}
