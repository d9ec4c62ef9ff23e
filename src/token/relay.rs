//! Governance staking relay
//!
//! `propose` and `vote` keep no state of their own. Each queues two
//! forwarded calls in a fixed order: a stake transfer into the staking
//! contract, then the matching governance action with the caller's fields.
//! The runtime applies them after the relay action and only delivers the
//! governance call once the transfer has succeeded.

use crate::config::RelayConfig;
use crate::core::{Asset, Name};
use crate::runtime::action::{
    Action, ActionData, PermissionLevel, ProposeArgs, TransferArgs, VoteArgs,
};
use crate::runtime::context::ApplyContext;
use crate::token::contract::TRANSFER;
use crate::token::error::TokenError;

#[derive(Clone, Debug)]
pub struct StakingRelay {
    config: RelayConfig,
}

impl StakingRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Stake a fixed amount and forward the proposal
    pub fn propose(&self, ctx: &mut ApplyContext<'_>, args: &ProposeArgs) -> Result<(), TokenError> {
        ctx.require_auth(args.proposer)?;

        let stake = self.stake(self.config.propose_stake)?;
        self.send_stake(ctx, args.proposer, stake);
        self.forward(
            ctx,
            self.config.propose_action,
            ActionData::Propose(args.clone()),
        );

        log::debug!("Relayed proposal {:?} from {} with stake {}", args.slug, args.proposer, stake);
        Ok(())
    }

    /// Stake the voter's chosen amount and forward the vote
    pub fn vote(&self, ctx: &mut ApplyContext<'_>, args: &VoteArgs) -> Result<(), TokenError> {
        ctx.require_auth(args.voter)?;

        if args.amount == 0 {
            return Err(TokenError::InvalidAmount("must transfer a positive amount"));
        }
        let whole = i64::try_from(args.amount).map_err(|_| TokenError::ArithmeticOverflow)?;

        let stake = self.stake(whole)?;
        self.send_stake(ctx, args.voter, stake);
        self.forward(ctx, self.config.vote_action, ActionData::Vote(args.clone()));

        log::debug!(
            "Relayed vote on proposal {} from {} with stake {}",
            args.proposal_id,
            args.voter,
            stake
        );
        Ok(())
    }

    /// Whole tokens to an asset in minor units
    fn stake(&self, whole: i64) -> Result<Asset, TokenError> {
        let amount = whole
            .checked_mul(self.config.precision_multiplier)
            .ok_or(TokenError::ArithmeticOverflow)?;
        let stake = Asset::new(amount, self.config.stake_symbol);
        if !stake.is_amount_within_range() {
            return Err(TokenError::ArithmeticOverflow);
        }
        Ok(stake)
    }

    fn send_stake(&self, ctx: &mut ApplyContext<'_>, actor: Name, stake: Asset) {
        ctx.send_inline(Action::new(
            ctx.receiver(),
            TRANSFER,
            vec![PermissionLevel::new(actor, self.config.permission)],
            ActionData::Transfer(TransferArgs {
                from: actor,
                to: self.config.staking_contract,
                quantity: stake,
                memo: self.config.stake_memo.clone(),
            }),
        ));
    }

    fn forward(&self, ctx: &mut ApplyContext<'_>, action: Name, data: ActionData) {
        ctx.send_inline(Action::new(
            self.config.staking_contract,
            action,
            vec![PermissionLevel::new(
                self.config.staking_contract,
                self.config.permission,
            )],
            data,
        ));
    }
}
