//! Transaction execution
//!
//! [`Runtime`] is the unit of work around the token contract. It snapshots
//! contract state, applies every action and forwarded call depth-first in
//! send order, and then either commits (state kept, bus committed) or rolls
//! back (snapshot restored, bus rolled back). Nothing is ever half applied.

use crate::core::Name;
use crate::runtime::action::{Action, Transaction};
use crate::runtime::auth::{AccountDirectory, Authorizer};
use crate::runtime::bus::MessageBus;
use crate::runtime::context::ApplyContext;
use crate::token::{TokenContract, TokenError};
use serde::{Deserialize, Serialize};

/// Record of one executed action
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTrace {
    pub receiver: Name,
    pub action: Name,
    /// 0 for top-level actions, +1 per forwarding hop
    pub depth: u32,
    pub notified: Vec<Name>,
    /// Delivered through the message bus rather than applied locally
    pub forwarded: bool,
}

/// Result of a committed transaction
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub id: String,
    pub traces: Vec<ActionTrace>,
}

impl TransactionReceipt {
    /// Calls that left through the bus, in delivery order
    pub fn forwarded(&self) -> impl Iterator<Item = &ActionTrace> {
        self.traces.iter().filter(|t| t.forwarded)
    }
}

/// Host runtime for a single token contract
pub struct Runtime<D: AccountDirectory, B: MessageBus> {
    contract: TokenContract,
    directory: D,
    bus: B,
}

impl<D: AccountDirectory, B: MessageBus> Runtime<D, B> {
    pub fn new(contract: TokenContract, directory: D, bus: B) -> Self {
        Self {
            contract,
            directory,
            bus,
        }
    }

    pub fn contract(&self) -> &TokenContract {
        &self.contract
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Apply a transaction atomically
    pub fn push_transaction(
        &mut self,
        tx: &Transaction,
        authorizer: &dyn Authorizer,
    ) -> Result<TransactionReceipt, TokenError> {
        let id = tx.id()?;
        let snapshot = self.contract.state().clone();
        let mut traces = Vec::new();

        match self.apply_all(tx, authorizer, &mut traces) {
            Ok(()) => {
                self.bus.commit();
                log::info!("Transaction {} committed ({} actions)", &id[..16], traces.len());
                Ok(TransactionReceipt { id, traces })
            }
            Err(e) => {
                self.contract.restore(snapshot);
                self.bus.rollback();
                log::warn!("Transaction {} rolled back: {}", &id[..16], e);
                Err(e)
            }
        }
    }

    /// Convenience wrapper for a single action
    pub fn push_action(
        &mut self,
        action: Action,
        authorizer: &dyn Authorizer,
    ) -> Result<TransactionReceipt, TokenError> {
        self.push_transaction(&Transaction::single(action), authorizer)
    }

    fn apply_all(
        &mut self,
        tx: &Transaction,
        authorizer: &dyn Authorizer,
        traces: &mut Vec<ActionTrace>,
    ) -> Result<(), TokenError> {
        for action in &tx.actions {
            for level in &action.authorization {
                authorizer.require(level.actor)?;
            }
            self.execute(action, 0, traces)?;
        }
        Ok(())
    }

    fn execute(
        &mut self,
        action: &Action,
        depth: u32,
        traces: &mut Vec<ActionTrace>,
    ) -> Result<(), TokenError> {
        let max_depth = self.contract.config().max_inline_depth;
        if depth > max_depth {
            return Err(TokenError::InlineDepthExceeded(max_depth));
        }

        if action.account != self.contract.account() {
            log::debug!("Forwarding {}::{}", action.account, action.name);
            self.bus.send(action.account, action.name, &action.data)?;
            traces.push(ActionTrace {
                receiver: action.account,
                action: action.name,
                depth,
                notified: Vec::new(),
                forwarded: true,
            });
            return Ok(());
        }

        let (notified, inline) = {
            let mut ctx = ApplyContext::new(self.contract.account(), action, &self.directory);
            self.contract.apply(&mut ctx)?;
            ctx.into_parts()
        };

        for recipient in &notified {
            log::debug!("{} notified of {}", recipient, action.name);
        }
        traces.push(ActionTrace {
            receiver: action.account,
            action: action.name,
            depth,
            notified,
            forwarded: false,
        });

        for next in &inline {
            if next.account == self.contract.account() {
                self.check_inline_authorization(action, next)?;
            }
            self.execute(next, depth + 1, traces)?;
        }

        Ok(())
    }

    /// A local forwarded call may only use authority its sender held
    fn check_inline_authorization(&self, sender: &Action, inline: &Action) -> Result<(), TokenError> {
        for level in &inline.authorization {
            if level.actor != self.contract.account() && !sender.authorization.contains(level) {
                return Err(TokenError::Unauthorized(level.actor));
            }
        }
        Ok(())
    }
}
