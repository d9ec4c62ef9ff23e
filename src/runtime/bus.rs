//! Forwarded calls to other contracts
//!
//! Calls addressed to another contract leave through a [`MessageBus`]. The
//! runtime stages them while a transaction runs and then either commits or
//! rolls back the whole batch together with local state.

use crate::core::Name;
use crate::runtime::action::ActionData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delivery failures reported by the bus or the receiving contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("{target}::{action} rejected: {reason}")]
    Rejected {
        target: Name,
        action: Name,
        reason: String,
    },
    #[error("No route to contract {0}")]
    Unreachable(Name),
}

/// Channel to contracts outside this one.
///
/// Implementations must stage sends until `commit`; the runtime relies on
/// `rollback` to drop calls made by a failed transaction.
pub trait MessageBus {
    /// Deliver a call; the receiver may reject it
    fn send(&mut self, target: Name, action: Name, payload: &ActionData) -> Result<(), BusError>;

    /// Make every call sent since the last commit/rollback final
    fn commit(&mut self);

    /// Discard every call sent since the last commit/rollback
    fn rollback(&mut self);
}

/// A forwarded call as seen by the bus
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub target: Name,
    pub action: Name,
    pub payload: ActionData,
}

/// In-memory bus: stages sends and keeps committed ones in order
#[derive(Clone, Debug, Default)]
pub struct MemoryBus {
    routes: Option<Vec<Name>>,
    rejected: Vec<(Name, Name, String)>,
    pending: Vec<Envelope>,
    delivered: Vec<Envelope>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept calls to the listed contracts
    pub fn with_routes<I: IntoIterator<Item = Name>>(routes: I) -> Self {
        Self {
            routes: Some(routes.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Have the receiving contract reject every `target::action` call
    pub fn reject(&mut self, target: Name, action: Name, reason: &str) {
        self.rejected.push((target, action, reason.to_string()));
    }

    /// Committed calls, oldest first
    pub fn delivered(&self) -> &[Envelope] {
        &self.delivered
    }

    /// Calls sent but not yet committed
    pub fn pending(&self) -> &[Envelope] {
        &self.pending
    }
}

impl MessageBus for MemoryBus {
    fn send(&mut self, target: Name, action: Name, payload: &ActionData) -> Result<(), BusError> {
        if let Some(routes) = &self.routes {
            if !routes.contains(&target) {
                return Err(BusError::Unreachable(target));
            }
        }

        if let Some((_, _, reason)) = self
            .rejected
            .iter()
            .find(|(t, a, _)| *t == target && *a == action)
        {
            return Err(BusError::Rejected {
                target,
                action,
                reason: reason.clone(),
            });
        }

        self.pending.push(Envelope {
            target,
            action,
            payload: payload.clone(),
        });
        Ok(())
    }

    fn commit(&mut self) {
        self.delivered.append(&mut self.pending);
    }

    fn rollback(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::action::VoteArgs;

    fn vote() -> ActionData {
        ActionData::Vote(VoteArgs {
            voter: Name::from_static("bob"),
            proposal_id: 1,
            approve: true,
            amount: 5,
            comment: String::new(),
            memo: String::new(),
        })
    }

    #[test]
    fn test_commit_and_rollback() {
        let ctr = Name::from_static("menteectr");
        let action = Name::from_static("vote");
        let mut bus = MemoryBus::new();

        bus.send(ctr, action, &vote()).unwrap();
        assert_eq!(bus.pending().len(), 1);
        bus.rollback();
        assert!(bus.pending().is_empty());
        assert!(bus.delivered().is_empty());

        bus.send(ctr, action, &vote()).unwrap();
        bus.commit();
        assert_eq!(bus.delivered().len(), 1);
        assert_eq!(bus.delivered()[0].target, ctr);
    }

    #[test]
    fn test_routes_and_rejections() {
        let ctr = Name::from_static("menteectr");
        let action = Name::from_static("vote");

        let mut bus = MemoryBus::with_routes([ctr]);
        assert!(matches!(
            bus.send(Name::from_static("nobody"), action, &vote()),
            Err(BusError::Unreachable(_))
        ));

        bus.reject(ctr, action, "voting closed");
        let err = bus.send(ctr, action, &vote()).unwrap_err();
        assert_eq!(err.to_string(), "menteectr::vote rejected: voting closed");
        assert!(bus.pending().is_empty());
    }
}
