//! Actions and transactions
//!
//! An [`Action`] names the contract that handles it, the action name, the
//! permission levels that authorize it, and its typed payload. A
//! [`Transaction`] is an ordered list of top-level actions applied as one
//! unit.

use crate::core::{Asset, Name};
use crate::crypto::json_digest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default permission used for every authorization in this crate
pub const ACTIVE: Name = Name::from_static("active");

/// An `actor@permission` pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionLevel {
    pub actor: Name,
    pub permission: Name,
}

impl PermissionLevel {
    pub fn new(actor: Name, permission: Name) -> Self {
        Self { actor, permission }
    }

    /// `actor@active`
    pub fn active(actor: Name) -> Self {
        Self::new(actor, ACTIVE)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.actor, self.permission)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateArgs {
    pub issuer: Name,
    pub maximum_supply: Asset,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueArgs {
    pub to: Name,
    pub quantity: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferArgs {
    pub from: Name,
    pub to: Name,
    pub quantity: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnArgs {
    pub from: Name,
    pub quantity: Asset,
    pub memo: String,
}

/// Proposal fields, passed through to the governance contract unchanged
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposeArgs {
    pub proposer: Name,
    pub slug: String,
    pub ipfs_hash: String,
    pub lang_code: String,
    pub group_id: i64,
    pub comment: String,
    pub memo: String,
}

/// Vote fields, passed through to the governance contract unchanged.
/// `amount` is in whole tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteArgs {
    pub voter: Name,
    pub proposal_id: u64,
    pub approve: bool,
    pub amount: u64,
    pub comment: String,
    pub memo: String,
}

/// Typed action payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionData {
    Create(CreateArgs),
    Issue(IssueArgs),
    Transfer(TransferArgs),
    Burn(BurnArgs),
    Propose(ProposeArgs),
    Vote(VoteArgs),
}

/// A single contract invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Contract that handles the action
    pub account: Name,
    pub name: Name,
    pub authorization: Vec<PermissionLevel>,
    pub data: ActionData,
}

impl Action {
    pub fn new(
        account: Name,
        name: Name,
        authorization: Vec<PermissionLevel>,
        data: ActionData,
    ) -> Self {
        Self {
            account,
            name,
            authorization,
            data,
        }
    }

    /// Whether `actor` appears in this action's authorization list
    pub fn authorized_by(&self, actor: Name) -> bool {
        self.authorization.iter().any(|level| level.actor == actor)
    }
}

/// Ordered top-level actions applied atomically
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub actions: Vec<Action>,
}

impl Transaction {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// Single-action transaction
    pub fn single(action: Action) -> Self {
        Self::new(vec![action])
    }

    /// Hex SHA-256 of the JSON encoding
    pub fn id(&self) -> Result<String, serde_json::Error> {
        json_digest(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(memo: &str) -> Action {
        let alice = Name::from_static("alice");
        Action::new(
            Name::from_static("menteentwk"),
            Name::from_static("transfer"),
            vec![PermissionLevel::active(alice)],
            ActionData::Transfer(TransferArgs {
                from: alice,
                to: Name::from_static("bob"),
                quantity: "1.000 MNT".parse().unwrap(),
                memo: memo.to_string(),
            }),
        )
    }

    #[test]
    fn test_permission_display() {
        let level = PermissionLevel::active(Name::from_static("alice"));
        assert_eq!(level.to_string(), "alice@active");
    }

    #[test]
    fn test_authorized_by() {
        let action = transfer("");
        assert!(action.authorized_by(Name::from_static("alice")));
        assert!(!action.authorized_by(Name::from_static("bob")));
    }

    #[test]
    fn test_transaction_id_is_deterministic() {
        let a = Transaction::single(transfer("x"));
        let b = Transaction::single(transfer("x"));
        let c = Transaction::single(transfer("y"));

        assert_eq!(a.id().unwrap(), b.id().unwrap());
        assert_ne!(a.id().unwrap(), c.id().unwrap());
        assert_eq!(a.id().unwrap().len(), 64);
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_value(transfer("hi")).unwrap();
        assert_eq!(json["name"], "transfer");
        assert_eq!(json["authorization"][0]["actor"], "alice");
        assert_eq!(json["data"]["type"], "transfer");
        assert_eq!(json["data"]["quantity"], "1.000 MNT");
    }
}
