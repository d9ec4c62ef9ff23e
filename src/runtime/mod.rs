//! Host runtime
//!
//! Everything the token contract needs from its host:
//! - Actions, permission levels and transactions
//! - Authorization and account-existence capabilities
//! - A message bus for calls to other contracts
//! - The unit of work that applies a transaction atomically

pub mod action;
pub mod auth;
pub mod bus;
pub mod context;
pub mod executor;

pub use action::{
    Action, ActionData, BurnArgs, CreateArgs, IssueArgs, PermissionLevel, ProposeArgs,
    Transaction, TransferArgs, VoteArgs, ACTIVE,
};
pub use auth::{AccountDirectory, AccountSet, Authorizer, SignerSet};
pub use bus::{BusError, Envelope, MemoryBus, MessageBus};
pub use context::ApplyContext;
pub use executor::{ActionTrace, Runtime, TransactionReceipt};
