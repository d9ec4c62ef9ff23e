//! MNT Token: a fungible-token ledger with a governance staking relay
//!
//! This crate provides:
//! - Account names and symbols encoded as 64-bit values
//! - Checked fixed-point assets
//! - A supply registry and per-owner balance rows
//! - `create` / `issue` / `transfer` / `burn` token actions
//! - `propose` / `vote`, which stake MNT and forward to a governance contract
//! - A transactional runtime: every action and forwarded call commits or
//!   rolls back together
//!
//! # Example
//!
//! ```rust
//! use mnt_token::config::ContractConfig;
//! use mnt_token::core::{Name, SymbolCode};
//! use mnt_token::runtime::{
//!     AccountSet, Action, ActionData, CreateArgs, IssueArgs, MemoryBus, PermissionLevel, Runtime,
//!     SignerSet, Transaction,
//! };
//! use mnt_token::token::{TokenContract, CREATE, ISSUE};
//!
//! let contract = TokenContract::new(ContractConfig::default()).unwrap();
//! let token = contract.account();
//! let alice = Name::from_static("alice");
//! let bob = Name::from_static("bob");
//! let mut runtime = Runtime::new(contract, AccountSet::new([token, alice, bob]), MemoryBus::new());
//!
//! // Create and issue in one transaction
//! let tx = Transaction::new(vec![
//!     Action::new(
//!         token,
//!         CREATE,
//!         vec![PermissionLevel::active(token)],
//!         ActionData::Create(CreateArgs {
//!             issuer: alice,
//!             maximum_supply: "1000.000 MNT".parse().unwrap(),
//!         }),
//!     ),
//!     Action::new(
//!         token,
//!         ISSUE,
//!         vec![PermissionLevel::active(alice)],
//!         ActionData::Issue(IssueArgs {
//!             to: bob,
//!             quantity: "25.000 MNT".parse().unwrap(),
//!             memo: "welcome".to_string(),
//!         }),
//!     ),
//! ]);
//! let receipt = runtime.push_transaction(&tx, &SignerSet::new([token, alice])).unwrap();
//! println!("Committed {}", receipt.id);
//!
//! let mnt = SymbolCode::from_static("MNT");
//! assert_eq!(runtime.contract().get_balance(bob, mnt).unwrap().to_string(), "25.000 MNT");
//! ```

pub mod config;
pub mod core;
pub mod crypto;
pub mod runtime;
pub mod token;

// Re-export commonly used types
pub use config::{ConfigError, ContractConfig, RelayConfig};
pub use core::{Asset, Name, Symbol, SymbolCode};
pub use runtime::{
    AccountDirectory, Action, ActionData, Authorizer, MemoryBus, MessageBus, PermissionLevel,
    Runtime, Transaction, TransactionReceipt,
};
pub use token::{TokenContract, TokenError, TokenState};
