//! Fungible token ledger with a governance staking relay
//!
//! Provides:
//! - A supply registry (one record per symbol)
//! - Per-owner balance rows that disappear at zero
//! - `create` / `issue` / `transfer` / `burn` actions
//! - `propose` / `vote`, which stake tokens and forward to governance
//!
//! # Example
//!
//! ```rust
//! use mnt_token::config::ContractConfig;
//! use mnt_token::core::{Name, SymbolCode};
//! use mnt_token::runtime::{
//!     AccountSet, Action, ActionData, CreateArgs, MemoryBus, PermissionLevel, Runtime, SignerSet,
//! };
//! use mnt_token::token::{TokenContract, CREATE};
//!
//! let contract = TokenContract::new(ContractConfig::default()).unwrap();
//! let token = contract.account();
//! let alice = Name::from_static("alice");
//! let mut runtime = Runtime::new(contract, AccountSet::new([token, alice]), MemoryBus::new());
//!
//! let create = Action::new(
//!     token,
//!     CREATE,
//!     vec![PermissionLevel::active(token)],
//!     ActionData::Create(CreateArgs {
//!         issuer: alice,
//!         maximum_supply: "1000.000 MNT".parse().unwrap(),
//!     }),
//! );
//! runtime.push_action(create, &SignerSet::new([token])).unwrap();
//!
//! let supply = runtime.contract().get_supply(SymbolCode::from_static("MNT")).unwrap();
//! assert_eq!(supply.to_string(), "0.000 MNT");
//! ```

pub mod accounts;
pub mod contract;
pub mod error;
pub mod relay;
pub mod state;
pub mod stats;

pub use accounts::{AccountLedger, AccountRow};
pub use contract::{TokenContract, BURN, CREATE, ISSUE, PROPOSE, TRANSFER, VOTE};
pub use error::TokenError;
pub use relay::StakingRelay;
pub use state::{InvariantViolation, TokenState};
pub use stats::{CurrencyStats, SupplyRegistry};
