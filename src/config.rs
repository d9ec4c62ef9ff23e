//! Contract configuration
//!
//! Defaults describe the deployed MNT contract. A JSON file may override any
//! subset of fields.

use crate::core::{Name, Symbol, SymbolCode};
use crate::runtime::action::ACTIVE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Staking relay constants
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Governance contract that receives stakes and forwarded calls
    pub staking_contract: Name,
    pub propose_action: Name,
    pub vote_action: Name,
    /// Permission used on forwarded calls
    pub permission: Name,
    pub stake_symbol: Symbol,
    /// Stake for a proposal, in whole tokens
    pub propose_stake: i64,
    /// Minor units per whole token
    pub precision_multiplier: i64,
    pub stake_memo: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            staking_contract: Name::from_static("menteectr"),
            propose_action: Name::from_static("propose2"),
            vote_action: Name::from_static("vote"),
            permission: ACTIVE,
            stake_symbol: Symbol::new(SymbolCode::from_static("MNT"), 3),
            propose_stake: 35,
            precision_multiplier: 1000,
            stake_memo: "stake for vote".to_string(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stake_symbol.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "invalid stake symbol {}",
                self.stake_symbol
            )));
        }
        if self.propose_stake <= 0 {
            return Err(ConfigError::Invalid(
                "propose_stake must be positive".to_string(),
            ));
        }
        if self.stake_symbol.unit() != Some(self.precision_multiplier) {
            return Err(ConfigError::Invalid(format!(
                "precision_multiplier {} does not match {}",
                self.precision_multiplier, self.stake_symbol
            )));
        }
        if self
            .propose_stake
            .checked_mul(self.precision_multiplier)
            .is_none()
        {
            return Err(ConfigError::Invalid(
                "propose_stake overflows in minor units".to_string(),
            ));
        }
        Ok(())
    }
}

/// Token contract configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Account the contract is deployed on; also the controller for `create`
    pub account: Name,
    pub max_memo_bytes: usize,
    /// Maximum nesting of forwarded calls
    pub max_inline_depth: u32,
    pub relay: RelayConfig,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            account: Name::from_static("menteentwk"),
            max_memo_bytes: 256,
            max_inline_depth: 4,
            relay: RelayConfig::default(),
        }
    }
}

impl ContractConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.is_empty() {
            return Err(ConfigError::Invalid("account must be set".to_string()));
        }
        if self.account == self.relay.staking_contract {
            return Err(ConfigError::Invalid(
                "staking contract must differ from the token contract".to_string(),
            ));
        }
        self.relay.validate()
    }
}
