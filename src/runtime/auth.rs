//! Host capabilities: signature checks and account existence
//!
//! Signature verification belongs to the host. The runtime only asks
//! whether an identity authorized the transaction and whether an account
//! exists.

use crate::core::Name;
use crate::token::TokenError;
use std::collections::BTreeSet;

/// Answers whether an identity has authorized the current transaction
pub trait Authorizer {
    /// Fails with `Unauthorized` when `identity` did not sign
    fn require(&self, identity: Name) -> Result<(), TokenError>;
}

/// Answers whether an account exists on the host
pub trait AccountDirectory {
    fn exists(&self, account: Name) -> bool;
}

/// Identities whose signatures accompany a transaction
#[derive(Clone, Debug, Default)]
pub struct SignerSet {
    signers: BTreeSet<Name>,
}

impl SignerSet {
    pub fn new<I: IntoIterator<Item = Name>>(signers: I) -> Self {
        Self {
            signers: signers.into_iter().collect(),
        }
    }

    pub fn contains(&self, identity: Name) -> bool {
        self.signers.contains(&identity)
    }
}

impl Authorizer for SignerSet {
    fn require(&self, identity: Name) -> Result<(), TokenError> {
        if self.contains(identity) {
            Ok(())
        } else {
            Err(TokenError::Unauthorized(identity))
        }
    }
}

/// In-memory set of existing accounts
#[derive(Clone, Debug, Default)]
pub struct AccountSet {
    accounts: BTreeSet<Name>,
}

impl AccountSet {
    pub fn new<I: IntoIterator<Item = Name>>(accounts: I) -> Self {
        Self {
            accounts: accounts.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, account: Name) -> bool {
        self.accounts.insert(account)
    }
}

impl AccountDirectory for AccountSet {
    fn exists(&self, account: Name) -> bool {
        self.accounts.contains(&account)
    }
}
