//! Cryptographic utilities
//!
//! SHA-256 hashing for transaction ids. Signature verification is left to
//! the host and reaches the runtime through [`crate::runtime::Authorizer`].

pub mod hash;

pub use hash::{json_digest, sha256, sha256_hex};
