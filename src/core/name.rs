//! Account names
//!
//! Identities are 64-bit base-32 names: up to 12 characters from
//! `.12345abcdefghijklmnopqrstuvwxyz`, plus an optional 13th character
//! restricted to `.12345abcdefghij` (it only has 4 bits left).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of characters in a name
pub const MAX_NAME_LEN: usize = 13;

const CHARMAP: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Name parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is longer than 13 characters: {0}")]
    TooLong(String),
    #[error("Invalid character {ch:?} in name {name}")]
    InvalidChar { name: String, ch: char },
    #[error("Thirteenth character of {0} must be in [.1-5a-j]")]
    InvalidLastChar(String),
}

/// An account identity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(u64);

impl Name {
    /// Build a name from its raw encoding
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Raw 64-bit encoding
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Encode a name literal at compile time.
    ///
    /// Only meant for constants: an invalid literal fails const evaluation.
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() <= MAX_NAME_LEN, "name literal too long");

        let mut value = 0u64;
        let mut i = 0;
        while i < bytes.len() {
            let v = match char_to_value(bytes[i]) {
                Some(v) => v,
                None => panic!("invalid character in name literal"),
            };
            if i < 12 {
                value |= (v & 0x1f) << (64 - 5 * (i + 1));
            } else {
                assert!(v <= 0x0f, "invalid thirteenth character in name literal");
                value |= v;
            }
            i += 1;
        }
        Self(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

const fn char_to_value(c: u8) -> Option<u64> {
    match c {
        b'.' => Some(0),
        b'1'..=b'5' => Some((c - b'1') as u64 + 1),
        b'a'..=b'z' => Some((c - b'a') as u64 + 6),
        _ => None,
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong(s.to_string()));
        }

        let mut value = 0u64;
        for (i, c) in s.bytes().enumerate() {
            let v = char_to_value(c).ok_or_else(|| NameError::InvalidChar {
                name: s.to_string(),
                ch: c as char,
            })?;

            if i < 12 {
                value |= (v & 0x1f) << (64 - 5 * (i + 1));
            } else {
                if v > 0x0f {
                    return Err(NameError::InvalidLastChar(s.to_string()));
                }
                value |= v;
            }
        }

        Ok(Self(value))
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; MAX_NAME_LEN];
        let mut tmp = self.0;
        for i in 0..MAX_NAME_LEN {
            let (mask, shift) = if i == 0 { (0x0f, 4) } else { (0x1f, 5) };
            out[MAX_NAME_LEN - 1 - i] = CHARMAP[(tmp & mask) as usize];
            tmp >>= shift;
        }

        let len = out.iter().rposition(|&c| c != b'.').map_or(0, |p| p + 1);
        // CHARMAP is pure ASCII
        f.write_str(std::str::from_utf8(&out[..len]).map_err(|_| fmt::Error)?)
    }
}
