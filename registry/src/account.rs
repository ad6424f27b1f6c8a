// Account Primitive
// This module defines the opaque account reference used as the owner type
// throughout the registry.
//
// The zero account is reserved: it means "no owner" and is never a valid
// holder, recipient, or administrator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Size of an account reference in bytes
pub const ACCOUNT_SIZE: usize = 32;

/// Opaque account reference (e.g. an address)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Account(#[serde(with = "hex")] [u8; ACCOUNT_SIZE]);

impl Account {
    /// The reserved zero account, meaning "no owner"
    pub const ZERO: Account = Account([0u8; ACCOUNT_SIZE]);

    /// Create an account from raw bytes
    pub const fn new(bytes: [u8; ACCOUNT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes of this account
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_SIZE] {
        &self.0
    }

    /// Check if this is the reserved zero account
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ACCOUNT_SIZE]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", hex::encode(self.0))
    }
}

impl FromStr for Account {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; ACCOUNT_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl From<[u8; ACCOUNT_SIZE]> for Account {
    fn from(bytes: [u8; ACCOUNT_SIZE]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_account() {
        assert!(Account::ZERO.is_zero());
        assert!(!Account::new([1u8; ACCOUNT_SIZE]).is_zero());
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let account = Account::new([0xabu8; ACCOUNT_SIZE]);
        let encoded = account.to_string();
        assert_eq!(encoded.len(), ACCOUNT_SIZE * 2);

        let parsed = Account::from_str(&encoded).unwrap();
        assert_eq!(parsed, account);
    }

    #[test]
    fn test_parse_invalid_length() {
        assert!(Account::from_str("abcd").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let account = Account::new([7u8; ACCOUNT_SIZE]);
        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(json, format!("\"{}\"", account));

        let decoded: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, account);
    }
}
