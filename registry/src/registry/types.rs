// Item Registry - Core Types
// This module defines shared types, protocol constants, and the registry
// configuration.

use serde::{Deserialize, Serialize};

use crate::account::Account;

use super::error::{RegistryError, RegistryResult};

// ========================================
// Protocol Constants
// ========================================

/// Token identity. Allocated sequentially starting at 1; 0 is reserved
/// as "no token".
pub type TokenId = u64;

/// Maximum metadata suffix length (bytes)
pub const MAX_SUFFIX_LENGTH: usize = 512;

/// Maximum descriptor prefix length (bytes)
pub const MAX_PREFIX_LENGTH: usize = 256;

/// Maximum extra data passed to a receiver hook (bytes)
pub const MAX_RECEIVER_DATA_LENGTH: usize = 4096;

// ========================================
// Registry Events
// ========================================

/// Events recorded by the registry on every successful mutation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new token was created
    Minted {
        /// Recipient of the new token
        to: Account,
        /// The allocated token id
        token_id: TokenId,
    },

    /// A token changed owner
    Transferred {
        /// Previous owner
        from: Account,
        /// New owner
        to: Account,
        /// The token that moved
        token_id: TokenId,
    },

    /// A per-token delegate was set or cleared
    Approved {
        /// Owner granting the approval
        owner: Account,
        /// Delegate, or the zero account when cleared
        delegate: Account,
        /// The token the approval covers
        token_id: TokenId,
    },

    /// An owner-wide operator was enabled or disabled
    OperatorSet {
        /// Owner granting the permission
        owner: Account,
        /// Operator account
        operator: Account,
        /// Whether the operator is enabled
        enabled: bool,
    },

    /// The administrator designation moved
    AdminChanged {
        /// Previous administrator
        previous: Account,
        /// New administrator
        current: Account,
    },
}

// ========================================
// Registry Configuration
// ========================================

/// Configuration for a registry instance
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Process-wide descriptor prefix, concatenated with each token's
    /// metadata suffix (max 256 bytes)
    pub descriptor_prefix: String,

    /// Administrator account
    pub admin: Account,
}

impl RegistryConfig {
    /// Create a new configuration with an empty descriptor prefix
    pub fn new(admin: Account) -> Self {
        Self {
            descriptor_prefix: String::new(),
            admin,
        }
    }

    /// Set the descriptor prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.descriptor_prefix = prefix.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RegistryResult<()> {
        if self.descriptor_prefix.len() > MAX_PREFIX_LENGTH {
            return Err(RegistryError::PrefixTooLong);
        }
        if self.admin.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_admin() -> Account {
        Account::new([1u8; 32])
    }

    #[test]
    fn test_config_validation() {
        let config = RegistryConfig::new(test_admin()).with_prefix("relic://item/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_prefix_too_long() {
        let config =
            RegistryConfig::new(test_admin()).with_prefix("x".repeat(MAX_PREFIX_LENGTH + 1));
        assert_eq!(config.validate(), Err(RegistryError::PrefixTooLong));
    }

    #[test]
    fn test_config_zero_admin() {
        let config = RegistryConfig::new(Account::ZERO);
        assert_eq!(config.validate(), Err(RegistryError::InvalidRecipient));
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = RegistryEvent::Transferred {
            from: test_admin(),
            to: Account::new([2u8; 32]),
            token_id: 7,
        };
        let json = serde_json::to_string(&event).unwrap();
        let decoded: RegistryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }
}
