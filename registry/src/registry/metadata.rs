// Item Registry - Metadata Store
// This module stores each token's metadata suffix and resolves the
// externally visible descriptor.
//
// A suffix is written once at mint time and immutable thereafter. The
// descriptor is the process-wide prefix concatenated with the suffix;
// an empty suffix falls back to the token id in decimal form. The
// fallback is an observable policy clients rely on, not an omission.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};
use super::types::{TokenId, MAX_SUFFIX_LENGTH};

/// Per-token metadata suffixes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataStore {
    suffixes: HashMap<TokenId, String>,
}

impl MetadataStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stored suffix for a token
    pub fn suffix_of(&self, token_id: TokenId) -> RegistryResult<&str> {
        self.suffixes
            .get(&token_id)
            .map(String::as_str)
            .ok_or(RegistryError::TokenNotFound)
    }

    /// Resolve the externally visible descriptor for a token
    pub fn descriptor_of(&self, prefix: &str, token_id: TokenId) -> RegistryResult<String> {
        let suffix = self.suffix_of(token_id)?;
        if suffix.is_empty() {
            Ok(format!("{}{}", prefix, token_id))
        } else {
            Ok(format!("{}{}", prefix, suffix))
        }
    }

    /// Store the suffix for a freshly minted token
    pub(crate) fn insert(&mut self, token_id: TokenId, suffix: String) -> RegistryResult<()> {
        if suffix.len() > MAX_SUFFIX_LENGTH {
            return Err(RegistryError::SuffixTooLong);
        }
        self.suffixes.insert(token_id, suffix);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_concatenates_suffix() {
        let mut store = MetadataStore::new();
        store.insert(1, "x1".to_string()).unwrap();

        assert_eq!(
            store.descriptor_of("relic://item/", 1),
            Ok("relic://item/x1".to_string())
        );
    }

    #[test]
    fn test_empty_suffix_falls_back_to_decimal_id() {
        let mut store = MetadataStore::new();
        store.insert(42, String::new()).unwrap();

        assert_eq!(
            store.descriptor_of("relic://item/", 42),
            Ok("relic://item/42".to_string())
        );
    }

    #[test]
    fn test_descriptor_of_missing_token() {
        let store = MetadataStore::new();
        assert_eq!(
            store.descriptor_of("relic://item/", 1),
            Err(RegistryError::TokenNotFound)
        );
    }

    #[test]
    fn test_suffix_too_long() {
        let mut store = MetadataStore::new();
        let result = store.insert(1, "x".repeat(MAX_SUFFIX_LENGTH + 1));
        assert_eq!(result, Err(RegistryError::SuffixTooLong));
        assert!(store.suffix_of(1).is_err());
    }
}
