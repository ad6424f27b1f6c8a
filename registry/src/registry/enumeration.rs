// Item Registry - Enumeration Index
// This module provides the position-indexed token list used for both the
// global enumeration and the per-owner enumerations.
//
// Removal uses swap-and-pop: the last element is moved into the removed
// slot so membership mutation stays O(1). Invariant after every mutation:
// items[position(id)] == id for every member.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};
use super::types::TokenId;

/// Ordered token list with O(1) append, O(1) remove-by-swap-with-last,
/// and O(1) position lookup
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationIndex {
    /// Tokens in enumeration order
    items: Vec<TokenId>,

    /// Recorded position of each token in `items`
    positions: HashMap<TokenId, usize>,
}

impl EnumerationIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens in the index
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check membership
    pub fn contains(&self, token_id: TokenId) -> bool {
        self.positions.contains_key(&token_id)
    }

    /// Get the recorded position of a token
    pub fn position(&self, token_id: TokenId) -> Option<usize> {
        self.positions.get(&token_id).copied()
    }

    /// Get the token at an ordinal position
    pub fn at(&self, index: usize) -> RegistryResult<TokenId> {
        self.items
            .get(index)
            .copied()
            .ok_or(RegistryError::IndexOutOfRange)
    }

    /// Iterate over the tokens in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.items.iter().copied()
    }

    /// Append a token, recording its position as the new last slot
    pub(crate) fn insert(&mut self, token_id: TokenId) {
        self.positions.insert(token_id, self.items.len());
        self.items.push(token_id);
    }

    /// Remove a token by swapping the last element into its slot and
    /// truncating. When the token already occupies the last slot, the
    /// move is skipped and the list is only truncated.
    pub(crate) fn remove(&mut self, token_id: TokenId) -> RegistryResult<()> {
        let position = self
            .positions
            .remove(&token_id)
            .ok_or(RegistryError::TokenNotFound)?;

        let last = self.items.len() - 1;
        if position != last {
            let moved = self.items[last];
            self.items[position] = moved;
            self.positions.insert(moved, position);
        }
        self.items.truncate(last);

        Ok(())
    }
}
