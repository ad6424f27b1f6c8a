// Item Registry - Approval Store
// This module tracks per-token delegates and owner-wide operators.
//
// A per-token delegate is cleared by every successful transfer; operator
// grants persist across transfers.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::account::Account;

use super::types::TokenId;

/// Delegate and operator bookkeeping
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStore {
    /// Per-token delegate; absent means no delegate
    delegates: HashMap<TokenId, Account>,

    /// Operators enabled per owner
    operators: HashMap<Account, HashSet<Account>>,
}

impl ApprovalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the delegate approved for a token, if any
    pub fn delegate_of(&self, token_id: TokenId) -> Option<Account> {
        self.delegates.get(&token_id).copied()
    }

    /// Check whether an operator is enabled for an owner
    pub fn is_operator(&self, owner: &Account, operator: &Account) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(operator))
            .unwrap_or(false)
    }

    /// Check whether a spender may move a token held by `owner`:
    /// the owner themself, the token's delegate, or one of the owner's
    /// operators.
    pub fn is_authorized(&self, spender: &Account, owner: &Account, token_id: TokenId) -> bool {
        if spender == owner {
            return true;
        }
        if self.delegate_of(token_id) == Some(*spender) {
            return true;
        }
        self.is_operator(owner, spender)
    }

    /// Set the delegate for a token. The zero account clears the entry.
    pub(crate) fn set_delegate(&mut self, token_id: TokenId, delegate: Account) {
        if delegate.is_zero() {
            self.delegates.remove(&token_id);
        } else {
            self.delegates.insert(token_id, delegate);
        }
    }

    /// Clear the delegate for a token
    pub(crate) fn clear_delegate(&mut self, token_id: TokenId) {
        self.delegates.remove(&token_id);
    }

    /// Enable or disable an operator for an owner
    pub(crate) fn set_operator(&mut self, owner: Account, operator: Account, enabled: bool) {
        if enabled {
            self.operators.entry(owner).or_default().insert(operator);
        } else if let Some(operators) = self.operators.get_mut(&owner) {
            operators.remove(&operator);
            if operators.is_empty() {
                self.operators.remove(&owner);
            }
        }
    }
}
