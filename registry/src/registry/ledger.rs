// Item Registry - Ownership Ledger
// This module tracks the token -> owner relation and the per-owner balance
// counters derived from it.
//
// The ledger never checks authorization; that is the transfer protocol's
// job. It only refuses the reserved zero account as a holder.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::account::Account;

use super::error::{RegistryError, RegistryResult};
use super::types::TokenId;

/// Token ownership and balance bookkeeping
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipLedger {
    /// Current owner of each existing token
    owners: HashMap<TokenId, Account>,

    /// Number of tokens held per account
    balances: IndexMap<Account, u64>,
}

impl OwnershipLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the owner of a token
    pub fn owner_of(&self, token_id: TokenId) -> RegistryResult<Account> {
        self.owners
            .get(&token_id)
            .copied()
            .ok_or(RegistryError::TokenNotFound)
    }

    /// Check whether a token has an entry
    pub fn contains(&self, token_id: TokenId) -> bool {
        self.owners.contains_key(&token_id)
    }

    /// Get the number of tokens held by an account (0 for strangers)
    pub fn balance_of(&self, owner: &Account) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Number of ledger entries
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Assign a token to a new owner, creating the entry if it does not
    /// exist yet. Returns the previous owner, if any. Balances of both
    /// sides are adjusted. Refuses the zero account as the new holder.
    pub(crate) fn set_owner(
        &mut self,
        token_id: TokenId,
        new_owner: Account,
    ) -> RegistryResult<Option<Account>> {
        if new_owner.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }

        let previous = self.owners.insert(token_id, new_owner);
        if let Some(prev) = previous {
            self.decrement_balance(&prev)?;
        }
        self.increment_balance(&new_owner)?;

        Ok(previous)
    }

    fn increment_balance(&mut self, owner: &Account) -> RegistryResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_add(1).ok_or(RegistryError::Overflow)?;
        Ok(*balance)
    }

    fn decrement_balance(&mut self, owner: &Account) -> RegistryResult<u64> {
        let balance = self.balances.entry(*owner).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(RegistryError::Overflow)?;
        Ok(*balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Account {
        Account::new([byte; 32])
    }

    #[test]
    fn test_set_owner_creates_entry() {
        let mut ledger = OwnershipLedger::new();
        let alice = account(1);

        let previous = ledger.set_owner(1, alice).unwrap();
        assert!(previous.is_none());
        assert_eq!(ledger.owner_of(1), Ok(alice));
        assert_eq!(ledger.balance_of(&alice), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_set_owner_reassigns() {
        let mut ledger = OwnershipLedger::new();
        let alice = account(1);
        let bob = account(2);

        ledger.set_owner(1, alice).unwrap();
        let previous = ledger.set_owner(1, bob).unwrap();

        assert_eq!(previous, Some(alice));
        assert_eq!(ledger.owner_of(1), Ok(bob));
        assert_eq!(ledger.balance_of(&alice), 0);
        assert_eq!(ledger.balance_of(&bob), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_set_owner_zero_account_fails() {
        let mut ledger = OwnershipLedger::new();
        assert_eq!(
            ledger.set_owner(1, Account::ZERO),
            Err(RegistryError::InvalidRecipient)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_owner_of_missing_token() {
        let ledger = OwnershipLedger::new();
        assert_eq!(ledger.owner_of(42), Err(RegistryError::TokenNotFound));
    }

    #[test]
    fn test_balance_of_stranger_is_zero() {
        let ledger = OwnershipLedger::new();
        assert_eq!(ledger.balance_of(&account(9)), 0);
    }

    #[test]
    fn test_balances_match_entries() {
        let mut ledger = OwnershipLedger::new();
        let alice = account(1);
        let bob = account(2);

        for id in 1..=5 {
            ledger.set_owner(id, alice).unwrap();
        }
        ledger.set_owner(3, bob).unwrap();
        ledger.set_owner(5, bob).unwrap();

        assert_eq!(ledger.balance_of(&alice), 3);
        assert_eq!(ledger.balance_of(&bob), 2);
        assert_eq!(ledger.len(), 5);
    }
}
