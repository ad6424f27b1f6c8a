// Item Registry - Transfer Protocol
// This module contains the registry's mutating entry points and read
// surface.
//
// Every mutating entry point acquires the reentrancy fence on entry and
// releases it on every exit path. Safe transfer executes under a state
// snapshot: either the ownership mutation and the receiver hook commit
// together, or the snapshot is restored and nothing is visible.

use indexmap::IndexMap;
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::account::Account;

use super::approvals::ApprovalStore;
use super::enumeration::EnumerationIndex;
use super::error::{RegistryError, RegistryResult};
use super::fence::ReentrancyFence;
use super::ledger::OwnershipLedger;
use super::metadata::MetadataStore;
use super::receiver::{Recipient, RECEIVE_ACK};
use super::types::{
    RegistryConfig, RegistryEvent, TokenId, MAX_RECEIVER_DATA_LENGTH, MAX_SUFFIX_LENGTH,
};

// ========================================
// Registry State
// ========================================

/// The synchronized structures mutated by the transfer protocol, plus the
/// mint counter and the event log. Cloning this struct is the snapshot
/// boundary for all-or-nothing safe transfers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RegistryState {
    /// Token -> owner relation and balance counters
    pub(crate) ledger: OwnershipLedger,

    /// Every existing token, in mint order until transfers reorder it
    pub(crate) all_tokens: EnumerationIndex,

    /// Tokens held per owner
    pub(crate) owned_tokens: IndexMap<Account, EnumerationIndex>,

    /// Delegate and operator approvals
    pub(crate) approvals: ApprovalStore,

    /// Metadata suffixes
    pub(crate) metadata: MetadataStore,

    /// Last allocated identity; the next mint returns this + 1
    pub(crate) mint_counter: TokenId,

    /// Events recorded by successful mutations, drained by the caller
    pub(crate) events: Vec<RegistryEvent>,
}

// ========================================
// Registry
// ========================================

/// Reentrancy-safe item registry
pub struct Registry {
    config: RegistryConfig,
    state: RegistryState,
    fence: ReentrancyFence,
    admin: Account,
}

impl Registry {
    /// Create a registry from a validated configuration
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        let admin = config.admin;
        Ok(Self {
            config,
            state: RegistryState::default(),
            fence: ReentrancyFence::new(),
            admin,
        })
    }

    /// Discard all state and return to the freshly constructed registry
    pub fn reset(&mut self) {
        self.state = RegistryState::default();
        self.admin = self.config.admin;
    }

    // ========================================
    // Mint
    // ========================================

    /// Mint a new token to `to`, storing its metadata suffix.
    ///
    /// Open to any caller. Returns the allocated identity; identities are
    /// sequential starting at 1 and never reused.
    pub fn mint(&mut self, to: &Account, suffix: impl Into<String>) -> RegistryResult<TokenId> {
        let _guard = self.fence.try_enter()?;
        let suffix = suffix.into();

        // Step 1: input validation
        if to.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }
        if suffix.len() > MAX_SUFFIX_LENGTH {
            return Err(RegistryError::SuffixTooLong);
        }

        // Step 2: allocate identity
        let token_id = self
            .state
            .mint_counter
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        self.state.mint_counter = token_id;

        // Step 3: ledger entry and balance
        self.state.ledger.set_owner(token_id, *to)?;

        // Step 4: enumeration lists
        self.state.all_tokens.insert(token_id);
        self.state.owned_tokens.entry(*to).or_default().insert(token_id);

        // Step 5: metadata
        self.state.metadata.insert(token_id, suffix)?;

        // Step 6: record event
        self.state.events.push(RegistryEvent::Minted {
            to: *to,
            token_id,
        });

        debug!("minted token {} to {}", token_id, to);
        Ok(token_id)
    }

    // ========================================
    // Transfer
    // ========================================

    /// Transfer a token from `from` to `to`.
    ///
    /// The caller must be the current owner, the token's delegate, or an
    /// operator of the owner. The per-token delegate is cleared; the
    /// global enumeration is untouched.
    pub fn transfer(
        &mut self,
        caller: &Account,
        from: &Account,
        to: &Account,
        token_id: TokenId,
    ) -> RegistryResult<()> {
        let _guard = self.fence.try_enter()?;
        self.transfer_in_place(caller, from, to, token_id)?;
        debug!("transferred token {} from {} to {}", token_id, from, to);
        Ok(())
    }

    /// Transfer with receiver acknowledgment.
    ///
    /// A plain-account recipient behaves exactly like [`Registry::transfer`].
    /// A callback-capable recipient has its acceptance hook invoked after
    /// the ownership mutation; unless the hook returns [`RECEIVE_ACK`],
    /// the whole call rolls back and fails with `ReceiverRejected`. The
    /// hook may attempt nested calls into the registry; the fence refuses
    /// them.
    pub fn safe_transfer(
        &mut self,
        caller: &Account,
        from: &Account,
        to: Recipient<'_>,
        token_id: TokenId,
        data: &[u8],
    ) -> RegistryResult<()> {
        let _guard = self.fence.try_enter()?;

        // Step 1: input validation
        if data.len() > MAX_RECEIVER_DATA_LENGTH {
            return Err(RegistryError::DataTooLong);
        }

        // Step 2: snapshot for all-or-nothing commit
        let destination = to.account();
        let snapshot = self.state.clone();

        // Step 3: ownership mutation before the external call
        let mut result = self.transfer_in_place(caller, from, &destination, token_id);

        // Step 4: acceptance hook for callback-capable recipients
        if result.is_ok() {
            if let Recipient::Hook(_, hook) = to {
                trace!("invoking receiver hook for token {}", token_id);
                result = match hook.on_receive(self, caller, from, token_id, data) {
                    Ok(ack) if ack == RECEIVE_ACK => Ok(()),
                    _ => Err(RegistryError::ReceiverRejected),
                };
            }
        }

        // Step 5: commit or restore the snapshot
        if let Err(err) = result {
            if err == RegistryError::ReceiverRejected {
                warn!("receiver rejected token {}, rolling back", token_id);
            }
            self.state = snapshot;
            return Err(err);
        }

        debug!(
            "safe transferred token {} from {} to {}",
            token_id, from, destination
        );
        Ok(())
    }

    fn transfer_in_place(
        &mut self,
        caller: &Account,
        from: &Account,
        to: &Account,
        token_id: TokenId,
    ) -> RegistryResult<()> {
        // Step 1: resolve the current owner
        let owner = self.state.ledger.owner_of(token_id)?;

        // Step 2: stale sender check
        if owner != *from {
            return Err(RegistryError::OwnerMismatch);
        }

        // Step 3: recipient check
        if to.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }

        // Step 4: authorization
        if !self.state.approvals.is_authorized(caller, &owner, token_id) {
            return Err(RegistryError::NotAuthorized);
        }

        // Step 5: clear the per-token delegate
        self.state.approvals.clear_delegate(token_id);

        // Step 6: reassign owner and move balances
        self.state.ledger.set_owner(token_id, *to)?;

        // Step 7: move between owner enumerations; global list untouched
        self.state
            .owned_tokens
            .get_mut(from)
            .ok_or(RegistryError::TokenNotFound)?
            .remove(token_id)?;
        self.state.owned_tokens.entry(*to).or_default().insert(token_id);

        // Step 8: record event
        self.state.events.push(RegistryEvent::Transferred {
            from: *from,
            to: *to,
            token_id,
        });

        Ok(())
    }

    // ========================================
    // Approvals
    // ========================================

    /// Set or clear the delegate for a token. Only the current owner or
    /// one of the owner's operators may call; the zero account clears.
    pub fn approve(
        &mut self,
        caller: &Account,
        token_id: TokenId,
        delegate: &Account,
    ) -> RegistryResult<()> {
        let _guard = self.fence.try_enter()?;

        let owner = self.state.ledger.owner_of(token_id)?;
        if *caller != owner && !self.state.approvals.is_operator(&owner, caller) {
            return Err(RegistryError::NotAuthorized);
        }

        self.state.approvals.set_delegate(token_id, *delegate);
        self.state.events.push(RegistryEvent::Approved {
            owner,
            delegate: *delegate,
            token_id,
        });

        trace!("token {} delegate set to {}", token_id, delegate);
        Ok(())
    }

    /// Enable or disable an operator over all of the caller's tokens.
    /// Granting oneself operator standing is an accepted no-op.
    pub fn set_operator(
        &mut self,
        caller: &Account,
        operator: &Account,
        enabled: bool,
    ) -> RegistryResult<()> {
        let _guard = self.fence.try_enter()?;

        if caller == operator {
            return Ok(());
        }

        self.state.approvals.set_operator(*caller, *operator, enabled);
        self.state.events.push(RegistryEvent::OperatorSet {
            owner: *caller,
            operator: *operator,
            enabled,
        });

        trace!("operator {} for {} set to {}", operator, caller, enabled);
        Ok(())
    }

    // ========================================
    // Administration
    // ========================================

    /// The current administrator
    pub fn admin(&self) -> Account {
        self.admin
    }

    /// Reassign the administrator designation. Only the current
    /// administrator may call; the designation is checked nowhere else.
    pub fn transfer_admin(&mut self, caller: &Account, new_admin: &Account) -> RegistryResult<()> {
        if *caller != self.admin {
            return Err(RegistryError::NotAuthorized);
        }
        if new_admin.is_zero() {
            return Err(RegistryError::InvalidRecipient);
        }

        let previous = self.admin;
        self.admin = *new_admin;
        self.state.events.push(RegistryEvent::AdminChanged {
            previous,
            current: *new_admin,
        });

        debug!("administrator moved from {} to {}", previous, new_admin);
        Ok(())
    }

    // ========================================
    // Read Surface
    // ========================================

    /// Get the owner of a token
    pub fn owner_of(&self, token_id: TokenId) -> RegistryResult<Account> {
        self.state.ledger.owner_of(token_id)
    }

    /// Check whether a token exists
    pub fn exists(&self, token_id: TokenId) -> bool {
        self.state.ledger.contains(token_id)
    }

    /// Number of tokens held by an account (0 for strangers)
    pub fn balance_of(&self, owner: &Account) -> u64 {
        self.state.ledger.balance_of(owner)
    }

    /// Number of existing tokens
    pub fn total_supply(&self) -> u64 {
        self.state.all_tokens.len() as u64
    }

    /// Token at an ordinal position of the global enumeration
    pub fn token_at(&self, index: usize) -> RegistryResult<TokenId> {
        self.state.all_tokens.at(index)
    }

    /// Token at an ordinal position of an owner's enumeration
    pub fn token_of_owner_at(&self, owner: &Account, index: usize) -> RegistryResult<TokenId> {
        match self.state.owned_tokens.get(owner) {
            Some(tokens) => tokens.at(index),
            None => Err(RegistryError::IndexOutOfRange),
        }
    }

    /// All tokens held by an owner, in enumeration order
    pub fn tokens_of(&self, owner: &Account) -> Vec<TokenId> {
        self.state
            .owned_tokens
            .get(owner)
            .map(|tokens| tokens.iter().collect())
            .unwrap_or_default()
    }

    /// The delegate approved for a token, if any
    pub fn approved_of(&self, token_id: TokenId) -> Option<Account> {
        self.state.approvals.delegate_of(token_id)
    }

    /// Whether `operator` is enabled over all of `owner`'s tokens
    pub fn is_operator(&self, owner: &Account, operator: &Account) -> bool {
        self.state.approvals.is_operator(owner, operator)
    }

    /// The stored metadata suffix of a token
    pub fn suffix_of(&self, token_id: TokenId) -> RegistryResult<&str> {
        self.state.metadata.suffix_of(token_id)
    }

    /// The externally visible descriptor of a token
    pub fn descriptor_of(&self, token_id: TokenId) -> RegistryResult<String> {
        self.state
            .metadata
            .descriptor_of(&self.config.descriptor_prefix, token_id)
    }

    /// The process-wide descriptor prefix
    pub fn descriptor_prefix(&self) -> &str {
        &self.config.descriptor_prefix
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[RegistryEvent] {
        &self.state.events
    }

    /// Drain and return the recorded events
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.state.events)
    }
}
