// Item Registry - Receiver Interface
// This module defines the acceptance hook consulted on safe transfer to a
// callback-capable destination, and the recipient capability that decides
// whether the hook is consulted at all.

use crate::account::Account;

use super::error::RegistryResult;
use super::types::TokenId;

/// Acknowledgment value returned by a receiver hook
pub type ReceiveAck = [u8; 4];

/// The fixed acknowledgment a hook must return to accept delivery. Any
/// other value, or any error raised by the hook, is rejection.
pub const RECEIVE_ACK: ReceiveAck = *b"RCVD";

/// Acceptance hook for callback-capable destinations.
///
/// The hook receives mutable access to the registry and may attempt to
/// call back into it; the reentrancy fence refuses any such nested
/// mutating call while the outer transfer is in flight.
pub trait ItemReceiver {
    /// Called after the ownership mutation of a safe transfer, before it
    /// commits. Return [`RECEIVE_ACK`] to accept.
    fn on_receive(
        &mut self,
        registry: &mut super::protocol::Registry,
        operator: &Account,
        from: &Account,
        token_id: TokenId,
        data: &[u8],
    ) -> RegistryResult<ReceiveAck>;
}

/// Destination of a safe transfer.
///
/// A plain account receives without any hook; a callback-capable
/// destination carries its acceptance hook. The capability is decided by
/// the caller's choice of variant, never by runtime type inspection.
pub enum Recipient<'a> {
    /// Plain account; the acceptance hook is skipped
    Account(Account),

    /// Callback-capable destination with its acceptance hook
    Hook(Account, &'a mut dyn ItemReceiver),
}

impl Recipient<'_> {
    /// The destination account, regardless of capability
    pub fn account(&self) -> Account {
        match self {
            Recipient::Account(account) => *account,
            Recipient::Hook(account, _) => *account,
        }
    }
}
