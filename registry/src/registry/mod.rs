// Item Registry
// This module provides the reentrancy-safe non-fungible item registry.
//
// Features:
// - Sequential identity allocation starting at 1 (0 reserved)
// - Exclusive ownership with per-owner balance counters
// - O(1) global and per-owner enumeration via swap-and-pop lists
// - Per-token delegates (auto-cleared on transfer) and owner-wide operators
// - Safe transfer with receiver acceptance hook and full rollback
// - Blanket reentrancy fence over every mutating entry point
//
// Module Structure:
// - error: Error codes and types
// - types: Shared types, protocol constants, configuration
// - ledger: Ownership and balance bookkeeping
// - enumeration: Position-indexed token lists
// - approvals: Delegate and operator store
// - metadata: Suffix storage and descriptor resolution
// - fence: Reentrancy fence
// - receiver: Receiver hook interface
// - protocol: The transfer protocol entry points

mod approvals;
mod enumeration;
mod error;
mod fence;
mod ledger;
mod metadata;
mod protocol;
mod receiver;
mod types;

pub use approvals::*;
pub use enumeration::*;
pub use error::*;
pub use ledger::*;
pub use metadata::*;
pub use protocol::*;
pub use receiver::*;
pub use types::*;
