// Item Registry - Reentrancy Fence
// This module guards the registry's mutating entry points against nested
// calls made from inside a receiver hook.
//
// The fence is blanket: while held, every mutating entry point is
// refused, not only the one that acquired it. Release happens on guard
// drop, so every exit path (success, failure, hook rejection) releases.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::error::{RegistryError, RegistryResult};

/// Entered-state of the transfer protocol
#[derive(Debug, Default)]
pub(crate) struct ReentrancyFence {
    entered: Arc<AtomicBool>,
}

impl ReentrancyFence {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether the fence is currently held
    pub(crate) fn is_entered(&self) -> bool {
        self.entered.load(Ordering::SeqCst)
    }

    /// Acquire the fence, failing if it is already held
    pub(crate) fn try_enter(&self) -> RegistryResult<FenceGuard> {
        if self.entered.swap(true, Ordering::SeqCst) {
            return Err(RegistryError::ReentrantCall);
        }
        Ok(FenceGuard {
            entered: Arc::clone(&self.entered),
        })
    }
}

/// Scoped fence acquisition; releases on drop
pub(crate) struct FenceGuard {
    entered: Arc<AtomicBool>,
}

impl Drop for FenceGuard {
    fn drop(&mut self) {
        self.entered.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_release() {
        let fence = ReentrancyFence::new();
        assert!(!fence.is_entered());

        {
            let _guard = fence.try_enter().unwrap();
            assert!(fence.is_entered());
        }

        assert!(!fence.is_entered());
    }

    #[test]
    fn test_nested_enter_fails() {
        let fence = ReentrancyFence::new();
        let _guard = fence.try_enter().unwrap();
        assert_eq!(
            fence.try_enter().err(),
            Some(RegistryError::ReentrantCall)
        );
    }

    #[test]
    fn test_release_on_error_path() {
        let fence = ReentrancyFence::new();
        let result: RegistryResult<()> = (|| {
            let _guard = fence.try_enter()?;
            Err(RegistryError::TokenNotFound)
        })();
        assert!(result.is_err());
        assert!(!fence.is_entered());
    }
}
