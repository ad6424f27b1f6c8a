// Item Registry - Error Codes
// This module defines all error codes for registry operations.
//
// Error Code Ranges:
// - 0: Success
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 400-499: Enumeration errors
// - 500-599: Operation errors
// - 600-699: Safe transfer errors
// - 900-999: System errors

use thiserror::Error;

/// Registry operation result type
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum RegistryError {
    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not authorized")]
    NotAuthorized = 200,

    #[error("Sender is not the current owner")]
    OwnerMismatch = 201,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid recipient")]
    InvalidRecipient = 300,

    #[error("Metadata suffix too long")]
    SuffixTooLong = 301,

    #[error("Descriptor prefix too long")]
    PrefixTooLong = 302,

    #[error("Data too long")]
    DataTooLong = 303,

    // ========================================
    // Enumeration errors (400-499)
    // ========================================
    #[error("Index out of range")]
    IndexOutOfRange = 400,

    // ========================================
    // Operation errors (500-599)
    // ========================================
    #[error("Reentrant call")]
    ReentrantCall = 500,

    // ========================================
    // Safe transfer errors (600-699)
    // ========================================
    #[error("Receiver rejected the token")]
    ReceiverRejected = 600,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl RegistryError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::TokenNotFound),
            200 => Some(Self::NotAuthorized),
            201 => Some(Self::OwnerMismatch),
            300 => Some(Self::InvalidRecipient),
            301 => Some(Self::SuffixTooLong),
            302 => Some(Self::PrefixTooLong),
            303 => Some(Self::DataTooLong),
            400 => Some(Self::IndexOutOfRange),
            500 => Some(Self::ReentrantCall),
            600 => Some(Self::ReceiverRejected),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let codes = [
            RegistryError::TokenNotFound,
            RegistryError::NotAuthorized,
            RegistryError::OwnerMismatch,
            RegistryError::InvalidRecipient,
            RegistryError::SuffixTooLong,
            RegistryError::PrefixTooLong,
            RegistryError::DataTooLong,
            RegistryError::IndexOutOfRange,
            RegistryError::ReentrantCall,
            RegistryError::ReceiverRejected,
            RegistryError::Overflow,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in codes {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let err = RegistryError::OwnerMismatch;
        let code = err.code();
        let recovered = RegistryError::from_code(code);
        assert_eq!(recovered, Some(err));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(RegistryError::from_code(9999), None);
    }
}
