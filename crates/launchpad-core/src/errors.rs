//! # Launchpad Error Types
//!
//! Every public operation reports failure through [`LaunchpadError`]. A
//! returned error means the operation was rejected as a whole: no registry,
//! shared object, owned object or caller payment was modified.

use thiserror::Error;

use crate::types::ObjectId;

/// Errors raised by the registry and exchange engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchpadError {
    // ========================================================================
    // Creation Errors
    // ========================================================================
    #[error("Symbol '{0}' is already registered")]
    DuplicateSymbol(String),

    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ========================================================================
    // Trading Errors
    // ========================================================================
    #[error("Slippage exceeded: expected at least {expected_min}, got {actual}")]
    SlippageExceeded { expected_min: u64, actual: u64 },

    #[error("Insufficient reserves: requested {requested}, available {available}")]
    InsufficientReserves { requested: u64, available: u64 },

    #[error("Position {position} holds coin {actual}, expected {expected}")]
    PositionCoinMismatch {
        position: ObjectId,
        expected: ObjectId,
        actual: ObjectId,
    },

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u64, available: u64 },

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized")]
    Unauthorized,

    // ========================================================================
    // Math Errors
    // ========================================================================
    #[error("Math overflow")]
    MathOverflow,

    #[error("Math underflow")]
    MathUnderflow,

    #[error("Division by zero")]
    DivisionByZero,

    // ========================================================================
    // Object and Configuration Errors
    // ========================================================================
    #[error("Object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to access config file {path}: {reason}")]
    ConfigIo { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

/// Result type using launchpad errors
pub type LaunchpadResult<T> = Result<T, LaunchpadError>;

impl LaunchpadError {
    pub fn duplicate_symbol(symbol: &str) -> Self {
        Self::DuplicateSymbol(symbol.to_string())
    }

    pub fn invalid_symbol(symbol: &str) -> Self {
        Self::InvalidSymbol(symbol.to_string())
    }

    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount(reason.into())
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// True for the six rejection kinds callers are expected to handle
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSymbol(_)
                | Self::InvalidSymbol(_)
                | Self::InvalidAmount(_)
                | Self::SlippageExceeded { .. }
                | Self::InsufficientReserves { .. }
                | Self::Unauthorized
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LaunchpadError::duplicate_symbol("MOON");
        assert_eq!(format!("{}", err), "Symbol 'MOON' is already registered");

        let err = LaunchpadError::SlippageExceeded {
            expected_min: 10,
            actual: 9,
        };
        assert_eq!(
            format!("{}", err),
            "Slippage exceeded: expected at least 10, got 9"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(LaunchpadError::Unauthorized.is_rejection());
        assert!(LaunchpadError::invalid_amount("zero").is_rejection());
        assert!(!LaunchpadError::MathOverflow.is_rejection());
        assert!(!LaunchpadError::ObjectNotFound(ObjectId::new(7)).is_rejection());
    }
}
