//! Error types for the Commission Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording sales and
//! calculating commissions.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Commission Engine.
///
/// Every failure is an input-validation failure detected at the call that
/// introduces the bad value. None are transient, and the operation that
/// raised one leaves prior state unchanged.
///
/// # Example
///
/// ```
/// use commission_engine::error::EngineError;
///
/// let error = EngineError::InvalidTier { value: "7".to_string() };
/// assert_eq!(error.to_string(), "Invalid experience tier: 7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The employee name was not a first and last name.
    #[error("Invalid employee name '{name}': {message}")]
    InvalidName {
        /// The name as supplied by the caller.
        name: String,
        /// A description of what made the name invalid.
        message: String,
    },

    /// The experience tier was outside the known tiers.
    #[error("Invalid experience tier: {value}")]
    InvalidTier {
        /// The rejected tier value.
        value: String,
    },

    /// The sale category was outside the known categories.
    #[error("Invalid sale category: {value}")]
    InvalidCategory {
        /// The rejected category value.
        value: String,
    },

    /// The sale amount was negative or above the configured maximum.
    #[error("Invalid sale amount {amount}: must be between 0.00 and {max}")]
    InvalidAmount {
        /// The rejected amount.
        amount: Decimal,
        /// The maximum amount a single sale may have.
        max: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contained an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
