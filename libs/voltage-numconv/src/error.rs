//! Error types for voltage-numconv

use crate::numeral::Base;
use std::fmt;
use thiserror::Error;

/// Why a candidate string was rejected by the numeral validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Input was absent or empty
    Missing,
    /// First two characters are not the base prefix
    BadPrefix,
    /// Character outside the base alphabet (index counts from the first digit)
    BadDigit { ch: char, index: usize },
    /// Prefix present but no digits follow
    NoDigits,
    /// More digits than the base allows
    TooLong { len: usize, max: usize },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Missing => write!(f, "input is empty"),
            InvalidReason::BadPrefix => write!(f, "missing prefix"),
            InvalidReason::BadDigit { ch, index } => {
                write!(f, "invalid digit {:?} at position {}", ch, index)
            }
            InvalidReason::NoDigits => write!(f, "no digits after prefix"),
            InvalidReason::TooLong { len, max } => {
                write!(f, "{} digits exceeds maximum of {}", len, max)
            }
        }
    }
}

/// Conversion errors
#[derive(Debug, Error)]
pub enum NumconvError {
    #[error("Invalid {base} format: {reason}")]
    InvalidFormat { base: Base, reason: InvalidReason },

    #[error("Unsupported value: {0}")]
    UnsupportedValue(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NumconvError {
    pub fn invalid_format(base: Base, reason: InvalidReason) -> Self {
        Self::InvalidFormat { base, reason }
    }

    pub fn unsupported_value(value: impl Into<i64>) -> Self {
        Self::UnsupportedValue(value.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Malformed numeral input
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Well-formed input outside the supported numeric range
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue(_))
    }
}

pub type Result<T> = std::result::Result<T, NumconvError>;
