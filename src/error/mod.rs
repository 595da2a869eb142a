//! Error handling for the elliptic-curve core

use crate::params::Scheme;
use std::borrow::Cow;
use std::fmt;

/// The error type for elliptic-curve operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key material failed validation (wrong curve, not on curve, zero scalar)
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// Reason the key was rejected
        reason: &'static str,
    },

    /// Two keys that must share a curve scheme do not
    SchemeMismatch {
        /// Operation that detected the mismatch
        context: &'static str,
        /// Scheme of the first key
        expected: Scheme,
        /// Scheme of the second key
        actual: Scheme,
    },

    /// Malformed DER or PEM structure
    Encoding {
        /// Structure being decoded
        context: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// I/O failure while loading key material from a file
    Io {
        /// Path or operation that failed
        context: &'static str,
        /// Underlying error message
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for elliptic-curve operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidKey { context, reason } => {
                write!(f, "Invalid key in {}: {}", context, reason)
            }
            Error::SchemeMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Curve scheme mismatch in {}: {} vs {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, details } => {
                write!(f, "Malformed {}: {}", context, details)
            }
            Error::Io { context, details } => {
                write!(f, "I/O error for {}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
