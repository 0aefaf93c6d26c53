//! Error types for expression resolution.

use jasypt_crypto::CryptoError;
use thiserror::Error;

/// Result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type for type conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// A resolved string could not be converted to the requested type.
///
/// Only the length of the offending value is kept; it is usually a
/// decrypted secret.
#[derive(Debug, Error)]
#[error("cannot convert value ({value_len} bytes) to {target}: {reason}")]
pub struct ConversionError {
    pub value_len: usize,
    pub target: &'static str,
    pub reason: String,
}

/// Errors raised while resolving an expression.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Decryption failed: missing or wrong password, malformed ciphertext.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The decrypted value does not parse as the requested type.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// The expression is too short to hold the marker.
    #[error("expression of {len} bytes is out of range for the {prefix_len}-byte marker")]
    ExpressionOutOfRange { len: usize, prefix_len: usize },
}
