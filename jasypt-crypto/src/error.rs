//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in password-based encryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Encrypt or decrypt was called before a password was set.
    #[error("password not set for password based encryptor")]
    PasswordNotSet,

    /// A password was already set; the encryptor cannot be re-keyed.
    #[error("encryptor already initialized, password cannot be changed")]
    AlreadyInitialized,

    /// The password cannot be used for key derivation.
    #[error("invalid password: {0}")]
    InvalidPassword(String),

    /// Encryptor configuration is not usable.
    #[error("invalid encryptor configuration: {0}")]
    InvalidConfig(String),

    /// The encrypted message is not valid base64 or hexadecimal.
    #[error("invalid encoding: {0}")]
    Encoding(String),

    /// The decoded message cannot even hold the salt.
    #[error("encrypted message too short: expected at least {expected} bytes, got {actual}")]
    MessageTooShort { expected: usize, actual: usize },

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (wrong password or corrupted data).
    #[error("decryption failed: {0}")]
    Decryption(String),
}
