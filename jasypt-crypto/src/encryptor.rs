//! Stateful password-based string encryptor.
//!
//! The encryptor starts without a password and is initialized exactly once.
//! After that the password cannot be replaced, so every value decrypted
//! through one encryptor uses the same key.

use crate::cipher::{self, EncryptedMessage};
use crate::config::EncryptorConfig;
use crate::error::{CryptoError, CryptoResult};
use std::sync::OnceLock;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Encryption password, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    bytes: Vec<u8>,
}

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            bytes: password.into().into_bytes(),
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Jasypt-compatible string encryptor.
///
/// Safe to share between threads: the password lives in a [`OnceLock`], so
/// racing initializations install exactly one password.
pub struct StandardPbeStringEncryptor {
    config: EncryptorConfig,
    password: OnceLock<Password>,
}

impl StandardPbeStringEncryptor {
    /// Creates an uninitialized encryptor with default settings.
    pub fn new() -> Self {
        Self {
            config: EncryptorConfig::default(),
            password: OnceLock::new(),
        }
    }

    /// Creates an uninitialized encryptor with custom settings.
    pub fn with_config(config: EncryptorConfig) -> CryptoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            password: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &EncryptorConfig {
        &self.config
    }

    /// Whether a password has been set.
    pub fn is_initialized(&self) -> bool {
        self.password.get().is_some()
    }

    /// Sets the password.
    ///
    /// # Errors
    /// [`CryptoError::AlreadyInitialized`] if a password is already set.
    pub fn set_password(&self, password: impl Into<String>) -> CryptoResult<()> {
        if self.initialize_with(password) {
            Ok(())
        } else {
            Err(CryptoError::AlreadyInitialized)
        }
    }

    /// Sets the password unless one is already set.
    ///
    /// Returns `true` if this call installed the password. Exactly one of
    /// several concurrent callers gets `true`.
    pub fn initialize_with(&self, password: impl Into<String>) -> bool {
        let mut installed = false;
        self.password.get_or_init(|| {
            installed = true;
            Password::new(password)
        });
        installed
    }

    fn password(&self) -> CryptoResult<&Password> {
        self.password.get().ok_or(CryptoError::PasswordNotSet)
    }

    /// Encrypts a string with a random salt and encodes the result.
    pub fn encrypt(&self, plaintext: &str) -> CryptoResult<String> {
        let password = self.password()?;
        let message = cipher::encrypt(
            password.as_bytes(),
            plaintext.as_bytes(),
            self.config.key_obtention_iterations,
        )?;
        Ok(message.encode(self.config.string_output_type))
    }

    /// Decodes and decrypts a string produced by [`encrypt`](Self::encrypt)
    /// or by any Jasypt encryptor with the same settings.
    pub fn decrypt(&self, encrypted: &str) -> CryptoResult<String> {
        let password = self.password()?;
        let message = EncryptedMessage::decode(encrypted, self.config.string_output_type)?;
        let plaintext = cipher::decrypt(
            password.as_bytes(),
            &message,
            self.config.key_obtention_iterations,
        )?;
        String::from_utf8(plaintext)
            .map_err(|e| CryptoError::Decryption(format!("invalid UTF-8: {}", e)))
    }
}

impl Default for StandardPbeStringEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StandardPbeStringEncryptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardPbeStringEncryptor")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
