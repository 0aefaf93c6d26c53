//! Key derivation and management.
//!
//! PBEWithMD5AndDES derives both the DES key and the CBC IV from the
//! password and salt with PKCS#5 v1.5 (PBKDF1 over MD5).

use crate::error::{CryptoError, CryptoResult};
use md5::{Digest, Md5};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a DES key in bytes.
pub const KEY_SIZE: usize = 8;

/// Size of the CBC initialization vector (one DES block).
pub const IV_SIZE: usize = 8;

/// Size of salt in bytes. Equal to the DES block size.
pub const SALT_SIZE: usize = 8;

/// Iteration count Jasypt uses unless configured otherwise.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Key material derived from a password, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PbeKey {
    key: [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl PbeKey {
    /// Creates key material from raw bytes.
    pub fn from_bytes(key: [u8; KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self { key, iv }
    }

    /// Returns the DES key bytes.
    pub fn key_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Returns the IV bytes.
    pub fn iv_bytes(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }
}

impl std::fmt::Debug for PbeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PbeKey")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Salt for key derivation, stored in clear in front of the ciphertext.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    bytes: [u8; SALT_SIZE],
}

impl Salt {
    /// Generates a random salt.
    pub fn random() -> Self {
        let mut bytes = [0u8; SALT_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a salt from raw bytes.
    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.bytes
    }
}

/// Derives the DES key and IV from a password.
///
/// `MD5(password || salt)` is hashed again `iterations - 1` times; the first
/// half of the final digest is the key, the second half the IV.
///
/// # Errors
/// The password must be printable ASCII (the JCE rejects anything else for
/// PBES1) and `iterations` must be at least one.
pub fn derive_key(password: &[u8], salt: &Salt, iterations: u32) -> CryptoResult<PbeKey> {
    if !password.iter().all(|b| (0x20..=0x7e).contains(b)) {
        return Err(CryptoError::InvalidPassword(
            "password must contain only printable ASCII characters".to_string(),
        ));
    }
    if iterations == 0 {
        return Err(CryptoError::InvalidConfig(
            "key obtention iterations must be greater than zero".to_string(),
        ));
    }

    let mut hasher = Md5::new();
    hasher.update(password);
    hasher.update(salt.as_bytes());
    let mut digest = hasher.finalize();
    for _ in 1..iterations {
        let next = Md5::digest(&digest);
        digest.as_mut_slice().zeroize();
        digest = next;
    }

    let mut key = [0u8; KEY_SIZE];
    let mut iv = [0u8; IV_SIZE];
    key.copy_from_slice(&digest[..KEY_SIZE]);
    iv.copy_from_slice(&digest[KEY_SIZE..KEY_SIZE + IV_SIZE]);
    digest.as_mut_slice().zeroize();

    Ok(PbeKey::from_bytes(key, iv))
}
