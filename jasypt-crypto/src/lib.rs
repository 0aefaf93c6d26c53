//! Jasypt-compatible password-based string encryption.
//!
//! Implements `PBEWithMD5AndDES` the way Jasypt's `StandardPBEStringEncryptor`
//! applies it by default:
//!
//! 1. Key and IV: PKCS#5 v1.5 key derivation (MD5, 1000 iterations) over the
//!    password and an 8-byte random salt
//! 2. Cipher: DES-CBC with PKCS#5 padding
//! 3. Output: `salt || ciphertext`, base64 encoded (hexadecimal optional)
//!
//! Values encrypted by Jasypt's tooling with the default settings decrypt
//! unchanged, and the other way round.

mod cipher;
mod config;
mod encryptor;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, encrypt_with_salt, EncryptedMessage, BLOCK_SIZE};
pub use config::{EncryptorConfig, PbeAlgorithm, StringOutputType};
pub use encryptor::{Password, StandardPbeStringEncryptor};
pub use error::{CryptoError, CryptoResult};
pub use key::{derive_key, PbeKey, Salt, DEFAULT_ITERATIONS, IV_SIZE, KEY_SIZE, SALT_SIZE};
