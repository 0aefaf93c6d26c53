//! Message encryption using DES in CBC mode.
//!
//! An encrypted message is the salt in clear followed by the PKCS#5 padded
//! ciphertext, the layout Jasypt's standard PBE encryptors produce.

use crate::config::StringOutputType;
use crate::error::{CryptoError, CryptoResult};
use crate::key::{derive_key, Salt, SALT_SIZE};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

/// Size of a DES block in bytes.
pub const BLOCK_SIZE: usize = 8;

type DesCbcEnc = cbc::Encryptor<des::Des>;
type DesCbcDec = cbc::Decryptor<des::Des>;

/// Encrypted data with the salt needed to re-derive the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedMessage {
    /// The salt used for key derivation (unique per encryption).
    pub salt: Salt,
    /// The padded ciphertext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedMessage {
    /// Returns the total size of the message in bytes.
    pub fn len(&self) -> usize {
        SALT_SIZE + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Serializes to `salt || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(self.salt.as_bytes());
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Splits `salt || ciphertext`.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < SALT_SIZE {
            return Err(CryptoError::MessageTooShort {
                expected: SALT_SIZE,
                actual: bytes.len(),
            });
        }

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[..SALT_SIZE]);

        Ok(Self {
            salt: Salt::from_bytes(salt),
            ciphertext: bytes[SALT_SIZE..].to_vec(),
        })
    }

    /// Encodes to base64.
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine};
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes from base64.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::Encoding(format!("invalid base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Encodes to uppercase hexadecimal.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.to_bytes())
    }

    /// Decodes from hexadecimal (either case).
    pub fn from_hex(encoded: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(encoded)
            .map_err(|e| CryptoError::Encoding(format!("invalid hexadecimal: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Encodes with the given output type.
    pub fn encode(&self, output: StringOutputType) -> String {
        match output {
            StringOutputType::Base64 => self.to_base64(),
            StringOutputType::Hexadecimal => self.to_hex(),
        }
    }

    /// Decodes with the given output type, ignoring surrounding whitespace.
    pub fn decode(encoded: &str, output: StringOutputType) -> CryptoResult<Self> {
        let encoded = encoded.trim();
        match output {
            StringOutputType::Base64 => Self::from_base64(encoded),
            StringOutputType::Hexadecimal => Self::from_hex(encoded),
        }
    }
}

/// Encrypts plaintext with a key derived from `password` and `salt`.
///
/// Deterministic for a fixed salt; callers normally pass `Salt::random()`.
pub fn encrypt_with_salt(
    password: &[u8],
    salt: Salt,
    plaintext: &[u8],
    iterations: u32,
) -> CryptoResult<EncryptedMessage> {
    let key = derive_key(password, &salt, iterations)?;
    let cipher = DesCbcEnc::new_from_slices(key.key_bytes(), key.iv_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    Ok(EncryptedMessage { salt, ciphertext })
}

/// Encrypts plaintext with a freshly generated random salt.
pub fn encrypt(password: &[u8], plaintext: &[u8], iterations: u32) -> CryptoResult<EncryptedMessage> {
    encrypt_with_salt(password, Salt::random(), plaintext, iterations)
}

/// Decrypts a message with a key derived from `password` and the message salt.
///
/// A wrong password almost always shows up as a padding failure; DES-CBC has
/// no authentication tag, so a wrong password can occasionally produce
/// garbage instead.
pub fn decrypt(password: &[u8], message: &EncryptedMessage, iterations: u32) -> CryptoResult<Vec<u8>> {
    if message.ciphertext.is_empty() || message.ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::Decryption(format!(
            "ciphertext length {} is not a positive multiple of {}",
            message.ciphertext.len(),
            BLOCK_SIZE
        )));
    }

    let key = derive_key(password, &message.salt, iterations)?;
    let cipher = DesCbcDec::new_from_slices(key.key_bytes(), key.iv_bytes())
        .map_err(|e| CryptoError::Decryption(e.to_string()))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&message.ciphertext)
        .map_err(|_| CryptoError::Decryption("bad padding (wrong password or corrupted data)".to_string()))
}
