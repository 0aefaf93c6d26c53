//! Encryptor configuration.

use crate::error::{CryptoError, CryptoResult};
use crate::key::DEFAULT_ITERATIONS;
use serde::{Deserialize, Serialize};

/// Password-based encryption algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PbeAlgorithm {
    /// PKCS#5 v1.5 PBES1 with MD5 key derivation and DES-CBC.
    #[default]
    #[serde(rename = "PBEWithMD5AndDES")]
    PbeWithMd5AndDes,
}

impl PbeAlgorithm {
    /// The JCE name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            PbeAlgorithm::PbeWithMd5AndDes => "PBEWithMD5AndDES",
        }
    }
}

/// Textual encoding of encrypted messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringOutputType {
    #[default]
    Base64,
    Hexadecimal,
}

/// Settings for a [`StandardPbeStringEncryptor`](crate::StandardPbeStringEncryptor).
///
/// The password is deliberately not part of the configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EncryptorConfig {
    pub algorithm: PbeAlgorithm,
    /// Number of hashing rounds used to obtain the key.
    pub key_obtention_iterations: u32,
    pub string_output_type: StringOutputType,
}

impl Default for EncryptorConfig {
    fn default() -> Self {
        Self {
            algorithm: PbeAlgorithm::default(),
            key_obtention_iterations: DEFAULT_ITERATIONS,
            string_output_type: StringOutputType::default(),
        }
    }
}

impl EncryptorConfig {
    /// Checks that the configuration can be used for encryption.
    pub fn validate(&self) -> CryptoResult<()> {
        if self.key_obtention_iterations == 0 {
            return Err(CryptoError::InvalidConfig(
                "key obtention iterations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
