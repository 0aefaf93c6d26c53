//! Decryption hook for Jasypt-encrypted configuration values.
//!
//! The host configuration system hands every unresolved expression to an
//! [`ExpressionResolverChain`]. [`JasyptPropertyResolver`] claims the ones
//! marked `ENC(...)`:
//!
//! 1. Detect the `ENC(` marker (anything else is declined with `None`)
//! 2. On first use, read `jasypt.encryption.password` from the same
//!    property source and initialize the encryptor with it
//! 3. Decrypt the ciphertext with `PBEWithMD5AndDES`
//! 4. Convert the plaintext to the requested type
//!
//! Failures (missing or wrong password, malformed ciphertext, conversion
//! errors) are returned to the caller; nothing falls back to a default.

mod chain;
mod convert;
mod error;
mod property;
mod resolver;

pub use chain::{ExpressionResolverChain, PropertyExpressionResolver};
pub use convert::{ConversionService, DefaultConversionService};
pub use error::{ConversionError, ConversionResult, ResolveError, ResolveResult};
pub use property::{MapPropertyResolver, PropertyResolver};
pub use resolver::{
    wrap_encrypted, JasyptPropertyResolver, JASYPT_PASSWORD_PROPERTY_NAME, JASYPT_PREFIX,
};

pub use jasypt_crypto::{
    CryptoError, EncryptorConfig, StandardPbeStringEncryptor, StringOutputType,
};
