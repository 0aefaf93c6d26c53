//! Resolver for Jasypt-encrypted property values.
//!
//! A property whose value is `ENC(<ciphertext>)` is decrypted with the
//! password found under [`JASYPT_PASSWORD_PROPERTY_NAME`] in the same
//! property source:
//!
//! ```yaml
//! jasypt:
//!   encryption:
//!     password: your-encryption-password
//! my:
//!   secret:
//!     property: ENC(AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa)
//! ```

use crate::chain::PropertyExpressionResolver;
use crate::convert::ConversionService;
use crate::error::{ResolveError, ResolveResult};
use crate::property::PropertyResolver;
use jasypt_crypto::{EncryptorConfig, StandardPbeStringEncryptor};
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};

/// Marker that opens an encrypted expression.
pub const JASYPT_PREFIX: &str = "ENC(";

/// Property holding the decryption password.
pub const JASYPT_PASSWORD_PROPERTY_NAME: &str = "jasypt.encryption.password";

/// Decrypts `ENC(...)` expressions and declines everything else.
///
/// The encryptor is owned by the resolver and receives its password lazily,
/// on the first encrypted expression, from the property source passed to
/// [`resolve`](Self::resolve). Once set, the password never changes.
#[derive(Debug, Default)]
pub struct JasyptPropertyResolver {
    encryptor: StandardPbeStringEncryptor,
}

impl JasyptPropertyResolver {
    /// Creates a resolver with Jasypt's default encryptor settings.
    pub fn new() -> Self {
        Self {
            encryptor: StandardPbeStringEncryptor::new(),
        }
    }

    /// Creates a resolver with custom encryptor settings.
    pub fn with_config(config: EncryptorConfig) -> ResolveResult<Self> {
        Ok(Self {
            encryptor: StandardPbeStringEncryptor::with_config(config)?,
        })
    }

    /// Whether the decryption password has been obtained.
    pub fn is_initialized(&self) -> bool {
        self.encryptor.is_initialized()
    }

    /// Returns true if the expression starts with the `ENC(` marker.
    ///
    /// Nothing else is checked, not even the closing parenthesis.
    pub fn is_encrypted_expression(&self, expression: &str) -> bool {
        expression.starts_with(JASYPT_PREFIX)
    }

    /// Returns everything between the marker and the last character.
    ///
    /// The last character is dropped whether or not it is `)`. Input exactly
    /// as long as the marker yields an empty string.
    ///
    /// # Errors
    /// [`ResolveError::ExpressionOutOfRange`] if the input is shorter than
    /// the marker or cannot be split after it.
    pub fn extract_ciphertext<'a>(&self, expression: &'a str) -> ResolveResult<&'a str> {
        let prefix_len = JASYPT_PREFIX.len();
        let out_of_range = || ResolveError::ExpressionOutOfRange {
            len: expression.len(),
            prefix_len,
        };

        if expression.len() < prefix_len {
            return Err(out_of_range());
        }
        let end = expression
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx);
        if end <= prefix_len {
            return Ok("");
        }
        expression.get(prefix_len..end).ok_or_else(out_of_range)
    }

    /// Decrypts an encrypted expression.
    ///
    /// The password must already be set; otherwise this fails with
    /// [`CryptoError::PasswordNotSet`](jasypt_crypto::CryptoError::PasswordNotSet).
    pub fn decrypt(&self, expression: &str) -> ResolveResult<String> {
        let ciphertext = self.extract_ciphertext(expression)?;
        Ok(self.encryptor.decrypt(ciphertext)?)
    }

    /// Resolves `expression` into a `T`.
    ///
    /// Returns `Ok(None)` for expressions without the marker so the next
    /// resolver can try them. A missing password is not reported here; the
    /// decryption that follows fails instead.
    pub fn resolve<T, P, C>(
        &self,
        properties: &P,
        conversion: &C,
        expression: &str,
    ) -> ResolveResult<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
        P: PropertyResolver + ?Sized,
        C: ConversionService,
    {
        if !self.is_encrypted_expression(expression) {
            return Ok(None);
        }
        self.ensure_initialized(properties);

        let plaintext = self.decrypt(expression)?;
        Ok(Some(conversion.convert(&plaintext)?))
    }

    fn ensure_initialized<P>(&self, properties: &P)
    where
        P: PropertyResolver + ?Sized,
    {
        if self.encryptor.is_initialized() {
            return;
        }
        match properties.get_property(JASYPT_PASSWORD_PROPERTY_NAME) {
            Some(password) => {
                if self.encryptor.initialize_with(password) {
                    debug!(
                        property = JASYPT_PASSWORD_PROPERTY_NAME,
                        "Jasypt encryptor initialized"
                    );
                }
            }
            None => warn!(
                property = JASYPT_PASSWORD_PROPERTY_NAME,
                "Encrypted value found but no password is configured"
            ),
        }
    }
}

impl PropertyExpressionResolver for JasyptPropertyResolver {
    fn resolve_expression(
        &self,
        properties: &dyn PropertyResolver,
        expression: &str,
    ) -> ResolveResult<Option<String>> {
        if !self.is_encrypted_expression(expression) {
            return Ok(None);
        }
        self.ensure_initialized(properties);
        debug!("Resolving encrypted expression");
        self.decrypt(expression).map(Some)
    }
}

/// Wraps a ciphertext in the `ENC(...)` marker.
pub fn wrap_encrypted(ciphertext: &str) -> String {
    format!("{JASYPT_PREFIX}{ciphertext})")
}
