use jasypt_crypto::{
    CryptoError, EncryptorConfig, Password, PbeAlgorithm, StandardPbeStringEncryptor,
    StringOutputType,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn initialized(password: &str) -> StandardPbeStringEncryptor {
    let enc = StandardPbeStringEncryptor::new();
    enc.set_password(password).unwrap();
    enc
}

// ── Lifecycle ────────────────────────────────────────────────────

#[test]
fn new_encryptor_is_uninitialized() {
    let enc = StandardPbeStringEncryptor::new();
    assert!(!enc.is_initialized());
}

#[test]
fn set_password_initializes() {
    let enc = StandardPbeStringEncryptor::new();
    enc.set_password("test-password").unwrap();
    assert!(enc.is_initialized());
}

#[test]
fn set_password_twice_fails() {
    let enc = initialized("test-password");
    let result = enc.set_password("other-password");
    assert!(matches!(result, Err(CryptoError::AlreadyInitialized)));
    // The first password is still in use.
    assert_eq!(enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa").unwrap(), "some-text");
}

#[test]
fn initialize_with_reports_winner() {
    let enc = StandardPbeStringEncryptor::new();
    assert!(enc.initialize_with("test-password"));
    assert!(!enc.initialize_with("other-password"));
    assert_eq!(enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa").unwrap(), "some-text");
}

#[test]
fn concurrent_initialization_installs_one_password() {
    let enc = StandardPbeStringEncryptor::new();
    let winners = AtomicUsize::new(0);

    std::thread::scope(|s| {
        for i in 0..8 {
            let enc = &enc;
            let winners = &winners;
            s.spawn(move || {
                let password = if i % 2 == 0 { "test-password" } else { "other-password" };
                if enc.initialize_with(password) {
                    winners.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    assert!(enc.is_initialized());
}

#[test]
fn decrypt_without_password_fails() {
    let enc = StandardPbeStringEncryptor::new();
    let result = enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa");
    assert!(matches!(result, Err(CryptoError::PasswordNotSet)));
}

#[test]
fn encrypt_without_password_fails() {
    let enc = StandardPbeStringEncryptor::new();
    assert!(matches!(enc.encrypt("x"), Err(CryptoError::PasswordNotSet)));
}

// ── Encrypt / decrypt ────────────────────────────────────────────

#[test]
fn decrypts_reference_vectors() {
    let enc = initialized("test-password");
    assert_eq!(enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa").unwrap(), "some-text");
    assert_eq!(enc.decrypt("CAcGBQQDAgEaJCxoP27k6A==").unwrap(), "42");
    assert_eq!(enc.decrypt("obLD1OX2BxhgXGgTRYF9ug==").unwrap(), "true");
    assert_eq!(enc.decrypt("IiIiIiIiIiJE4jwxcdNY7g==").unwrap(), "3.5");
    assert_eq!(enc.decrypt("ERERERERERGS5I3WwRgw5A==").unwrap(), "");
}

#[test]
fn decrypts_utf8_plaintext() {
    let enc = initialized("test-password");
    assert_eq!(enc.decrypt("AQIDBAUGBwgfTQSA4n+njZgZQtrbTorm").unwrap(), "Hello, 世界");
}

#[test]
fn string_roundtrip() {
    let enc = initialized("s3cr3t!");
    let encrypted = enc.encrypt("Hello, 世界! 🌍").unwrap();
    assert_eq!(enc.decrypt(&encrypted).unwrap(), "Hello, 世界! 🌍");
}

#[test]
fn decrypt_is_deterministic() {
    let enc = initialized("test-password");
    let first = enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa").unwrap();
    let second = enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa").unwrap();
    assert_eq!(first, second);
}

#[test]
fn wrong_password_fails() {
    let enc = initialized("wrong-password");
    let result = enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa");
    assert!(matches!(result, Err(CryptoError::Decryption(_))));
}

#[test]
fn malformed_ciphertext_fails() {
    let enc = initialized("test-password");
    assert!(matches!(enc.decrypt("not base64!"), Err(CryptoError::Encoding(_))));
    assert!(matches!(
        enc.decrypt(""),
        Err(CryptoError::MessageTooShort { .. })
    ));
}

#[test]
fn non_ascii_password_fails_on_use() {
    let enc = initialized("contraseña");
    assert!(matches!(
        enc.decrypt("AQIDBAUGBwgbeYjU7ETd5Nlc1nm0EVGa"),
        Err(CryptoError::InvalidPassword(_))
    ));
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn hexadecimal_output() {
    let config = EncryptorConfig {
        string_output_type: StringOutputType::Hexadecimal,
        ..EncryptorConfig::default()
    };
    let enc = StandardPbeStringEncryptor::with_config(config).unwrap();
    enc.set_password("test-password").unwrap();

    assert_eq!(
        enc.decrypt("01020304050607081B7988D4EC44DDE4D95CD679B411519A").unwrap(),
        "some-text"
    );
    let encrypted = enc.encrypt("hex").unwrap();
    assert!(encrypted.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(enc.decrypt(&encrypted).unwrap(), "hex");
}

#[test]
fn custom_iterations_roundtrip() {
    let config = EncryptorConfig {
        key_obtention_iterations: 10,
        ..EncryptorConfig::default()
    };
    let enc = StandardPbeStringEncryptor::with_config(config).unwrap();
    enc.set_password("test-password").unwrap();
    let encrypted = enc.encrypt("payload").unwrap();
    assert_eq!(enc.decrypt(&encrypted).unwrap(), "payload");
}

#[test]
fn zero_iterations_rejected() {
    let config = EncryptorConfig {
        key_obtention_iterations: 0,
        ..EncryptorConfig::default()
    };
    assert!(matches!(
        StandardPbeStringEncryptor::with_config(config),
        Err(CryptoError::InvalidConfig(_))
    ));
}

#[test]
fn default_config_matches_jasypt() {
    let config = EncryptorConfig::default();
    assert_eq!(config.algorithm, PbeAlgorithm::PbeWithMd5AndDes);
    assert_eq!(config.algorithm.name(), "PBEWithMD5AndDES");
    assert_eq!(config.key_obtention_iterations, 1000);
    assert_eq!(config.string_output_type, StringOutputType::Base64);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: EncryptorConfig =
        serde_json::from_str(r#"{"string-output-type":"hexadecimal"}"#).unwrap();
    assert_eq!(config.string_output_type, StringOutputType::Hexadecimal);
    assert_eq!(config.key_obtention_iterations, 1000);

    let config: EncryptorConfig = serde_json::from_str(
        r#"{"algorithm":"PBEWithMD5AndDES","key-obtention-iterations":2000}"#,
    )
    .unwrap();
    assert_eq!(config.key_obtention_iterations, 2000);
}

#[test]
fn config_rejects_unknown_algorithm() {
    let result: Result<EncryptorConfig, _> =
        serde_json::from_str(r#"{"algorithm":"PBEWithHMACSHA512AndAES_256"}"#);
    assert!(result.is_err());
}

// ── Debug output ─────────────────────────────────────────────────

#[test]
fn debug_does_not_leak_password() {
    let enc = initialized("super-secret");
    let debug = format!("{:?}", enc);
    assert!(debug.contains("initialized: true"));
    assert!(!debug.contains("super-secret"));

    let password = Password::new("super-secret");
    assert!(!format!("{:?}", password).contains("super-secret"));
}
