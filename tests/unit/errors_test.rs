use passgen::types::errors::*;

// === GenerationError Tests ===

#[test]
fn generation_error_display_variants() {
    assert_eq!(
        GenerationError::InvalidLength(0).to_string(),
        "Invalid password length: 0 (must be at least 1)"
    );
    assert_eq!(
        GenerationError::TooLong(5000).to_string(),
        "Invalid password length: 5000 (must be at most 4096)"
    );
    assert_eq!(
        GenerationError::EmptyAlphabet.to_string(),
        "No characters available to generate from"
    );
    assert_eq!(
        GenerationError::NotANumber("abc".to_string()).to_string(),
        "Password length must be a number: \"abc\""
    );
}

#[test]
fn generation_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(GenerationError::EmptyAlphabet);
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::InvalidField {
            field: "purpose",
            reason: "must not be empty".to_string()
        }
        .to_string(),
        "Invalid purpose: must not be empty"
    );
    assert_eq!(
        StoreError::DatabaseError("disk full".to_string()).to_string(),
        "Password store database error: disk full"
    );
}

// === AuthError Tests ===

#[test]
fn auth_error_display_variants() {
    assert_eq!(AuthError::UserExists("bob".to_string()).to_string(), "User already exists: bob");
    assert_eq!(
        AuthError::InvalidUsername("must not be empty".to_string()).to_string(),
        "Invalid username: must not be empty"
    );
    assert_eq!(AuthError::EmptyPassword.to_string(), "Password must not be empty");
    assert_eq!(
        AuthError::Crypto("no entropy".to_string()).to_string(),
        "Credential hashing failed: no entropy"
    );
    assert_eq!(
        AuthError::DatabaseError("locked".to_string()).to_string(),
        "Auth database error: locked"
    );
}

// === ClipboardError Tests ===

#[test]
fn clipboard_error_display_variants() {
    assert_eq!(ClipboardError::Unavailable.to_string(), "Clipboard is not available");
    assert_eq!(
        ClipboardError::WriteFailed("x11".to_string()).to_string(),
        "Clipboard write failed: x11"
    );
}

// === SessionError Tests ===

#[test]
fn session_error_wraps_sources_transparently() {
    assert_eq!(
        SessionError::NothingGenerated.to_string(),
        "No password available. Please generate one first."
    );
    let err: SessionError = GenerationError::InvalidLength(-2).into();
    assert_eq!(err.to_string(), "Invalid password length: -2 (must be at least 1)");
    let err: SessionError = ClipboardError::Unavailable.into();
    assert_eq!(err.to_string(), "Clipboard is not available");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".to_string()).to_string(),
        "Invalid settings value: nope"
    );
}

// === UiError Tests ===

#[test]
fn ui_error_display_variants() {
    assert_eq!(UiError::Cancelled.to_string(), "Input cancelled");
    assert_eq!(UiError::Terminal("not a tty".to_string()).to_string(), "Terminal error: not a tty");
    let err: UiError = AuthError::EmptyPassword.into();
    assert_eq!(err.to_string(), "Password must not be empty");
}
