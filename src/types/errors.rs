use thiserror::Error;

use crate::types::generation::MAX_LENGTH;

// === GenerationError ===

/// Reasons a password could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested length was below 1.
    #[error("Invalid password length: {0} (must be at least 1)")]
    InvalidLength(i64),
    /// The requested length was above [`MAX_LENGTH`].
    #[error("Invalid password length: {0} (must be at most {max})", max = MAX_LENGTH)]
    TooLong(i64),
    /// No character class contributed any characters.
    #[error("No characters available to generate from")]
    EmptyAlphabet,
    /// Length input could not be read as a whole number.
    #[error("Password length must be a number: {0:?}")]
    NotANumber(String),
}

// === StoreError ===

/// Errors related to stored-password persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A field was empty or longer than the column allows.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    /// Database operation failed.
    #[error("Password store database error: {0}")]
    DatabaseError(String),
}

// === AuthError ===

/// Errors related to login accounts.
#[derive(Debug, Error)]
pub enum AuthError {
    /// An account with this username already exists.
    #[error("User already exists: {0}")]
    UserExists(String),
    /// The username is empty or too long.
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    /// The password is empty.
    #[error("Password must not be empty")]
    EmptyPassword,
    /// Key derivation or salt generation failed.
    #[error("Credential hashing failed: {0}")]
    Crypto(String),
    /// Database operation failed.
    #[error("Auth database error: {0}")]
    DatabaseError(String),
}

// === ClipboardError ===

/// Errors related to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard backend is compiled in or reachable.
    #[error("Clipboard is not available")]
    Unavailable,
    /// The backend refused the write.
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

// === SessionError ===

/// Errors raised by the generator screen's session state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Copy or save was requested before anything was generated.
    #[error("No password available. Please generate one first.")]
    NothingGenerated,
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === UiError ===

/// Errors from the interactive front-end.
#[derive(Debug, Error)]
pub enum UiError {
    /// The user cancelled a prompt (Esc / Ctrl+C).
    #[error("Input cancelled")]
    Cancelled,
    /// The terminal could not be read or written.
    #[error("Terminal error: {0}")]
    Terminal(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
