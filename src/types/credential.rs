use serde::{Deserialize, Serialize};

/// Maximum length of the username, purpose and password columns.
pub const MAX_FIELD_LENGTH: usize = 45;

/// A login account. The password itself is never kept, only its
/// salted PBKDF2 hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password_hash: Vec<u8>,
    pub salt: Vec<u8>,
    pub created_at: i64,
}

/// A row of the stored-password table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPassword {
    pub id: i64,
    pub username: String,
    /// Free-text label, e.g. the service the password is for.
    pub purpose: String,
    pub password: String,
    pub created_at: i64,
}

/// Insert payload for [`StoredPassword`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStoredPassword {
    pub username: String,
    pub purpose: String,
    pub password: String,
}

impl NewStoredPassword {
    pub fn new(username: impl Into<String>, purpose: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            purpose: purpose.into(),
            password: password.into(),
        }
    }
}
