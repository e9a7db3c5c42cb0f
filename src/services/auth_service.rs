//! Login accounts for Passgen.
//!
//! Accounts live in the `login` table as a username plus a salted
//! PBKDF2 hash. Plaintext passwords are never written or compared.

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::database::{self, Database};
use crate::services::crypto_service::{CryptoService, CryptoServiceTrait};
use crate::types::credential::{Credential, MAX_FIELD_LENGTH};
use crate::types::errors::AuthError;

/// Trait defining authentication operations.
pub trait AuthServiceTrait {
    /// Creates a new account.
    fn register(&self, username: &str, password: &str) -> Result<(), AuthError>;

    /// Returns `Ok(true)` only if the account exists and the password matches.
    /// Unknown users and wrong passwords are both `Ok(false)`.
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// Auth service backed by the `login` table.
pub struct SqliteAuthService {
    db: Arc<Database>,
    crypto: CryptoService,
}

impl SqliteAuthService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            crypto: CryptoService::new(),
        }
    }

    fn find(&self, username: &str) -> Result<Option<Credential>, AuthError> {
        self.db
            .connection()
            .query_row(
                "SELECT username, password_hash, salt, created_at FROM login WHERE username = ?1",
                params![username],
                |row| {
                    Ok(Credential {
                        username: row.get(0)?,
                        password_hash: row.get(1)?,
                        salt: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(|e| AuthError::DatabaseError(e.to_string()))
    }

    fn validate_username(username: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::InvalidUsername("must not be empty".to_string()));
        }
        if username.chars().count() > MAX_FIELD_LENGTH {
            return Err(AuthError::InvalidUsername(format!(
                "must be at most {} characters",
                MAX_FIELD_LENGTH
            )));
        }
        Ok(())
    }
}

impl AuthServiceTrait for SqliteAuthService {
    fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        Self::validate_username(username)?;
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if self.find(username)?.is_some() {
            return Err(AuthError::UserExists(username.to_string()));
        }

        let salt = self.crypto.generate_salt()?;
        let mut hash = self.crypto.hash_password(password, &salt)?;

        let result = self.db.connection().execute(
            "INSERT INTO login (username, password_hash, salt, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![username, hash, salt, database::now_ts()],
        );
        self.crypto.zeroize_memory(&mut hash);
        result.map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        log::info!("Registered user '{}'", username);
        Ok(())
    }

    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        let Some(credential) = self.find(username)? else {
            log::info!("Login rejected for unknown user '{}'", username);
            return Ok(false);
        };

        let ok = self
            .crypto
            .verify_password(password, &credential.salt, &credential.password_hash);
        if ok {
            log::info!("User '{}' logged in", username);
        } else {
            log::info!("Login rejected for user '{}'", username);
        }
        Ok(ok)
    }
}
