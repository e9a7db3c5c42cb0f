//! Stored passwords for Passgen.
//!
//! Persists `{username, purpose, password}` rows and lists them back per
//! user. The store is handed to the UI as a trait object so screens never
//! own a database connection themselves.

use std::sync::Arc;

use rusqlite::params;

use crate::database::{self, Database};
use crate::types::credential::{NewStoredPassword, StoredPassword, MAX_FIELD_LENGTH};
use crate::types::errors::StoreError;

/// Trait defining stored-password persistence.
pub trait PasswordStoreTrait {
    /// Inserts a row and returns its id.
    fn save(&self, record: &NewStoredPassword) -> Result<i64, StoreError>;

    /// All rows for `username`, oldest first.
    fn list_by_user(&self, username: &str) -> Result<Vec<StoredPassword>, StoreError>;
}

/// Password store backed by the `password` table.
pub struct SqlitePasswordStore {
    db: Arc<Database>,
}

impl SqlitePasswordStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn check_field(field: &'static str, value: &str) -> Result<(), StoreError> {
        if value.trim().is_empty() {
            return Err(StoreError::InvalidField {
                field,
                reason: "must not be empty".to_string(),
            });
        }
        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(StoreError::InvalidField {
                field,
                reason: format!("must be at most {} characters", MAX_FIELD_LENGTH),
            });
        }
        Ok(())
    }
}

impl PasswordStoreTrait for SqlitePasswordStore {
    fn save(&self, record: &NewStoredPassword) -> Result<i64, StoreError> {
        Self::check_field("username", &record.username)?;
        Self::check_field("purpose", &record.purpose)?;
        Self::check_field("password", &record.password)?;

        let conn = self.db.connection();
        conn.execute(
            "INSERT INTO password (username, password_for, password, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![record.username, record.purpose, record.password, database::now_ts()],
        )
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        let id = conn.last_insert_rowid();

        log::info!("Saved password #{} for '{}' ({})", id, record.username, record.purpose);
        Ok(id)
    }

    fn list_by_user(&self, username: &str) -> Result<Vec<StoredPassword>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                "SELECT id, username, password_for, password, created_at FROM password WHERE username = ?1 ORDER BY id ASC",
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params![username], |row| {
                Ok(StoredPassword {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    purpose: row.get(2)?,
                    password: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| StoreError::DatabaseError(e.to_string()))?);
        }
        log::debug!("Listed {} stored passwords for '{}'", result.len(), username);
        Ok(result)
    }
}
