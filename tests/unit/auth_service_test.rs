//! Tests for account registration and login checks.

use std::sync::Arc;

use passgen::database::Database;
use passgen::services::auth_service::{AuthServiceTrait, SqliteAuthService};
use passgen::types::credential::MAX_FIELD_LENGTH;
use passgen::types::errors::AuthError;

fn setup() -> (Arc<Database>, SqliteAuthService) {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let auth = SqliteAuthService::new(db.clone());
    (db, auth)
}

#[test]
fn test_register_then_verify() {
    let (_db, auth) = setup();
    auth.register("alice", "correct horse").unwrap();
    assert!(auth.verify("alice", "correct horse").unwrap());
}

#[test]
fn test_wrong_password_is_false() {
    let (_db, auth) = setup();
    auth.register("alice", "correct horse").unwrap();
    assert!(!auth.verify("alice", "battery staple").unwrap());
    assert!(!auth.verify("alice", "").unwrap());
}

#[test]
fn test_unknown_user_is_false() {
    let (_db, auth) = setup();
    assert!(!auth.verify("nobody", "anything").unwrap());
}

#[test]
fn test_usernames_are_case_sensitive() {
    let (_db, auth) = setup();
    auth.register("alice", "pw").unwrap();
    assert!(!auth.verify("Alice", "pw").unwrap());
}

#[test]
fn test_duplicate_register_rejected() {
    let (_db, auth) = setup();
    auth.register("alice", "one").unwrap();
    let err = auth.register("alice", "two").unwrap_err();
    assert!(matches!(err, AuthError::UserExists(ref name) if name == "alice"));
    // First password still works
    assert!(auth.verify("alice", "one").unwrap());
}

#[test]
fn test_invalid_registrations() {
    let (_db, auth) = setup();
    assert!(matches!(auth.register("", "pw"), Err(AuthError::InvalidUsername(_))));
    assert!(matches!(auth.register("  ", "pw"), Err(AuthError::InvalidUsername(_))));
    let long_name = "u".repeat(MAX_FIELD_LENGTH + 1);
    assert!(matches!(auth.register(&long_name, "pw"), Err(AuthError::InvalidUsername(_))));
    assert!(matches!(auth.register("alice", ""), Err(AuthError::EmptyPassword)));
}

#[test]
fn test_plaintext_is_not_stored() {
    let (db, auth) = setup();
    auth.register("alice", "hunter2").unwrap();
    let (hash, salt): (Vec<u8>, Vec<u8>) = db
        .connection()
        .query_row(
            "SELECT password_hash, salt FROM login WHERE username = 'alice'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(hash.len(), 32);
    assert_eq!(salt.len(), 16);
    assert_ne!(hash, b"hunter2".to_vec());
}

#[test]
fn test_same_password_different_salts() {
    let (db, auth) = setup();
    auth.register("alice", "shared").unwrap();
    auth.register("bob", "shared").unwrap();
    let hashes: Vec<Vec<u8>> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT password_hash FROM login ORDER BY username")
            .unwrap();
        let rows = stmt.query_map([], |row| row.get::<_, Vec<u8>>(0)).unwrap();
        rows.map(|r| r.unwrap()).collect()
    };
    assert_eq!(hashes.len(), 2);
    assert_ne!(hashes[0], hashes[1]);
}
