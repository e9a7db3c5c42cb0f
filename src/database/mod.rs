//! Passgen database layer.
//!
//! Provides SQLite connection management and schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use passgen::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("passgen.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

pub mod connection;
pub mod migrations;

pub use connection::Database;

/// Seconds since the Unix epoch, used for `created_at` columns.
pub(crate) fn now_ts() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
