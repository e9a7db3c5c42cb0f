//! App Core for Passgen.
//!
//! Central struct holding the database and services. Screens get the
//! services through [`App::dispatcher`] instead of opening connections.

use std::path::Path;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::navigation::Dispatcher;
use crate::services::auth_service::SqliteAuthService;
use crate::services::clipboard::{self, ClipboardTrait};
use crate::services::password_generator::PasswordGeneratorTrait;
use crate::services::password_store::SqlitePasswordStore;
use crate::services::settings_engine::SettingsEngine;

/// Central application struct holding all services.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub auth: SqliteAuthService,
    pub store: SqlitePasswordStore,
    pub clipboard: Box<dyn ClipboardTrait>,
}

impl App {
    /// Opens the database at `db_path` and builds all services.
    pub fn new(settings_engine: SettingsEngine, db_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        log::info!("Using database {}", db_path.display());
        Ok(Self::with_database(settings_engine, db))
    }

    /// Builds services around an already opened database.
    pub fn with_database(settings_engine: SettingsEngine, db: Arc<Database>) -> Self {
        Self {
            auth: SqliteAuthService::new(db.clone()),
            store: SqlitePasswordStore::new(db.clone()),
            clipboard: clipboard::default_clipboard(),
            settings_engine,
            db,
        }
    }

    /// In-memory database with default settings.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        Ok(Self::with_database(SettingsEngine::new(None), db))
    }

    /// A dispatcher starting at the login screen, wired to this app's services.
    pub fn dispatcher(&self, generator: Box<dyn PasswordGeneratorTrait>) -> Dispatcher<'_> {
        Dispatcher::new(&self.auth, &self.store, self.clipboard.as_ref(), generator)
    }
}
