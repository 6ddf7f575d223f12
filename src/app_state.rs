//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, settings::SettingsStore};

/// The state of the web server.
///
/// Handlers do not take this directly, each one declares the parts it needs
/// in its own state struct that implements `FromRef<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    ///
    /// "Today" and the current month are worked out in this timezone on
    /// every request.
    pub local_timezone: String,

    /// The database connection for the expense ledger.
    pub db_connection: Arc<Mutex<Connection>>,

    /// Where the budget settings are loaded from and saved to.
    pub settings_store: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the expense table.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Tokyo".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        settings_store: Arc<dyn SettingsStore>,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            db_connection: Arc::new(Mutex::new(db_connection)),
            settings_store,
        })
    }
}
