//! Setting up the application's database.

use rusqlite::Connection;

use crate::{Error, expense::create_expense_table};

/// Create the tables the app needs if they do not exist yet.
///
/// This is safe to call on every start up.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
