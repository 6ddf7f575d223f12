//! The expense model and its table.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::Date;

use crate::year_month::YearMonth;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// Money spent on a given day, filed under the month it was recorded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    /// The ID of the expense, assigned by the database.
    pub id: ExpenseId,
    /// The month the expense counts towards. Never changes after creation.
    pub year_month: YearMonth,
    /// The day the expense was recorded.
    pub date: Date,
    /// The amount spent.
    pub amount: i64,
    /// A free-text note, empty if none was given.
    pub memo: String,
}

/// An expense that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub year_month: YearMonth,
    pub date: Date,
    pub amount: i64,
    pub memo: String,
}

impl NewExpense {
    /// Create an expense recorded on `date`, filed under the month of `date`.
    pub fn recorded_on(date: Date, amount: i64, memo: &str) -> Self {
        Self {
            year_month: YearMonth::from(date),
            date,
            amount,
            memo: memo.to_owned(),
        }
    }
}

/// Create the expense table and the month index.
///
/// `AUTOINCREMENT` keeps IDs from being reused after a delete.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year_month TEXT NOT NULL,
            date TEXT NOT NULL,
            amount INTEGER NOT NULL,
            memo TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_year_month ON expenses(year_month);",
    )?;

    Ok(())
}

pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        year_month: row.get(1)?,
        date: row.get(2)?,
        amount: row.get(3)?,
        memo: row.get(4)?,
    })
}
