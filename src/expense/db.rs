//! Database operations for the expense ledger.

use rusqlite::{Connection, OptionalExtension};

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense, map_expense_row},
    year_month::YearMonth,
};

/// Save an expense and return it with its generated ID.
pub fn insert_expense(expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    connection.execute(
        "INSERT INTO expenses (year_month, date, amount, memo) VALUES (?1, ?2, ?3, ?4)",
        (
            &expense.year_month,
            &expense.date,
            expense.amount,
            &expense.memo,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        year_month: expense.year_month,
        date: expense.date,
        amount: expense.amount,
        memo: expense.memo,
    })
}

/// Retrieve a single expense by ID.
#[cfg(test)]
pub fn get_expense(id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare("SELECT id, year_month, date, amount, memo FROM expenses WHERE id = :id")?
        .query_row(&[(":id", &id)], map_expense_row)
        .map_err(Error::from)
}

/// Retrieve the expenses filed under `year_month` in the order they were added.
pub fn get_expenses_for_month(
    year_month: YearMonth,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, year_month, date, amount, memo FROM expenses
            WHERE year_month = ?1
            ORDER BY id ASC",
        )?
        .query_map([year_month], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// The total amount spent in `year_month`, `0` if nothing was recorded.
///
/// The total saturates at the bounds of `i64` instead of failing, SQLite's
/// `SUM` errors on integer overflow.
pub fn sum_expenses_for_month(year_month: YearMonth, connection: &Connection) -> Result<i64, Error> {
    connection
        .prepare("SELECT amount FROM expenses WHERE year_month = ?1")?
        .query_map([year_month], |row| row.get::<_, i64>(0))?
        .try_fold(0_i64, |total, amount| -> Result<i64, Error> {
            Ok(total.saturating_add(amount?))
        })
}

/// The months that have at least one expense, newest first.
pub fn get_expense_months(connection: &Connection) -> Result<Vec<YearMonth>, Error> {
    connection
        .prepare("SELECT DISTINCT year_month FROM expenses ORDER BY year_month DESC")?
        .query_map([], |row| row.get(0))?
        .map(|maybe_month| maybe_month.map_err(Error::from))
        .collect()
}

/// Delete an expense, as long as it belongs to `current_month`.
///
/// Past months are closed: their totals may already have been looked at, so
/// their expenses are kept as they are.
///
/// Returns the month the deleted expense was filed under.
///
/// # Errors
///
/// - [Error::DeleteMissingExpense] if there is no expense with `id`.
/// - [Error::PastMonthProtected] if the expense belongs to another month. The
///   expense is left in place.
pub fn delete_expense(
    id: ExpenseId,
    current_month: YearMonth,
    connection: &Connection,
) -> Result<YearMonth, Error> {
    let transaction = connection.unchecked_transaction()?;

    let year_month: Option<YearMonth> = transaction
        .query_row(
            "SELECT year_month FROM expenses WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .optional()?;

    let Some(year_month) = year_month else {
        return Err(Error::DeleteMissingExpense);
    };

    if year_month != current_month {
        return Err(Error::PastMonthProtected(year_month));
    }

    transaction.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
    transaction.commit()?;

    Ok(year_month)
}
