//! The expense ledger: storage, queries and the delete endpoint.

mod core;
mod db;
mod delete_endpoint;

pub use self::core::{Expense, ExpenseId, NewExpense, create_expense_table, map_expense_row};
#[cfg(test)]
pub use db::get_expense;
pub use db::{
    delete_expense, get_expense_months, get_expenses_for_month, insert_expense,
    sum_expenses_for_month,
};
pub use delete_endpoint::delete_expense_endpoint;
