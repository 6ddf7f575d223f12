//! Loading everything needed to show the budget for one month.

use rusqlite::Connection;

use crate::{
    Error,
    budget::{BudgetSummary, compute_budget},
    expense::{Expense, get_expenses_for_month, sum_expenses_for_month},
    settings::SettingsStore,
    year_month::YearMonth,
};

/// The expenses of a month and the budget computed from them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthBudget {
    pub year_month: YearMonth,
    pub summary: BudgetSummary,
    pub expenses: Vec<Expense>,
}

/// Load the expenses for `year_month` and compute its budget with the
/// settings currently saved in `settings_store`.
///
/// Settings are not versioned, so past months are always shown against
/// today's income, savings goal and fixed costs.
pub(crate) fn load_month_budget(
    year_month: YearMonth,
    connection: &Connection,
    settings_store: &dyn SettingsStore,
) -> Result<MonthBudget, Error> {
    let expenses = get_expenses_for_month(year_month, connection)?;
    let used_amount = sum_expenses_for_month(year_month, connection)?;
    let settings = settings_store.load()?;

    Ok(MonthBudget {
        year_month,
        summary: compute_budget(&settings, used_amount),
        expenses,
    })
}
