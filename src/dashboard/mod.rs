//! Dashboard module
//!
//! Shows the budget for the current month and takes new expenses. The
//! summary cards and expense table are shared with the month history pages.

mod cards;
mod handlers;
mod month;
mod tables;

pub use handlers::{add_expense_endpoint, get_dashboard_page};

pub(crate) use cards::budget_summary_view;
pub(crate) use month::{MonthBudget, load_month_budget};
pub(crate) use tables::expense_table_view;
