//! Dashboard HTTP handlers and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    coercion::skip_on_failure,
    dashboard::{MonthBudget, budget_summary_view, expense_table_view, load_month_budget},
    endpoints,
    expense::{NewExpense, insert_expense},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::NavBar,
    settings::SettingsStore,
    timezone::local_today,
    year_month::YearMonth,
};

/// The state needed for displaying the dashboard and adding expenses.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
    /// The budget settings applied to the current month.
    pub settings_store: Arc<dyn SettingsStore>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
            settings_store: state.settings_store.clone(),
        }
    }
}

/// Form data for a new expense.
///
/// The amount is kept as text, a submission with an amount that is not an
/// integer is dropped without an error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub amount: Option<String>,
    pub memo: Option<String>,
}

/// Display the budget for the current month.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    render_dashboard(today, &state)
}

/// Record an expense for today and display the updated dashboard.
pub async fn add_expense_endpoint(
    State(state): State<DashboardState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    if let Some(amount) = skip_on_failure("amount", form.amount.as_deref()) {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        let memo = form.memo.unwrap_or_default();
        let expense = insert_expense(NewExpense::recorded_on(today, amount, &memo), &connection)?;
        tracing::info!("Added expense {} of {} on {}", expense.id, expense.amount, expense.date);
    }

    render_dashboard(today, &state)
}

fn render_dashboard(today: Date, state: &DashboardState) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let month = load_month_budget(
        YearMonth::from(today),
        &connection,
        state.settings_store.as_ref(),
    )?;

    Ok(dashboard_view(&month).into_response())
}

fn dashboard_view(month: &MonthBudget) -> Markup {
    let nav_bar = NavBar::new(endpoints::ROOT).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-6" { "Budget for " (month.year_month) }

            (budget_summary_view(&month.summary))

            section class="w-full max-w-screen-lg mx-auto mb-8"
            {
                (expense_form_view())
            }

            section class="w-full max-w-screen-lg mx-auto"
            {
                h3 class="text-xl font-semibold mb-4" { "Expenses this month" }
                (expense_table_view(&month.expenses, true))
            }
        }
    };

    let script = format!("{}/app.js", endpoints::STATIC);

    base(
        "This Month",
        &[HeadElement::ScriptLink(script)],
        &content,
    )
}

fn expense_form_view() -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::ROOT)
            class="flex flex-col md:flex-row gap-4 items-end"
        {
            div class="w-full"
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="1"
                    placeholder="0"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="w-full"
            {
                label for="memo" class=(FORM_LABEL_STYLE) { "Memo" }
                input
                    id="memo"
                    type="text"
                    name="memo"
                    placeholder="What was it for?"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="w-full md:w-40"
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
            }
        }
    }
}
