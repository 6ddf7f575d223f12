//! The budget for a single earlier (or the current) month.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, Path, State};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    dashboard::{MonthBudget, budget_summary_view, expense_table_view, load_month_budget},
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    settings::SettingsStore,
    year_month::YearMonth,
};

/// The state needed for the month detail page.
#[derive(Debug, Clone)]
pub struct HistoryMonthPageState {
    pub db_connection: Arc<Mutex<Connection>>,
    pub settings_store: Arc<dyn SettingsStore>,
}

impl FromRef<AppState> for HistoryMonthPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            settings_store: state.settings_store.clone(),
        }
    }
}

/// Render the expenses and budget of the month given as `YYYY-MM`.
///
/// The budget is computed with the current settings. A month that is not
/// in the `YYYY-MM` format is answered with the 404 page.
pub async fn get_history_month_page(
    State(state): State<HistoryMonthPageState>,
    Path(year_month): Path<String>,
) -> Result<Markup, Error> {
    let year_month: YearMonth = year_month.parse()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let month = load_month_budget(year_month, &connection, state.settings_store.as_ref())?;

    Ok(history_month_view(&month))
}

fn history_month_view(month: &MonthBudget) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();
    let title = month.year_month.to_string();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-2" { "Budget for " (month.year_month) }

            p id="settings-note" class="text-sm text-gray-600 dark:text-gray-400 mb-6"
            {
                "Figures are calculated with today's settings, not the settings in place during this month."
            }

            (budget_summary_view(&month.summary))

            section class="w-full max-w-screen-lg mx-auto mb-6"
            {
                (expense_table_view(&month.expenses, false))
            }

            p { (link(endpoints::HISTORY_VIEW, "Back to history")) }
        }
    };

    base(&title, &[], &content)
}
