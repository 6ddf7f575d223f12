//! The list of months that have expenses.

use std::sync::{Arc, Mutex};

use axum::extract::{FromRef, State};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint},
    expense::get_expense_months,
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    year_month::YearMonth,
};

/// The state needed for the history page.
#[derive(Debug, Clone)]
pub struct HistoryPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HistoryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the months that have at least one expense, newest first.
pub async fn get_history_page(State(state): State<HistoryPageState>) -> Result<Markup, Error> {
    let months = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_expense_months(&connection)?
    };

    Ok(history_view(&months))
}

fn history_view(months: &[YearMonth]) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-2xl font-bold mb-6" { "History" }

            @if months.is_empty() {
                p { "No expenses have been recorded yet." }
            } @else {
                ul id="month-list" class="space-y-2 text-lg"
                {
                    @for month in months {
                        li {
                            (link(
                                &format_endpoint(endpoints::HISTORY_MONTH_VIEW, month),
                                &month.to_string(),
                            ))
                        }
                    }
                }
            }
        }
    };

    base("History", &[], &content)
}
